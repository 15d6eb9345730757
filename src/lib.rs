pub mod error;
pub mod grid;
pub mod input;
pub mod price;
pub mod snake;
pub mod state;
pub mod term;
pub mod game;

pub use error::{Error, Result};

pub const WIDTH: usize = 15;
pub const HEIGHT: usize = 15;
pub const MAXLENGTH: usize = 30;

/// Row stride of the linear grid index. Rows are laid out `HEIGHT` cells apart,
/// which only matches the grid when it is square.
pub const STRIDE: usize = HEIGHT;

const _: () = assert!(WIDTH == HEIGHT, "non-square grids are not supported");

/// Linear index into the grid: `y * STRIDE + x`.
pub type Pos = usize;
