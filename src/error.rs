use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("terminal error: {0}")]
    Terminal(#[from] crossterm::ErrorKind),
}

pub type Result<T> = std::result::Result<T, Error>;
