use std::fmt;

use crate::{Pos, HEIGHT, STRIDE, WIDTH};
use Cell::*;

pub const fn to_pos(x: usize, y: usize) -> Pos {
    y * STRIDE + x
}

pub const fn x_from(pos: Pos) -> usize {
    pos % STRIDE
}

pub const fn y_from(pos: Pos) -> usize {
    pos / STRIDE
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Empty,
    Head,
    /// Snake body. A vacated head cell turns into this on the step it is left behind.
    Body,
    Price,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Wall => '#',
            Empty => ' ',
            Head => '@',
            Body => 'x',
            Price => '$',
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [Cell; WIDTH * HEIGHT],
}

impl Grid {
    /// Border walls around an empty interior, with `snake` marked as head cells.
    pub fn new(snake: &[Pos]) -> Self {
        let mut cells = [Empty; WIDTH * HEIGHT];

        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                if x == 0 || x == WIDTH - 1 || y == 0 || y == HEIGHT - 1 {
                    cells[to_pos(x, y)] = Wall;
                }
            }
        }

        for pos in snake {
            cells[*pos] = Head;
        }

        Grid { cells }
    }

    /// Cells outside the array read as walls.
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells.get(pos).copied().unwrap_or(Wall)
    }

    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos] = cell;
    }

    /// Interior positions in row-major order.
    pub fn interior() -> impl Iterator<Item = Pos> {
        (1..HEIGHT - 1).flat_map(|y| (1..WIDTH - 1).map(move |x| to_pos(x, y)))
    }

    pub fn free_spots(&self) -> usize {
        Self::interior().filter(|pos| self.get(*pos) == Empty).count()
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn render(&self) -> Vec<String> {
        (0..HEIGHT)
            .map(|y| (0..WIDTH).map(|x| self.get(to_pos(x, y)).to_char()).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid\n{}", self)
    }
}
