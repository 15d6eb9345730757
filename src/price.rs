use tracing::debug;

use crate::grid::{Cell, Grid};
use crate::Pos;

/// Deterministic stand-in for a random number. Integer division throughout;
/// the evaluation order matters for reproducibility.
pub fn placement_seed(score: u32, freespots: u32, turn: u32) -> u32 {
    (score + freespots) / 2 + (freespots / 5) * (turn + 3)
}

/// Places one price at a time, at most every `spawnmod` turns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceSpawner {
    present: bool,
    spawnmod: u32,
}

impl Default for PriceSpawner {
    fn default() -> Self {
        PriceSpawner { present: false, spawnmod: 1 }
    }
}

impl PriceSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn present(&self) -> bool {
        self.present
    }

    pub fn spawnmod(&self) -> u32 {
        self.spawnmod
    }

    pub fn consume(&mut self) {
        self.present = false;
    }

    /// Places a price on `grid` if this turn is eligible, returning where it went.
    pub fn handle(&mut self, grid: &mut Grid, turn: u32, score: u32) -> Option<Pos> {
        if turn % self.spawnmod != 0 || self.present {
            return None;
        }

        let freespots = grid.free_spots() as u32;
        if freespots == 0 {
            return None;
        }

        let seed = placement_seed(score, freespots, turn);
        let mut random = i64::from(seed % freespots);
        let mut chosen = None;

        // The zero check runs on every interior cell, so non-empty cells right
        // after the crossing keep overwriting the choice.
        for pos in Grid::interior() {
            if grid.get(pos) == Cell::Empty {
                random -= 1;
            }

            if random == 0 {
                chosen = Some(pos);
            }
        }

        let pos = chosen?;
        grid.set(pos, Cell::Price);

        self.present = true;
        self.spawnmod = match seed % 8 {
            0 => 1,
            n => n,
        };

        debug!(turn, score, freespots, pos, spawnmod = self.spawnmod, "Spawned price");
        Some(pos)
    }

    #[cfg(test)]
    pub(crate) fn place_for_test(&mut self) {
        self.present = true;
    }
}
