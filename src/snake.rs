use crate::grid::{to_pos, x_from, y_from};
use crate::{Pos, HEIGHT, MAXLENGTH, WIDTH};
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Coordinates one step from `pos`, or `None` when that would leave the index space.
    pub fn target(self, pos: Pos) -> Option<(usize, usize)> {
        let (x, y) = (x_from(pos), y_from(pos));

        match self {
            Up => y.checked_sub(1).map(|y| (x, y)),
            Down => Some((x, y + 1)),
            Left => x.checked_sub(1).map(|x| (x, y)),
            Right => Some((x + 1, y)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Continue,
    /// The move pointed back into the segment behind the head and was ignored.
    Rejected,
    GameOver,
}

/// Head-first body with room for `MAXLENGTH` segments; only the first `length` are live.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: [Pos; MAXLENGTH],
    length: usize,
}

impl Snake {
    pub fn new(pos: Pos) -> Self {
        let mut body = [0; MAXLENGTH];
        body[0] = pos;
        Snake { body, length: 1 }
    }

    pub fn center() -> Self {
        Snake::new(to_pos(WIDTH / 2, HEIGHT / 2))
    }

    pub fn body(&self) -> &[Pos] {
        &self.body[..self.length]
    }

    pub fn len(&self) -> usize {
        self.length
    }

    pub fn is_full(&self) -> bool {
        self.length == MAXLENGTH
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn neck(&self) -> Option<Pos> {
        self.body().get(1).copied()
    }

    pub fn tail(&self) -> Pos {
        self.body[self.length - 1]
    }

    /// Pushes every segment one slot back and puts the head at `pos`.
    /// Does nothing when the snake is already full.
    pub fn grow_to(&mut self, pos: Pos) {
        if self.is_full() {
            return;
        }

        for i in (0..self.length).rev() {
            self.body[i + 1] = self.body[i];
        }

        self.body[0] = pos;
        self.length += 1;
    }

    /// Moves the head to `pos`, each segment taking its predecessor's place.
    /// The old tail position drops off.
    pub fn slide_to(&mut self, pos: Pos) {
        let mut next = pos;

        for segment in self.body[..self.length].iter_mut() {
            let prev = *segment;
            *segment = next;
            next = prev;
        }
    }

    #[cfg(test)]
    pub(crate) fn from_body(segments: &[Pos]) -> Self {
        let mut body = [0; MAXLENGTH];
        body[..segments.len()].copy_from_slice(segments);
        Snake { body, length: segments.len() }
    }
}
