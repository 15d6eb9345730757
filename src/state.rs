use tracing::debug;

use crate::grid::{to_pos, Cell, Grid};
use crate::price::PriceSpawner;
use crate::snake::{Direction, MoveResult, Snake};
use crate::{Pos, HEIGHT, WIDTH};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
}

/// Everything one run of the game owns. Only `move_to` and `spawn_price` mutate it.
#[derive(Clone, Debug)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    score: u32,
    turn: u32,
    spawner: PriceSpawner,
    status: Status,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        let snake = Snake::center();
        let grid = Grid::new(snake.body());

        GameState {
            grid,
            snake,
            score: 0,
            turn: 0,
            spawner: PriceSpawner::new(),
            status: Status::Running,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn spawner(&self) -> &PriceSpawner {
        &self.spawner
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status == Status::GameOver
    }

    /// Moves the head one step in `direction`.
    pub fn step(&mut self, direction: Direction) -> MoveResult {
        if self.is_over() {
            return MoveResult::GameOver;
        }

        match direction.target(self.snake.head()) {
            Some((x, y)) => self.move_to(x, y),
            None => {
                self.turn += 1;
                self.collide()
            }
        }
    }

    /// Resolves a move of the head to `(x, y)`.
    pub fn move_to(&mut self, x: usize, y: usize) -> MoveResult {
        if self.is_over() {
            return MoveResult::GameOver;
        }

        let target = to_pos(x, y);

        if self.snake.neck() == Some(target) {
            debug!(turn = self.turn, pos = target, "Ignoring move into the neck");
            return MoveResult::Rejected;
        }

        self.turn += 1;

        let cell = if x < WIDTH && y < HEIGHT { self.grid.get(target) } else { Cell::Wall };
        if matches!(cell, Cell::Wall | Cell::Body) {
            return self.collide();
        }

        let scored = cell == Cell::Price;
        if scored {
            self.spawner.consume();
            self.score += self.snake.len() as u32;
        }

        let old_head = self.snake.head();

        if scored && !self.snake.is_full() {
            self.grid.set(target, Cell::Head);
            self.grid.set(old_head, Cell::Body);
            self.snake.grow_to(target);
        } else {
            self.grid.set(target, Cell::Head);
            self.grid.set(self.snake.tail(), Cell::Empty);
            if self.snake.len() > 1 {
                self.grid.set(old_head, Cell::Body);
            }
            self.snake.slide_to(target);
        }

        debug!(
            turn = self.turn,
            score = self.score,
            head = target,
            length = self.snake.len(),
            scored,
            "Moved"
        );
        MoveResult::Continue
    }

    /// Gives the spawner its chance for this turn.
    pub fn spawn_price(&mut self) -> Option<Pos> {
        self.spawner.handle(&mut self.grid, self.turn, self.score)
    }

    fn collide(&mut self) -> MoveResult {
        debug!(turn = self.turn, score = self.score, "Collision");
        self.status = Status::GameOver;
        MoveResult::GameOver
    }

    #[cfg(test)]
    pub(crate) fn with_snake(body: &[Pos], price: Option<Pos>) -> Self {
        let snake = Snake::from_body(body);
        let mut grid = Grid::new(&body[..1]);
        for pos in &body[1..] {
            grid.set(*pos, Cell::Body);
        }
        let mut spawner = PriceSpawner::new();
        if let Some(pos) = price {
            grid.set(pos, Cell::Price);
            spawner.place_for_test();
        }

        GameState { grid, snake, score: 0, turn: 0, spawner, status: Status::Running }
    }
}
