use std::io::{BufRead, Write};

use tracing::info;

use crate::input::Command;
use crate::snake::MoveResult;
use crate::state::GameState;
use crate::term::TermManager;
use crate::Result;

const INTRO: &[&str] = &[
    "*****************************************",
    "*              PRICE SNAKE              *",
    "*****************************************",
    "",
    "Stay alive as long as possible by not running into a wall",
    "or into yourself, and eat as many prices as you can.",
    "",
    "Type a key and press enter:",
    "  'w' or 'z' = Up",
    "  's'        = Down",
    "  'a' or 'q' = Left",
    "  'd'        = Right",
    "  'x'        = Quit",
    "",
    "Legend:",
    "  '#' = Wall",
    "  '@' = Snake's head",
    "  'x' = Snake's body",
    "  '$' = Price",
    "",
];

pub struct SnakeGame<R, W> {
    term: TermManager<R, W>,
    state: GameState,
}

impl<R: BufRead, W: Write> SnakeGame<R, W> {
    pub fn new(term: TermManager<R, W>) -> Self {
        SnakeGame { term, state: GameState::new() }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_term(self) -> TermManager<R, W> {
        self.term
    }

    /// Shows the banner and waits for 's' to start. Returns false if the player quit instead.
    pub fn show_intro(&mut self) -> Result<bool> {
        self.term.show_message(INTRO)?;

        loop {
            self.term.prompt("Press 's' to start the game or 'x' to quit: ")?;

            let line = match self.term.read_line()? {
                Some(line) => line,
                None => return Ok(false),
            };

            for c in line.chars() {
                match c {
                    's' => return Ok(true),
                    'x' => return Ok(false),
                    _ => {}
                }
            }
        }
    }

    pub fn play(&mut self) -> Result<()> {
        info!("Game started");

        self.next_frame()?;

        loop {
            self.term.prompt("Input: ")?;

            let line = match self.term.read_line()? {
                Some(line) => line,
                None => break,
            };

            if !self.run_line(&line)? {
                break;
            }
        }

        info!(score = self.state.score(), turn = self.state.turn(), "Game over");
        self.term.show_game_over(&self.state)
    }

    ///////////////////////////////////////////////////////////////////////////

    /// Applies every command on `line` in order. Returns false once the game should stop.
    fn run_line(&mut self, line: &str) -> Result<bool> {
        for command in Command::parse_line(line) {
            let dir = match command {
                Command::Quit => return Ok(false),
                Command::Move(dir) => dir,
            };

            if self.state.step(dir) == MoveResult::GameOver {
                return Ok(false);
            }

            self.next_frame()?;
        }

        Ok(true)
    }

    fn next_frame(&mut self) -> Result<()> {
        self.state.spawn_price();
        self.term.draw_frame(&self.state)
    }
}
