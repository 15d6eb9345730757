use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crossterm::{cursor, queue, style, terminal};
use crossterm::terminal::ClearType;

use crate::state::GameState;
use crate::Result;

const SEPARATOR: &str = "_________________________";

/// Line-buffered terminal I/O. In plain mode frames are appended instead of
/// redrawn in place.
pub struct TermManager<R, W> {
    input: R,
    output: W,
    plain: bool,
}

impl TermManager<StdinLock<'static>, Stdout> {
    pub fn stdio(plain: bool) -> Self {
        TermManager::new(io::stdin().lock(), io::stdout(), plain)
    }
}

impl<R: BufRead, W: Write> TermManager<R, W> {
    pub fn new(input: R, output: W, plain: bool) -> Self {
        TermManager { input, output, plain }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next line of input without its line ending, or `None` once input is exhausted.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    pub fn prompt(&mut self, text: &str) -> Result<()> {
        queue!(self.output, style::Print(text))?;
        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        for line in lines {
            queue!(self.output, style::Print(line), style::Print("\n"))?;
        }

        self.flush()
    }

    pub fn draw_frame(&mut self, state: &GameState) -> Result<()> {
        self.clear()?;

        for row in state.grid().render() {
            queue!(self.output, style::Print(row), style::Print("\n"))?;
        }

        queue!(
            self.output,
            style::Print(format!("Score: {}\nTurn: {}\n{}\n", state.score(), state.turn(), SEPARATOR))
        )?;
        self.flush()
    }

    pub fn show_game_over(&mut self, state: &GameState) -> Result<()> {
        let score = format!("Score: {}", state.score());
        let turns = format!("Turns: {}", state.turn());

        self.show_message(&["Game over!", &score, &turns, SEPARATOR])
    }

    pub fn clear(&mut self) -> Result<()> {
        if !self.plain {
            queue!(self.output, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.output.flush()?;
        Ok(())
    }
}
