use anyhow::{Context, Result};
use minesweep_core::*;
use std::io::{BufRead, Write};

use crate::command::{Command, parse_menu_choice};
use crate::render::BoardView;

/// How a game session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
    EndOfInput,
}

/// Line-oriented request/response loop over a pair of streams.
pub struct Session<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads the next line, `false` at end of input.
    fn next_line(&mut self) -> Result<bool> {
        self.output.flush().context("Could not flush output")?;
        self.line.clear();
        let read = self
            .input
            .read_line(&mut self.line)
            .context("Could not read input")?;
        Ok(read > 0)
    }

    /// Shows the numbered preset menu until a valid entry is read. `None` at end of input.
    pub fn choose_difficulty(&mut self) -> Result<Option<Difficulty>> {
        writeln!(self.output, "Choose a difficulty:")?;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, difficulty)?;
        }

        loop {
            write!(self.output, "> ")?;
            if !self.next_line()? {
                return Ok(None);
            }
            match parse_menu_choice(&self.line) {
                Ok(difficulty) => return Ok(Some(difficulty)),
                Err(err) => {
                    log::debug!("Rejected menu input {:?}: {}", self.line.trim_end(), err);
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Runs the game loop until the engine reaches a terminal state or the player stops.
    pub fn play(&mut self, engine: &mut PlayEngine) -> Result<SessionEnd> {
        writeln!(
            self.output,
            "Commands: `r X Y` (or just `X Y`) reveals, `f X Y` toggles a flag, `q` quits."
        )?;

        while !engine.is_finished() {
            write!(self.output, "{}", BoardView::new(engine, false))?;
            write!(self.output, "Enter a command: ")?;
            if !self.next_line()? {
                return Ok(SessionEnd::EndOfInput);
            }

            let command = match self.line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    log::debug!("Rejected command {:?}: {}", self.line.trim_end(), err);
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            let updated = match command {
                Command::Reveal { x, y } => {
                    let outcome = match coords_from_signed(x, y) {
                        Some(coords) => engine.reveal(coords),
                        None => RevealOutcome::NoChange,
                    };
                    log::debug!("reveal ({}, {}): {:?}", x, y, outcome);
                    outcome.has_update()
                }
                Command::Flag { x, y } => {
                    let outcome = match coords_from_signed(x, y) {
                        Some(coords) => engine.toggle_flag(coords),
                        None => MarkOutcome::NoChange,
                    };
                    log::debug!("flag ({}, {}): {:?}", x, y, outcome);
                    outcome.has_update()
                }
                Command::Quit => return Ok(SessionEnd::Quit),
            };
            if !updated {
                writeln!(self.output, "Nothing to change there.")?;
            }
        }

        write!(self.output, "{}", BoardView::new(engine, true))?;
        if engine.is_win() {
            writeln!(self.output, "Congratulations! You won!")?;
            Ok(SessionEnd::Won)
        } else {
            writeln!(self.output, "You hit a mine. Game over.")?;
            Ok(SessionEnd::Lost)
        }
    }
}
