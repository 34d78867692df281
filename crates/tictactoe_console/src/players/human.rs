//! Human player that types coordinates.

use super::{Player, PlayerError};
use crate::input::{Coordinate, parse_move};
use std::io::{BufRead, Write};
use tictactoe_core::{Board, MinimaxPlayer, Player as Mark};
use tracing::{debug, instrument};

/// Human player reading moves line by line.
///
/// Invalid input is reported and the prompt repeats; it never ends the game.
/// `?` asks the minimax search for a suggestion and `q` quits.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Reads one trimmed line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, PlayerError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn hint(&mut self, board: &Board, mark: Mark) -> Result<(), PlayerError> {
        let suggestion = MinimaxPlayer::new(mark)
            .next_move(board)
            .and_then(|mv| Coordinate::from_index(mv.index));
        match suggestion {
            Some(coordinate) => writeln!(self.output, "Hint: try {}", coordinate)?,
            None => writeln!(self.output, "No moves left")?,
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, board), fields(human = %self.name))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, PlayerError> {
        loop {
            write!(self.output, "{} ({}), your move: ", self.name, mark)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed");
                return Err(PlayerError::Quit);
            };

            match line.to_ascii_lowercase().as_str() {
                "q" | "quit" => return Err(PlayerError::Quit),
                "?" | "hint" => {
                    self.hint(board, mark)?;
                    continue;
                }
                _ => {}
            }

            match parse_move(&line, board) {
                Ok(coordinate) => return Ok(coordinate.index()),
                Err(e) => {
                    debug!(input = %line, error = %e, "Rejected move");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn play_again(&mut self) -> Result<bool, PlayerError> {
        write!(self.output, "Play again? [y/N] ")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default().to_ascii_lowercase();
        Ok(matches!(answer.as_str(), "y" | "yes"))
    }
}
