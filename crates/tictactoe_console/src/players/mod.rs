//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use tictactoe_core::{Board, Player as Mark};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns the index (0-8) of an empty cell for `mark` to occupy.
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, PlayerError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Asks whether this player wants another game.
    fn play_again(&mut self) -> Result<bool, PlayerError> {
        Ok(true)
    }
}

/// Why a player could not produce a move.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum PlayerError {
    /// The player asked to leave.
    #[display("Player quit")]
    Quit,

    /// Reading input or writing a prompt failed.
    #[display("I/O error: {}", _0)]
    Io(#[error(source)] std::io::Error),

    /// The chosen cell is occupied or off the board.
    #[display("Cell {} is not available", _0)]
    IllegalMove(#[error(not(source))] usize),

    /// No empty cell was left to play.
    #[display("No move available")]
    NoMove,
}

impl From<std::io::Error> for PlayerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
