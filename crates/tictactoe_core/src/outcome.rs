//! Game outcome and the resolver that computes it.

use serde::{Deserialize, Serialize};

use crate::rules::{check_winner, is_full};
use crate::{Board, Player};

/// Outcome of a board position.
///
/// Computed fresh from a board whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// At least one cell is empty and nobody has three in a row.
    InProgress,
    /// The board is full and nobody has three in a row.
    Tie,
    /// Player completed a line.
    Winner(Player),
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once the game can take no further moves.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Tie => write!(f, "Tie"),
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
        }
    }
}

/// Resolves a board into an [`Outcome`].
///
/// Runs once per search node, so it stays allocation-free and does not log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeResolver;

impl OutcomeResolver {
    /// Creates a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Winner of the first complete line, else in-progress while any cell is
    /// empty, else tie.
    pub fn resolve(&self, board: &Board) -> Outcome {
        if let Some(player) = check_winner(board) {
            Outcome::Winner(player)
        } else if is_full(board) {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }
}
