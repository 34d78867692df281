//! Move type for tic-tac-toe.
//!
//! A move carries the player's intent only. Whether the target cell is free
//! is decided by whoever produced the move.

use super::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8, row-major).
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the board index of this move.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}
