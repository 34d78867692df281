//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

use crate::action::Move;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupant, if any.
    pub fn occupant(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells are stored row-major, so the cell at `(col, row)` lives at
/// `col + 3 * row`. Cloning produces an independent board, which is how
/// search explores hypothetical continuations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board holding the given cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Places `mv.player` at `mv.index`.
    ///
    /// No legality check: an occupied cell is overwritten. Callers that take
    /// moves from untrusted input validate them first.
    pub fn apply(&mut self, mv: Move) {
        self.cells[mv.index] = Cell::Occupied(mv.player);
    }

    /// Returns a snapshot of all cells.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
    }

    /// Returns true when every cell is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
