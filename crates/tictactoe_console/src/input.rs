//! Text coordinates for board cells.
//!
//! A coordinate is a column letter `a`-`c` followed by a row digit `1`-`3`,
//! so `a1` is the top-left cell and `c3` the bottom-right one.

use std::str::FromStr;

use derive_getters::Getters;
use strum::IntoEnumIterator;
use tictactoe_core::Board;
use tracing::instrument;

/// Board column, labelled left to right.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Column {
    /// Left column.
    A,
    /// Middle column.
    B,
    /// Right column.
    C,
}

/// Board row, labelled top to bottom.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Row {
    /// Top row.
    #[strum(serialize = "1")]
    One,
    /// Middle row.
    #[strum(serialize = "2")]
    Two,
    /// Bottom row.
    #[strum(serialize = "3")]
    Three,
}

/// A cell named by column and row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct Coordinate {
    column: Column,
    row: Row,
}

impl Coordinate {
    /// Creates a coordinate.
    pub fn new(column: Column, row: Row) -> Self {
        Self { column, row }
    }

    /// Row-major board index (0-8).
    pub fn index(&self) -> usize {
        self.column as usize + 3 * self.row as usize
    }

    /// Creates a coordinate from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        let column = Column::iter().nth(index % 3)?;
        let row = Row::iter().nth(index / 3)?;
        Some(Self { column, row })
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Coordinate {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (col_char, row_char) = match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) => return Err(InputError::Empty),
            (Some(col), Some(row), None) => (col, row),
            _ => return Err(InputError::WrongLength(trimmed.to_string())),
        };

        let column = Column::from_str(&col_char.to_string())
            .map_err(|_| InputError::BadColumn(col_char))?;
        let row = Row::from_str(&row_char.to_string())
            .map_err(|_| InputError::BadRow(row_char))?;

        Ok(Self { column, row })
    }
}

/// Parses `text` as a coordinate and checks that the cell is free.
#[instrument(skip(board))]
pub fn parse_move(text: &str, board: &Board) -> Result<Coordinate, InputError> {
    let coordinate: Coordinate = text.parse()?;
    if !board.is_empty(coordinate.index()) {
        return Err(InputError::Occupied(coordinate));
    }
    Ok(coordinate)
}

/// Rejected move text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InputError {
    /// Nothing was entered.
    #[display("Enter a move such as b2")]
    Empty,

    /// Input is not exactly two characters.
    #[display("{:?} is not a coordinate; use a column a-c and a row 1-3, like b2", _0)]
    WrongLength(#[error(not(source))] String),

    /// First character is not a column letter.
    #[display("Column must be a, b or c (got {:?})", _0)]
    BadColumn(#[error(not(source))] char),

    /// Second character is not a row digit.
    #[display("Row must be 1, 2 or 3 (got {:?})", _0)]
    BadRow(#[error(not(source))] char),

    /// The cell already holds a mark.
    #[display("{} is already taken", _0)]
    Occupied(#[error(not(source))] Coordinate),
}
