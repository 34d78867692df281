//! Win detection logic for tic-tac-toe.

use crate::{Board, Player};

/// The eight winning lines, in the order they are checked:
/// rows top to bottom, columns left to right, then both diagonals.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the occupant of the first complete line in [`LINES`] order,
/// `None` if no line is complete.
pub fn check_winner(board: &Board) -> Option<Player> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let player = cells[a].occupant()?;
        (cells[b] == cells[a] && cells[c] == cells[a]).then_some(player)
    })
}
