//! Plain-text board rendering.

use strum::IntoEnumIterator;
use tictactoe_core::{Board, Cell, Player};

use crate::input::{Column, Row};

const ROW_SEPARATOR: &str = "   ---+---+---";

/// Renders the board as a labelled 3x3 grid.
///
/// ```text
///     a   b   c
/// 1   X |   | O
///    ---+---+---
/// 2     | X |
///    ---+---+---
/// 3     |   | O
/// ```
pub fn render_board(board: &Board) -> String {
    let cells = board.cells();
    let mut lines = vec![header()];

    for (row_index, row) in Row::iter().enumerate() {
        if row_index > 0 {
            lines.push(ROW_SEPARATOR.to_string());
        }
        let row_cells = &cells[row_index * 3..row_index * 3 + 3];
        lines.push(draw_row(row, row_cells));
    }

    lines.join("\n")
}

fn header() -> String {
    let labels: Vec<String> = Column::iter().map(|column| column.to_string()).collect();
    format!("    {}", labels.join("   "))
}

fn draw_row(row: Row, cells: &[Cell]) -> String {
    let symbols: Vec<String> = cells.iter().map(|cell| format!(" {} ", symbol(*cell))).collect();
    format!("{}  {}", row, symbols.join("|")).trim_end().to_string()
}

fn symbol(cell: Cell) -> char {
    match cell.occupant() {
        None => ' ',
        Some(Player::X) => 'X',
        Some(Player::O) => 'O',
    }
}
