//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. [`crate::OutcomeResolver`] composes them
//! into a single verdict.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
