//! Tic-tac-toe game logic with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells in row-major order; `Clone` gives an independent copy
//! - **OutcomeResolver**: board to in-progress / tie / winner
//! - **MinimaxPlayer**: exhaustive search over every continuation
//!
//! Nothing in this crate reads input or renders output.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Board, MinimaxPlayer, Outcome, OutcomeResolver, Player};
//!
//! let mut board = Board::new();
//! let ai = MinimaxPlayer::new(Player::X);
//!
//! if let Some(mv) = ai.next_move(&board) {
//!     board.apply(mv);
//! }
//! assert_eq!(OutcomeResolver::new().resolve(&board), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod minimax;
mod outcome;
pub mod rules;
mod types;

pub use action::Move;
pub use minimax::{LOSE_SCORE, MinimaxPlayer, TIE_SCORE, WIN_SCORE};
pub use outcome::{Outcome, OutcomeResolver};
pub use types::{Board, CELL_COUNT, Cell, Player};
