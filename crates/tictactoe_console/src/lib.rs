//! Console front end for tic-tac-toe against a minimax opponent.
//!
//! # Architecture
//!
//! - **Input**: `b2`-style coordinates parsed into board indices
//! - **Render**: labelled text grid
//! - **Players**: human (line input) and computer (minimax) behind one trait
//! - **Orchestrator**: turn loop that resolves the outcome after every move
//! - **Session**: rematches and an in-memory tally
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{ComputerPlayer, Orchestrator};
//! use tictactoe_core::Outcome;
//!
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(ComputerPlayer::new("Deep X")),
//!     Box::new(ComputerPlayer::new("Deep O")),
//!     Vec::new(),
//! );
//! let record = orchestrator.run().expect("computer players never fail");
//! assert_eq!(*record.outcome(), Outcome::Tie);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod input;
mod orchestrator;
mod players;
mod render;
mod session;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig};
pub use input::{Column, Coordinate, InputError, Row, parse_move};
pub use orchestrator::{GameRecord, Orchestrator};
pub use players::{ComputerPlayer, HumanPlayer, Player, PlayerError};
pub use render::render_board;
pub use session::{Tally, play_series};
