//! A series of games played in one run.
//!
//! Results live only in memory and are discarded when the process exits.

use crate::orchestrator::Orchestrator;
use crate::players::PlayerError;
use derive_getters::Getters;
use std::io::Write;
use tictactoe_core::{Outcome, Player as Mark};
use tracing::{info, instrument};

/// Running score across games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Tally {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Tied games.
    ties: u32,
}

impl Tally {
    /// Records a finished game. In-progress outcomes are ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    /// Games won by `mark`.
    pub fn wins_for(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// One-line summary naming both players.
    pub fn summary(&self, x_name: &str, o_name: &str) -> String {
        format!(
            "Games: {} | {} (X): {} | {} (O): {} | Ties: {}",
            self.games(),
            x_name,
            self.x_wins,
            o_name,
            self.o_wins,
            self.ties
        )
    }
}

/// Plays games until a player declines a rematch, quits, or `max_games` is
/// reached.
///
/// Quitting mid-game ends the series without counting that game.
#[instrument(skip(orchestrator))]
pub fn play_series<W: Write>(
    orchestrator: &mut Orchestrator<W>,
    max_games: Option<u32>,
) -> Result<Tally, PlayerError> {
    let mut tally = Tally::default();

    loop {
        match orchestrator.run() {
            Ok(record) => tally.record(*record.outcome()),
            Err(PlayerError::Quit) => {
                info!(games = tally.games(), "Player quit");
                break;
            }
            Err(e) => return Err(e),
        }

        if max_games.is_some_and(|max| tally.games() >= max) {
            info!(games = tally.games(), "Reached game limit");
            break;
        }
        if !orchestrator.play_again()? {
            break;
        }
        orchestrator.restart();
    }

    Ok(tally)
}
