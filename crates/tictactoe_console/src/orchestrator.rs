//! Game orchestration between players.

use crate::input::Coordinate;
use crate::players::{Player, PlayerError};
use crate::render::render_board;
use derive_getters::Getters;
use derive_new::new;
use std::io::Write;
use tictactoe_core::{Board, Move, Outcome, OutcomeResolver, Player as Mark};
use tracing::{debug, info, instrument, warn};

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct GameRecord {
    /// How the game ended.
    outcome: Outcome,
    /// Every move in the order it was played.
    history: Vec<Move>,
}

/// Orchestrates gameplay between two players.
///
/// X always moves first. The board is rendered to `out` after every move.
pub struct Orchestrator<W> {
    board: Board,
    history: Vec<Move>,
    resolver: OutcomeResolver,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>, out: W) -> Self {
        Self {
            board: Board::new(),
            history: Vec::new(),
            resolver: OutcomeResolver::new(),
            player_x,
            player_o,
            out,
        }
    }

    /// Seats `computer` on `computer_mark` and `human` on the other mark.
    pub fn seated(
        human: Box<dyn Player>,
        computer: Box<dyn Player>,
        computer_mark: Mark,
        out: W,
    ) -> Self {
        match computer_mark {
            Mark::X => Self::new(computer, human, out),
            Mark::O => Self::new(human, computer, out),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Name of the player holding `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => self.player_x.name(),
            Mark::O => self.player_o.name(),
        }
    }

    /// Mark whose turn it is.
    fn to_move(&self) -> Mark {
        self.history
            .last()
            .map_or(Mark::X, |last| last.player.opponent())
    }

    /// Runs the game loop until someone wins or the board fills up.
    #[instrument(skip(self), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self) -> Result<GameRecord, PlayerError> {
        info!("Starting game");
        writeln!(self.out, "{}\n", render_board(&self.board))?;

        loop {
            let outcome = self.resolver.resolve(&self.board);
            if outcome.is_terminal() {
                self.announce(outcome)?;
                info!(%outcome, moves = self.history.len(), "Game over");
                return Ok(GameRecord::new(outcome, self.history.clone()));
            }

            let mark = self.to_move();
            debug!(%mark, player = %self.name_of(mark), "Waiting for move");
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let index = player.choose_move(&self.board, mark)?;

            // Board::apply overwrites, so a bad index must stop here.
            if !self.board.is_empty(index) {
                warn!(%mark, index, "Player chose an unavailable cell");
                return Err(PlayerError::IllegalMove(index));
            }

            let mv = Move::new(mark, index);
            self.board.apply(mv);
            self.history.push(mv);

            let label = Coordinate::from_index(index)
                .map(|coordinate| coordinate.to_string())
                .unwrap_or_else(|| index.to_string());
            let name = self.name_of(mark).to_string();
            info!(%mark, player = %name, coordinate = %label, "Move played");
            writeln!(self.out, "{} ({}) plays {}\n", name, mark, label)?;
            writeln!(self.out, "{}\n", render_board(&self.board))?;
        }
    }

    fn announce(&mut self, outcome: Outcome) -> Result<(), PlayerError> {
        match outcome {
            Outcome::Winner(mark) => {
                let message = format!("{} ({}) wins!", self.name_of(mark), mark);
                writeln!(self.out, "{}", message)?;
            }
            Outcome::Tie => writeln!(self.out, "It's a tie.")?,
            Outcome::InProgress => {}
        }
        Ok(())
    }

    /// Asks both players whether they want another game.
    pub fn play_again(&mut self) -> Result<bool, PlayerError> {
        Ok(self.player_x.play_again()? && self.player_o.play_again()?)
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
    }

    /// Writes a line to the game output.
    pub fn say(&mut self, message: &str) -> Result<(), PlayerError> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    /// Consumes the orchestrator, returning its output.
    pub fn into_output(self) -> W {
        self.out
    }
}
