//! Exhaustive minimax opponent.
//!
//! The search walks every continuation down to a win or a tie. Scores are
//! absolute, with no depth discount: a win in five plies is worth the same
//! as a win in one.

use tracing::{debug, instrument};

use crate::{Board, Move, Outcome, OutcomeResolver, Player};

/// Value of a position won by the searching player.
pub const WIN_SCORE: i32 = 1;
/// Value of a tied position.
pub const TIE_SCORE: i32 = 0;
/// Value of a position won by the opponent.
pub const LOSE_SCORE: i32 = -1;

/// AI player that picks moves by exhaustive minimax search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimaxPlayer {
    player: Player,
    resolver: OutcomeResolver,
}

impl MinimaxPlayer {
    /// Creates a minimax player for the given side.
    pub fn new(player: Player) -> Self {
        Self::with_resolver(player, OutcomeResolver::new())
    }

    /// Creates a minimax player that consults the given resolver.
    pub fn with_resolver(player: Player, resolver: OutcomeResolver) -> Self {
        Self { player, resolver }
    }

    /// Side this player moves for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Picks the best move for this player.
    ///
    /// Candidates are tried in ascending index order and a later candidate
    /// only replaces the current best when its value is strictly greater, so
    /// among equally good moves the lowest index wins. Returns `None` when
    /// the board has no empty cell.
    #[instrument(level = "debug", skip(self, board), fields(player = %self.player))]
    pub fn next_move(&self, board: &Board) -> Option<Move> {
        let (values, nodes) = self.search(board);

        let mut best: Option<(usize, i32)> = None;
        for (index, value) in values {
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((index, value));
            }
        }

        let (index, value) = best?;
        debug!(index, value, nodes, "Search complete");
        Some(Move::new(self.player, index))
    }

    /// Minimax value of playing each empty cell, in ascending index order.
    #[instrument(level = "debug", skip(self, board), fields(player = %self.player))]
    pub fn move_values(&self, board: &Board) -> Vec<(usize, i32)> {
        let (values, nodes) = self.search(board);
        debug!(candidates = values.len(), nodes, "Scored candidate moves");
        values
    }

    fn search(&self, board: &Board) -> (Vec<(usize, i32)>, u64) {
        let mut nodes = 0;
        let values = board
            .empty_cells()
            .map(|index| {
                let mut child = board.clone();
                child.apply(Move::new(self.player, index));
                (index, self.minimax(&child, false, &mut nodes))
            })
            .collect();
        (values, nodes)
    }

    /// Value of `board` from this player's point of view.
    ///
    /// `maximizing` is true when this player is the one to move.
    fn minimax(&self, board: &Board, maximizing: bool, nodes: &mut u64) -> i32 {
        *nodes += 1;

        match self.resolver.resolve(board) {
            Outcome::Winner(winner) if winner == self.player => return WIN_SCORE,
            Outcome::Winner(_) => return LOSE_SCORE,
            Outcome::Tie => return TIE_SCORE,
            Outcome::InProgress => {}
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };

        let mut best = if maximizing { LOSE_SCORE } else { WIN_SCORE };
        for index in board.empty_cells() {
            let mut child = board.clone();
            child.apply(Move::new(mover, index));
            let value = self.minimax(&child, !maximizing, nodes);
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }
        best
    }
}
