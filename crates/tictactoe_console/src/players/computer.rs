//! Computer player backed by minimax search.

use super::{Player, PlayerError};
use tictactoe_core::{Board, MinimaxPlayer, Player as Mark};
use tracing::{debug, instrument};

/// AI that plays perfectly.
pub struct ComputerPlayer {
    name: String,
}

impl ComputerPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip(self, board), fields(ai = %self.name))]
    fn choose_move(&mut self, board: &Board, mark: Mark) -> Result<usize, PlayerError> {
        let mv = MinimaxPlayer::new(mark)
            .next_move(board)
            .ok_or(PlayerError::NoMove)?;
        debug!(index = mv.index, "AI chose position");
        Ok(mv.index)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Move;

    #[test]
    fn test_completes_winning_line() {
        let mut board = Board::new();
        for (index, mark) in [(0, Mark::O), (1, Mark::O), (3, Mark::X), (4, Mark::X)] {
            board.apply(Move::new(mark, index));
        }
        let mut ai = ComputerPlayer::new("Computer");
        assert!(matches!(ai.choose_move(&board, Mark::O), Ok(2)));
        assert_eq!(ai.name(), "Computer");
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new();
        for index in 0..9 {
            board.apply(Move::new(Mark::X, index));
        }
        let mut ai = ComputerPlayer::new("Computer");
        assert!(matches!(ai.choose_move(&board, Mark::O), Err(PlayerError::NoMove)));
    }

    #[test]
    fn test_always_wants_rematch() {
        assert!(matches!(ComputerPlayer::new("Computer").play_again(), Ok(true)));
    }
}
