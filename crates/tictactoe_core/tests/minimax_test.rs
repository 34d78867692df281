//! Tests for the minimax opponent.

use tictactoe_core::{
    Board, CELL_COUNT, Cell, LOSE_SCORE, MinimaxPlayer, Move, Outcome, OutcomeResolver, Player,
    WIN_SCORE,
};

/// Builds a board from a 9-character row-major string of `X`, `O` and `.`.
fn board_from(marks: &str) -> Board {
    let mut cells = [Cell::Empty; CELL_COUNT];
    for (cell, mark) in cells.iter_mut().zip(marks.chars()) {
        *cell = match mark {
            'X' => Cell::Occupied(Player::X),
            'O' => Cell::Occupied(Player::O),
            _ => Cell::Empty,
        };
    }
    Board::from_cells(cells)
}

/// Plays every possible opponent reply against `ai` and asserts it never loses.
///
/// Returns the number of finished games visited.
fn assert_never_loses(board: &Board, ai: &MinimaxPlayer, to_move: Player) -> usize {
    match OutcomeResolver::new().resolve(board) {
        Outcome::Winner(winner) => {
            assert_eq!(winner, ai.player(), "AI lost on {:?}", board.cells());
            return 1;
        }
        Outcome::Tie => return 1,
        Outcome::InProgress => {}
    }

    if to_move == ai.player() {
        let mv = ai.next_move(board).expect("in-progress board has a move");
        assert_eq!(mv.player, ai.player());
        assert!(board.is_empty(mv.index), "AI chose occupied cell {}", mv.index);
        let mut next = board.clone();
        next.apply(mv);
        assert_never_loses(&next, ai, to_move.opponent())
    } else {
        board
            .empty_cells()
            .map(|index| {
                let mut next = board.clone();
                next.apply(Move::new(to_move, index));
                assert_never_loses(&next, ai, to_move.opponent())
            })
            .sum()
    }
}

#[test]
fn test_takes_immediate_win() {
    // X X _ / O O _ / _ _ _
    let board = board_from("XX.OO....");
    let mv = MinimaxPlayer::new(Player::X).next_move(&board);
    assert_eq!(mv, Some(Move::new(Player::X, 2)));
}

#[test]
fn test_takes_only_winning_cell_even_when_last() {
    // _ _ X / X O X / O O _  -- X wins only by completing the right column
    let board = board_from("..XXOXOO.");
    let ai = MinimaxPlayer::new(Player::X);
    assert_eq!(ai.next_move(&board), Some(Move::new(Player::X, 8)));
    assert_eq!(ai.move_values(&board), vec![(0, LOSE_SCORE), (1, LOSE_SCORE), (8, WIN_SCORE)]);
}

#[test]
fn test_blocks_threat_on_first_empty_cell() {
    // X X _ / _ O _ / _ _ _  -- O must block at 2
    let board = board_from("XX..O....");
    let mv = MinimaxPlayer::new(Player::O).next_move(&board);
    assert_eq!(mv, Some(Move::new(Player::O, 2)));
}

#[test]
fn test_blocks_threat_on_last_empty_cell() {
    // O X _ / X O _ / _ _ _  -- X must block the diagonal at 8
    let board = board_from("OX.XO....");
    let ai = MinimaxPlayer::new(Player::X);
    let mv = ai.next_move(&board).expect("board has empty cells");
    assert_eq!(mv.index, 8);

    let values = ai.move_values(&board);
    assert!(
        values
            .iter()
            .filter(|(index, _)| *index != 8)
            .all(|(_, value)| *value == LOSE_SCORE)
    );
}

#[test]
fn test_lost_position_still_returns_first_empty_cell() {
    // O _ X / _ X _ / O _ O  -- O holds two threats, every reply loses
    let board = board_from("O.X.X.O.O");
    let ai = MinimaxPlayer::new(Player::X);
    assert_eq!(
        ai.move_values(&board),
        vec![(1, LOSE_SCORE), (3, LOSE_SCORE), (5, LOSE_SCORE), (7, LOSE_SCORE)]
    );
    assert_eq!(ai.next_move(&board), Some(Move::new(Player::X, 1)));
}

#[test]
fn test_opening_move_from_empty_board() {
    let resolver = OutcomeResolver::new();
    let mut board = Board::new();
    assert_eq!(resolver.resolve(&board), Outcome::InProgress);

    let mv = MinimaxPlayer::new(Player::X)
        .next_move(&board)
        .expect("empty board has moves");
    // Every opening draws under perfect play, so the first cell is kept.
    assert_eq!(mv, Move::new(Player::X, 0));

    board.apply(mv);
    let occupied: Vec<Cell> = board
        .cells()
        .into_iter()
        .filter(|cell| *cell != Cell::Empty)
        .collect();
    assert_eq!(occupied, vec![Cell::Occupied(Player::X)]);
    assert_eq!(resolver.resolve(&board), Outcome::InProgress);
}

#[test]
fn test_next_move_leaves_board_untouched() {
    let board = board_from("X...O....");
    let before = board.cells();
    let _ = MinimaxPlayer::new(Player::X).next_move(&board);
    assert_eq!(board.cells(), before);
}

#[test]
fn test_never_loses_moving_first() {
    let ai = MinimaxPlayer::new(Player::X);
    let games = assert_never_loses(&Board::new(), &ai, Player::X);
    assert!(games > 0);
}

#[test]
fn test_never_loses_moving_second() {
    let ai = MinimaxPlayer::new(Player::O);
    let games = assert_never_loses(&Board::new(), &ai, Player::X);
    assert!(games > 0);
}

#[test]
fn test_self_play_is_a_tie() {
    let resolver = OutcomeResolver::new();
    let x = MinimaxPlayer::new(Player::X);
    let o = MinimaxPlayer::new(Player::O);
    let mut board = Board::new();
    let mut to_move = Player::X;

    while resolver.resolve(&board) == Outcome::InProgress {
        let ai = if to_move == Player::X { &x } else { &o };
        let mv = ai.next_move(&board).expect("in-progress board has a move");
        assert!(board.is_empty(mv.index));
        board.apply(mv);
        to_move = to_move.opponent();
    }

    assert_eq!(resolver.resolve(&board), Outcome::Tie);
}
