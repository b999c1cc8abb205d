//! Tests for game history and time travel.

use tictactoe_history::{
    Board, GameError, GameHistory, GameStatus, IllegalMove, OutOfRange, Player, Position, Square,
};

#[test]
fn test_first_move_marks_x() {
    let mut game = GameHistory::new();
    game.apply_move(0).expect("Valid move");

    assert_eq!(game.current_board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(game.status(), "Next player: O");
}

#[test]
fn test_top_row_win() {
    let game = GameHistory::replay(&[0, 3, 1, 4, 2]).expect("Valid replay");

    assert_eq!(tictactoe_history::rules::winner(game.current_board()), Some(Player::X));
    assert_eq!(game.status(), "Winner: X");
    assert_eq!(game.outcome(), GameStatus::Won(Player::X));
}

#[test]
fn test_jump_to_start() {
    let mut game = GameHistory::replay(&[0, 1]).expect("Valid replay");
    assert_eq!(game.snapshot_count(), 3);

    game.jump_to(0).expect("Valid jump");

    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.next_mark(), Player::X);
    assert_eq!(game.snapshot_count(), 3);
}

#[test]
fn test_jump_out_of_range_leaves_state() {
    let mut game = GameHistory::replay(&[0, 1]).expect("Valid replay");
    let before = game.clone();

    let result = game.jump_to(5);

    assert_eq!(result, Err(OutOfRange { requested: 5, len: 3 }));
    assert_eq!(game, before);
}

#[test]
fn test_occupied_cell_never_changes_state() {
    let mut game = GameHistory::replay(&[4, 0]).expect("Valid replay");
    let before = game.clone();

    for _ in 0..3 {
        assert_eq!(game.apply_move(4), Err(IllegalMove::Occupied(Position::Center)));
        assert_eq!(game.apply_move(0), Err(IllegalMove::Occupied(Position::TopLeft)));
    }
    assert_eq!(game, before);
}

#[test]
fn test_parity_after_each_move() {
    let mut game = GameHistory::new();
    for (played, cell) in [4, 0, 8, 2, 1].into_iter().enumerate() {
        let mover = game.next_mark();
        let previous = game.current_move();

        game.apply_move(cell).expect("Valid move");

        assert_eq!(game.next_mark(), mover.opponent());
        assert_eq!(game.current_move(), previous + 1);
        assert_eq!(game.current_move(), played + 1);
    }
}

#[test]
fn test_jump_then_move_truncates_future() {
    for extra in [0, 3, 5] {
        let cells: Vec<usize> = [0, 1, 2, 3, 4, 5, 7].iter().copied().take(2 + extra).collect();
        let mut game = GameHistory::replay(&cells).expect("Valid replay");
        assert!(game.snapshot_count() >= 3);

        game.jump_to(2).expect("Valid jump");
        game.apply_move(8).expect("Cell 8 is free on snapshot 2");

        assert_eq!(game.snapshot_count(), 4);
        assert_eq!(game.current_move(), 3);
    }
}

#[test]
fn test_won_game_rejects_moves_but_allows_review() {
    let mut game = GameHistory::replay(&[0, 3, 1, 4, 2]).expect("Valid replay");

    assert_eq!(game.apply_move(8), Err(IllegalMove::GameDecided(Player::X)));
    assert_eq!(game.snapshot_count(), 6);

    game.jump_to(4).expect("Valid jump");
    assert_eq!(game.status(), "Next player: X");

    // Resuming from the past overwrites the winning line.
    game.apply_move(8).expect("Valid move");
    assert_eq!(game.snapshot_count(), 6);
    assert_eq!(game.outcome(), GameStatus::InProgress);
}

#[test]
fn test_snapshots_are_not_shared() {
    let mut game = GameHistory::replay(&[0, 1]).expect("Valid replay");
    let snapshot_one = game.snapshots()[1].clone();

    game.jump_to(1).expect("Valid jump");
    game.apply_move(4).expect("Valid move");

    assert_eq!(game.snapshots()[1], snapshot_one);
    assert!(game.snapshots()[1].is_empty(Position::Center));
}

#[test]
fn test_list_moves_keys_are_stable() {
    let mut game = GameHistory::new();
    assert_eq!(game.list_moves().len(), 1);

    game.apply_move(4).expect("Valid move");
    let first = game.list_moves();
    game.apply_move(0).expect("Valid move");
    let second = game.list_moves();

    assert_eq!(second.len(), 3);
    assert_eq!(&second[..2], &first[..]);
    assert_eq!(second[0].label(), "Go to game start");
    assert_eq!(second[2].label(), "Go to move #2");
    for (expected, entry) in second.iter().enumerate() {
        assert_eq!(*entry.move_index(), expected);
    }
}

#[test]
fn test_draw_reports_next_player() {
    let game = GameHistory::replay(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("Valid replay");

    assert_eq!(game.outcome(), GameStatus::Draw);
    assert_eq!(game.status(), "Next player: O");
    assert!(matches!(game.clone().apply_move(0), Err(IllegalMove::Occupied(_))));
}

#[test]
fn test_errors_convert_to_game_error() {
    let mut game = GameHistory::new();

    let err: GameError = game.jump_to(1).unwrap_err().into();
    assert!(matches!(err, GameError::OutOfRange(_)));
    assert!(err.to_string().contains("out of range"));

    let err: GameError = game.apply_move(12).unwrap_err().into();
    assert!(matches!(err, GameError::IllegalMove(IllegalMove::OutOfBounds(12))));
}
