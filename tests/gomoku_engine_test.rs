//! Tests for the engine operation set: validation, win and tie
//! bookkeeping, rotation, and reset.

use strictly_gomoku::{Coord, GameEngine, GameStatus, Move, MoveError, Player, Square};

#[test]
fn test_engine_lifecycle() {
    let mut engine = GameEngine::with_defaults(10);
    assert_eq!(engine.board_size(), 10);
    assert_eq!(*engine.current_player().label(), 'X');

    let mov = Move::at(4, 4, *engine.current_player().label());
    assert!(engine.is_valid_move(&mov));
    engine.process_move(mov);

    assert!(!engine.has_winner());
    assert!(!engine.is_tied());
    assert_eq!(engine.status(), GameStatus::InProgress);

    engine.toggle_player();
    assert_eq!(*engine.current_player().label(), 'O');
}

#[test]
fn test_occupied_square_is_invalid() {
    let mut engine = GameEngine::with_defaults(10);
    engine.process_move(Move::at(4, 4, 'X'));

    let mov = Move::at(4, 4, 'O');
    assert!(!engine.is_valid_move(&mov));
    assert_eq!(
        engine.validate_move(&mov),
        Err(MoveError::SquareOccupied(Coord::new(4, 4)))
    );
}

#[test]
fn test_no_move_is_valid_after_win() {
    let mut engine = GameEngine::with_defaults(10);
    for col in 2..=6 {
        engine.process_move(Move::at(4, col, 'X'));
    }
    assert!(engine.has_winner());

    // Rejected regardless of occupancy.
    let empty_square = Move::at(9, 9, 'O');
    assert!(!engine.is_valid_move(&empty_square));
    assert_eq!(engine.validate_move(&empty_square), Err(MoveError::GameOver));
}

#[test]
fn test_interior_win_after_fifth_placement() {
    let mut engine = GameEngine::with_defaults(10);
    for col in 2..=6 {
        assert!(!engine.has_winner());
        engine.process_move(Move::at(4, col, 'X'));
    }

    assert!(engine.has_winner());
    assert!(!engine.is_tied());
    assert_eq!(engine.status(), GameStatus::Won('X'));

    let combo = engine.winning_combo().expect("combo recorded");
    let expected: Vec<Coord> = (2..=6).map(|col| Coord::new(4, col)).collect();
    assert_eq!(combo.cells().to_vec(), expected);

    let winner = engine.winner().expect("winner resolved");
    assert_eq!(*winner.label(), 'X');
    assert_eq!(winner.color(), "red");
}

#[test]
fn test_edge_win_is_unconditional() {
    let mut engine = GameEngine::with_defaults(10);
    // Opponent waits just inside the only on-board end.
    engine.process_move(Move::at(0, 5, 'O'));
    for col in 0..5 {
        engine.process_move(Move::at(0, col, 'X'));
    }

    assert!(engine.has_winner());
    let combo = engine.winning_combo().expect("combo recorded");
    assert_eq!(combo.first(), Coord::new(0, 0));
}

#[test]
fn test_flanked_run_does_not_win() {
    let mut engine = GameEngine::with_defaults(10);
    engine.process_move(Move::at(4, 1, 'O'));
    engine.process_move(Move::at(4, 7, 'O'));
    for col in 2..=6 {
        engine.process_move(Move::at(4, col, 'X'));
    }

    assert!(!engine.has_winner());
    assert!(engine.winning_combo().is_none());
    assert_eq!(engine.status(), GameStatus::InProgress);
}

#[test]
fn test_toggle_cycles_and_wraps() {
    let players = vec![
        Player::new('A', "red".to_string()),
        Player::new('B', "green".to_string()),
        Player::new('C', "blue".to_string()),
    ];
    let mut engine = GameEngine::new(players, 10);

    let mut labels = Vec::new();
    for _ in 0..6 {
        labels.push(*engine.current_player().label());
        engine.toggle_player();
    }
    assert_eq!(labels, vec!['A', 'B', 'C', 'A', 'B', 'C']);
}

#[test]
fn test_reset_clears_game_but_not_rotation() {
    let mut engine = GameEngine::with_defaults(10);
    for col in 2..=6 {
        engine.process_move(Move::at(4, col, 'X'));
    }
    assert!(engine.has_winner());
    engine.toggle_player();

    engine.reset();

    assert!(!engine.has_winner());
    assert!(engine.winning_combo().is_none());
    assert!(engine.history().is_empty());
    assert!(
        engine
            .board()
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    );
    // Rotation stays where the last toggle left it.
    assert_eq!(*engine.current_player().label(), 'O');

    // The reused catalog still detects wins after reset.
    for col in 2..=6 {
        engine.process_move(Move::at(7, col, 'O'));
    }
    assert!(engine.has_winner());
}

#[test]
fn test_alternating_fill_is_a_tie() {
    // Pattern with no run longer than two in any direction:
    // rows alternate marks per column, columns repeat an XXOO stripe,
    // and both diagonals inherit runs of at most two.
    let label = |row: usize, col: usize| if (row + 2 * col) % 4 < 2 { 'X' } else { 'O' };

    let mut engine = GameEngine::with_defaults(10);
    for row in 0..10 {
        for col in 0..10 {
            let mov = Move::at(row, col, label(row, col));
            assert!(engine.is_valid_move(&mov));
            engine.process_move(mov);
            assert!(!engine.has_winner(), "unexpected winner at {}", mov);
        }
    }

    assert!(engine.is_tied());
    assert!(!engine.has_winner());
    assert_eq!(engine.status(), GameStatus::Draw);
}
