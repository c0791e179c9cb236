//! Tests for typed cells as seen through the engine.

use tictactoe::{GameEngine, GameStatus, MoveError, Player, Position};

#[test]
fn test_raw_indices_past_the_board_have_no_cell() {
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    for index in [9, 10, usize::MAX] {
        assert_eq!(Position::from_index(index), None, "index {index}");
    }
}

#[test]
fn test_engine_rejects_raw_index_past_the_board() {
    let engine = GameEngine::new();
    assert_eq!(
        engine.attempt_move_index(usize::MAX),
        Err(MoveError::OutOfRange(usize::MAX))
    );
    assert_eq!(engine.valid_moves().len(), 9);
}

#[test]
fn test_valid_moves_shrink_in_row_major_order() {
    let engine = GameEngine::new();
    engine.attempt_move(Position::Center).unwrap();
    engine.attempt_move(Position::TopLeft).unwrap();

    let remaining: Vec<usize> = engine.valid_moves().iter().map(|p| p.to_index()).collect();
    assert_eq!(remaining, vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_empty_cells_after_a_win_are_not_playable() {
    let engine = GameEngine::new();
    for index in [0, 3, 1, 4, 2] {
        engine.attempt_move_index(index).unwrap();
    }
    assert_eq!(engine.status(), GameStatus::Won(Player::X));

    let empty = engine.valid_moves();
    assert_eq!(empty.len(), 4);
    for pos in empty {
        assert_eq!(engine.attempt_move(pos), Err(MoveError::InvalidMove));
    }
}

#[test]
fn test_cell_display_names_label_and_index() {
    assert_eq!(Position::Center.to_string(), "Center (4)");
    assert_eq!(
        MoveError::CellOccupied(Position::BottomCenter).to_string(),
        "Position already taken: Bottom-center (7)."
    );
}
