//! Tests for board state mutation.

use tictac_board::{BoardState, Cell, Mark, Position};

#[test]
fn test_update_leaves_other_cells_untouched() {
    let mut board = BoardState::new();
    board.update_at(0, 0, Mark::X).unwrap();

    assert_eq!(board.get(Position::TopLeft), Cell::Marked(Mark::X));
    for pos in Position::ALL.iter().skip(1) {
        assert_eq!(board.get(*pos), Cell::Empty);
    }
}

#[test]
fn test_update_returns_state_for_chaining() {
    let mut board = BoardState::new();
    let occupied = board.update(Position::Center, Mark::O).unwrap().occupied_count();
    assert_eq!(occupied, 1);
}

#[test]
fn test_fill_every_cell_once() {
    let mut board = BoardState::new();
    let mut mark = Mark::X;
    for pos in Position::ALL {
        board.update(pos, mark).unwrap();
        mark = mark.opponent();
    }
    assert_eq!(board.occupied_count(), 9);

    // Every further update fails, whatever the mark.
    for pos in Position::ALL {
        assert!(board.update(pos, Mark::X).is_err());
    }
}

#[test]
fn test_state_snapshot_round_trips() {
    let mut board = BoardState::new();
    board.update(Position::TopRight, Mark::X).unwrap();
    board.update(Position::BottomLeft, Mark::O).unwrap();

    let json = serde_json::to_string(&board).unwrap();
    let restored: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, board);
}
