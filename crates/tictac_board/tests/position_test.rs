//! Tests for the board position enum.

use tictac_board::{BoardState, Mark, Position};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_position_row_col_round_trip() {
    for pos in Position::ALL {
        assert_eq!(Position::from_row_col(pos.row(), pos.col()), Ok(pos));
    }
}

#[test]
fn test_from_row_col_out_of_grid() {
    assert!(Position::from_row_col(0, 3).is_err());
    assert!(Position::from_row_col(3, 0).is_err());
}

#[test]
fn test_from_label_or_number() {
    // 1-based numbers, as the text grid shows them
    assert_eq!(Position::from_label_or_number("1"), Some(Position::TopLeft));
    assert_eq!(Position::from_label_or_number("5"), Some(Position::Center));
    assert_eq!(Position::from_label_or_number("0"), None);
    assert_eq!(Position::from_label_or_number("10"), None);

    assert_eq!(
        Position::from_label_or_number("center"),
        Some(Position::Center)
    );
    assert_eq!(
        Position::from_label_or_number("Top-left"),
        Some(Position::TopLeft)
    );
}

#[test]
fn test_open_cells_empty_board() {
    let board = BoardState::new();
    let open = Position::open_cells(&board);
    assert_eq!(open.len(), 9); // All positions open on an empty board
}

#[test]
fn test_open_cells_filters_occupied() {
    let mut board = BoardState::new();
    board.update(Position::TopLeft, Mark::X).unwrap();
    board.update(Position::Center, Mark::O).unwrap();

    let open = Position::open_cells(&board);
    assert_eq!(open.len(), 7); // 2 occupied, 7 free
    assert!(!open.contains(&Position::TopLeft));
    assert!(!open.contains(&Position::Center));
    assert!(open.contains(&Position::BottomRight));
}
