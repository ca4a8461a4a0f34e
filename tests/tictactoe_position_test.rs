//! Tests for tic-tac-toe position enum.

use tictactoe_duel::{Grid, Mark, Position};

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
fn test_row_and_column_are_row_major() {
    for pos in Position::ALL {
        assert_eq!(pos.row() * 3 + pos.column(), pos.to_index());
    }
    assert_eq!((Position::MiddleRight.row(), Position::MiddleRight.column()), (1, 2));
}

#[test]
fn test_from_label_or_index() {
    assert_eq!(Position::from_label_or_index("center"), Some(Position::Center));
    assert_eq!(Position::from_label_or_index("Bottom-left"), Some(Position::BottomLeft));
    assert_eq!(Position::from_label_or_index(" 2 "), Some(Position::TopRight));
    assert_eq!(Position::from_label_or_index("middle"), None);
}

#[test]
fn test_valid_moves_empty_grid() {
    let grid = Grid::new();
    assert_eq!(Position::valid_moves(&grid).len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut grid = Grid::new();
    grid.place(0, Mark::X).unwrap();
    grid.place(4, Mark::O).unwrap();

    let valid = Position::valid_moves(&grid);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
