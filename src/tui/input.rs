//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe_duel::Position;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleLeft, KeyCode::Left), Position::MiddleLeft);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
