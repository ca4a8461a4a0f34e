//! Named grid positions.

use super::types::Grid;
use serde::{Deserialize, Serialize};

/// A position on the tic-tac-toe grid, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to grid index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from grid index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of the position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of the position (0-2).
    pub fn column(self) -> usize {
        self.to_index() % 3
    }

    /// Parses a label (case-insensitive) or an index (0-8).
    pub fn from_label_or_index(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }

        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }

    /// Empty positions on `grid`, row-major.
    pub fn valid_moves(grid: &Grid) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| grid.is_empty_at(pos.to_index()))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
