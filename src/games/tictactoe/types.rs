//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Mark {
    /// Mark X (moves first).
    X,
    /// Mark O (moves second, played by the automated opponent in human-vs-automated mode).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the tic-tac-toe grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe grid.
///
/// Cells are stored row-major: index `i` sits at row `i / 3`, column `i % 3`.
/// Placement only ever turns an empty cell into a mark; the only way back
/// to empty is a fresh grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [Cell; CELL_COUNT],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `index`.
    pub fn get(&self, index: usize) -> Result<Cell, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::IndexOutOfRange(index))
    }

    /// Places `mark` at `index`.
    ///
    /// Fails without touching the grid if the index is out of range or the
    /// cell is already taken.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(MoveError::IndexOutOfRange(index))?;
        if !cell.is_empty() {
            return Err(MoveError::CellOccupied(index));
        }
        *cell = Cell::Occupied(mark);
        Ok(())
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are never empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Empty indices in row-major order.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty_at(i)).collect()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(mark))
            .count()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Occupied(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// Wrong number of cells.
    #[display("Expected 9 cells, found {}", _0)]
    Length(#[error(not(source))] usize),
    /// Unrecognized cell character.
    #[display("Unrecognized cell {:?} at index {}", symbol, index)]
    Symbol {
        /// The offending character.
        symbol: char,
        /// Where it appeared.
        index: usize,
    },
}

impl FromStr for Grid {
    type Err = GridParseError;

    /// Parses nine cells: `X`/`O` (any case) for marks, `.`, `-`, `_` or space for empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != CELL_COUNT {
            return Err(GridParseError::Length(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                _ => return Err(GridParseError::Symbol { symbol, index }),
            };
        }
        Ok(Self { cells })
    }
}
