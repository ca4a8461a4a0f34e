//! Win detection logic for tic-tac-toe.

use super::super::{Cell, Grid, Mark};
use serde::{Deserialize, Serialize};

/// One of the eight index triples that wins when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine(pub [usize; 3]);

impl WinningLine {
    /// All lines in canonical order: rows, then columns, then diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([0, 1, 2]),
        WinningLine([3, 4, 5]),
        WinningLine([6, 7, 8]),
        // Columns
        WinningLine([0, 3, 6]),
        WinningLine([1, 4, 7]),
        WinningLine([2, 5, 8]),
        // Diagonals
        WinningLine([0, 4, 8]),
        WinningLine([2, 4, 6]),
    ];

    /// The three grid indices of the line.
    pub fn indices(self) -> [usize; 3] {
        self.0
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The line it completed.
    pub line: WinningLine,
}

/// Returns the first completed line in canonical order, if any.
///
/// Under legal alternating play at most one mark can complete lines, so the
/// order only matters for arbitrary grids.
pub fn winner(grid: &Grid) -> Option<Win> {
    let cells = grid.cells();
    WinningLine::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.indices();
        match cells[a] {
            Cell::Occupied(mark) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(winner(&Grid::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in WinningLine::ALL {
                let mut grid = Grid::new();
                for index in line.indices() {
                    grid.place(index, mark).unwrap();
                }
                assert_eq!(winner(&grid), Some(Win { mark, line }), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let grid: Grid = "XX.O.O...".parse().unwrap();
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_canonical_order_prefers_rows() {
        // Top row and left column both complete; the row is reported.
        let grid: Grid = "XXXX..X..".parse().unwrap();
        assert_eq!(
            winner(&grid),
            Some(Win {
                mark: Mark::X,
                line: WinningLine([0, 1, 2])
            })
        );
    }

    #[test]
    fn test_canonical_order_columns_before_diagonals() {
        let grid: Grid = "O.OO.OO..".parse().unwrap();
        // Column 0-3-6 precedes anything else O holds.
        assert_eq!(winner(&grid).map(|w| w.line), Some(WinningLine([0, 3, 6])));
    }
}
