//! Draw detection logic for tic-tac-toe.

use super::super::Grid;
use super::win::winner;

/// A full grid with no completed line is a draw.
pub fn is_draw(grid: &Grid) -> bool {
    grid.is_full() && winner(grid).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid_not_draw() {
        assert!(!is_draw(&Grid::new()));
    }

    #[test]
    fn test_partial_grid_not_draw() {
        let grid: Grid = "XOXOXO...".parse().unwrap();
        assert!(!is_draw(&grid));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let grid: Grid = "XOXXOOOXX".parse().unwrap();
        assert!(grid.is_full());
        assert!(winner(&grid).is_none());
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_full_grid_with_winner_is_not_draw() {
        // X wins the top row on the last placement.
        let grid: Grid = "XXXOOXOXO".parse().unwrap();
        assert!(grid.is_full());
        assert!(!is_draw(&grid));
    }
}
