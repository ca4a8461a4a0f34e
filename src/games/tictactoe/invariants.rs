//! Invariants the controller maintains across every transition.
//!
//! Checked with `debug_assert!` after each committed move, and testable on
//! their own.

use super::controller::{GameSnapshot, GameStatus};
use super::types::{CELL_COUNT, Cell, Grid, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct BalancedMarks;

impl Invariant<Grid> for BalancedMarks {
    fn holds(grid: &Grid) -> bool {
        let (x, o) = (grid.count(Mark::X), grid.count(Mark::O));
        let valid = x == o || x == o + 1;
        if !valid {
            warn!(x, o, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

/// While in progress, the mark to move is determined by the mark counts.
pub struct TurnFollowsMarks;

impl Invariant<GameSnapshot> for TurnFollowsMarks {
    fn holds(snapshot: &GameSnapshot) -> bool {
        if *snapshot.status() != GameStatus::InProgress {
            return true;
        }
        let grid = snapshot.grid();
        let expected = if grid.count(Mark::X) == grid.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        };
        *snapshot.current_turn() == expected
    }

    fn description() -> &'static str {
        "The mark to move follows from the marks on the grid"
    }
}

/// Cells only ever go from empty to marked.
pub struct MonotonicGrid;

impl Invariant<(Grid, Grid)> for MonotonicGrid {
    fn holds((before, after): &(Grid, Grid)) -> bool {
        (0..CELL_COUNT).all(|i| {
            let (was, is) = (before.cells()[i], after.cells()[i]);
            was == Cell::Empty || was == is
        })
    }

    fn description() -> &'static str {
        "Grid cells are never overwritten"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balanced_marks() {
        assert!(BalancedMarks::holds(&Grid::new()));
        assert!(BalancedMarks::holds(&"XO.X.....".parse().unwrap()));
        assert!(!BalancedMarks::holds(&"O........".parse().unwrap()));
        assert!(!BalancedMarks::holds(&"XX.......".parse().unwrap()));
    }

    #[test]
    fn test_monotonic_grid() {
        let before: Grid = "X...O....".parse().unwrap();
        let grown: Grid = "X...O...X".parse().unwrap();
        let overwritten: Grid = "O...O...X".parse().unwrap();

        assert!(MonotonicGrid::holds(&(before, grown)));
        assert!(!MonotonicGrid::holds(&(before, overwritten)));
        assert!(!MonotonicGrid::holds(&(grown, before)));
    }
}
