//! Priority-chain move selection for the automated opponent.
//!
//! Not a search: the selector takes the first rule that yields a candidate.
//!
//! 1. Complete a line of its own.
//! 2. Block a line the opponent would complete.
//! 3. Take the center.
//! 4. Take a random empty corner.
//! 5. Take a random empty edge.
//! 6. Take any random empty cell.

use super::action::MoveError;
use super::rules::winner;
use super::types::{Grid, Mark};
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// Center index.
pub const CENTER: usize = 4;

/// Corner indices.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Edge indices.
pub const EDGES: [usize; 4] = [1, 3, 5, 7];

/// Which rule produced the selected index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Reason {
    /// Completes one of the selector's lines.
    Win,
    /// Stops the opponent completing a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a corner.
    Corner,
    /// Takes an edge.
    Edge,
    /// Takes whatever is left.
    Fallback,
}

/// A chosen index with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Grid index to play.
    pub index: usize,
    /// The rule that picked it.
    pub reason: Reason,
}

/// Stateless move-selection policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveSelector;

impl MoveSelector {
    /// Picks the index `me` should play against `other` on `grid`.
    ///
    /// Ties among corners, edges and the fallback set are broken with `rng`,
    /// so a seeded generator gives reproducible play.
    #[instrument(skip(self, grid, rng), fields(grid = %grid))]
    pub fn select<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        me: Mark,
        other: Mark,
        rng: &mut R,
    ) -> Result<Selection, MoveError> {
        let empty = grid.empty_indices();
        if empty.is_empty() {
            return Err(MoveError::NoMoveAvailable);
        }

        let selection = if let Some(index) = completing_index(grid, &empty, me) {
            Selection { index, reason: Reason::Win }
        } else if let Some(index) = completing_index(grid, &empty, other) {
            Selection { index, reason: Reason::Block }
        } else if grid.is_empty_at(CENTER) {
            Selection { index: CENTER, reason: Reason::Center }
        } else if let Some(index) = pick_empty(grid, &CORNERS, rng) {
            Selection { index, reason: Reason::Corner }
        } else if let Some(index) = pick_empty(grid, &EDGES, rng) {
            Selection { index, reason: Reason::Edge }
        } else {
            // Non-empty, checked above.
            let index = *empty.choose(rng).ok_or(MoveError::NoMoveAvailable)?;
            Selection { index, reason: Reason::Fallback }
        };

        debug!(index = selection.index, reason = %selection.reason, "Selected move");
        Ok(selection)
    }
}

/// First empty index (ascending) where placing `mark` wins for `mark`.
fn completing_index(grid: &Grid, empty: &[usize], mark: Mark) -> Option<usize> {
    empty.iter().copied().find(|&index| {
        let mut scratch = *grid;
        scratch.place(index, mark).is_ok()
            && winner(&scratch).is_some_and(|win| win.mark == mark)
    })
}

/// Uniform choice among the empty members of `candidates`.
fn pick_empty<R: Rng + ?Sized>(grid: &Grid, candidates: &[usize], rng: &mut R) -> Option<usize> {
    let open: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&index| grid.is_empty_at(index))
        .collect();
    open.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn select(grid: &str, me: Mark) -> Selection {
        let grid: Grid = grid.parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        MoveSelector.select(&grid, me, me.opponent(), &mut rng).unwrap()
    }

    #[test]
    fn test_win_preferred_over_block() {
        // Both X and O threaten; O to move takes its own win at 5.
        let selection = select("XX.OO....", Mark::O);
        assert_eq!(selection, Selection { index: 5, reason: Reason::Win });
    }

    #[test]
    fn test_lowest_winning_index_taken() {
        // X can finish 0-1-2 at 2 or 0-3-6 at 6.
        let selection = select("XX.X.....", Mark::X);
        assert_eq!(selection.index, 2);
    }

    #[test]
    fn test_scratch_copy_leaves_grid_untouched() {
        let grid: Grid = "OO.......".parse().unwrap();
        let before = grid;
        let mut rng = StdRng::seed_from_u64(1);
        let selection = MoveSelector.select(&grid, Mark::X, Mark::O, &mut rng).unwrap();
        assert_eq!(selection, Selection { index: 2, reason: Reason::Block });
        assert_eq!(grid, before);
    }
}
