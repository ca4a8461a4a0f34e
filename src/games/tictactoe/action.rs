//! First-class move and move-error types for tic-tac-toe.

use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Grid index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.index)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(#[error(not(source))] usize),

    /// The cell at the index is already marked.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(#[error(not(source))] usize),

    /// The submitting mark is not the one to move.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Mark),

    /// The game has already been won or drawn.
    #[display("Game is not in progress")]
    GameNotInProgress,

    /// The move selector was asked to play on a full grid.
    ///
    /// This is a controller defect, not a user-facing condition.
    #[display("No move available on a full grid")]
    NoMoveAvailable,
}
