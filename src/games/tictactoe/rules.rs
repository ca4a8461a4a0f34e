//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a grid against the winning lines. Rules are
//! kept apart from grid storage so the controller and the move selector can
//! share them.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{winner, Win, WinningLine};
