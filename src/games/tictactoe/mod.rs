//! Tic-tac-toe: grid, rules, automated opponent and session controller.

mod action;
mod controller;
mod invariants;
mod position;
pub mod rules;
mod scheduler;
mod score;
mod selector;
mod types;

pub use action::{Move, MoveError};
pub use controller::{GameController, GameEvent, GameSnapshot, GameStatus, Mode};
pub use position::Position;
pub use rules::{Win, WinningLine, is_draw, winner};
pub use scheduler::{AutoMoveTicket, QueueScheduler, Scheduler, TimerScheduler};
pub use score::{ScoreSnapshot, ScoreTracker};
pub use selector::{CENTER, CORNERS, EDGES, MoveSelector, Reason, Selection};
pub use types::{CELL_COUNT, Cell, Grid, GridParseError, Mark};
