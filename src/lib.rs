//! Tic-tac-toe session engine.
//!
//! Two humans at one keyboard, or a human against an automated opponent that
//! follows a fixed priority policy (win, block, center, corner, edge).
//!
//! # Architecture
//!
//! - **Grid / rules**: board storage and pure win/draw evaluation
//! - **MoveSelector**: the automated opponent's policy, with injected randomness
//! - **GameController**: the session state machine; the only owner of game state
//! - **Scheduler**: defers the automated move so a front end can render first
//! - **Settings**: TOML configuration
//!
//! # Example
//!
//! ```
//! use tictactoe_duel::{GameController, GameStatus, Mark, Mode, QueueScheduler};
//!
//! let (scheduler, mut tickets) = QueueScheduler::new();
//! let mut game = GameController::new(Mode::HumanVsAutomated, scheduler).with_seed(7);
//!
//! game.submit_move(0, Mark::X)?;
//! let ticket = tickets.try_recv().expect("automated move scheduled");
//! let snapshot = game.play_automated(ticket)?.expect("ticket is current");
//!
//! assert_eq!(*snapshot.current_turn(), Mark::X);
//! assert_eq!(*snapshot.status(), GameStatus::InProgress);
//! # Ok::<(), tictactoe_duel::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;

// Crate-level exports - Settings
pub use config::{ConfigError, MAX_THINK_DELAY_MS, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AutoMoveTicket, CELL_COUNT, CENTER, CORNERS, Cell, EDGES, GameController, GameEvent,
    GameSnapshot, GameStatus, Grid, GridParseError, Mark, Mode, Move, MoveError, MoveSelector,
    Position, QueueScheduler, Reason, Scheduler, ScoreSnapshot, ScoreTracker, Selection,
    TimerScheduler, Win, WinningLine, is_draw, winner,
};
