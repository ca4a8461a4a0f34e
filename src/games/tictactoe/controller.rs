//! Session state machine for tic-tac-toe.
//!
//! [`GameController`] owns the grid, the turn, the mode, the status and the
//! score. Callers submit moves and read snapshots; they never touch the state
//! directly. In human-vs-automated mode the controller answers a human move by
//! scheduling one automated move and applies it when the ticket comes back.

use super::action::{Move, MoveError};
use super::invariants::{BalancedMarks, Invariant, MonotonicGrid, TurnFollowsMarks};
use super::rules::{Win, is_draw, winner};
use super::scheduler::{AutoMoveTicket, Scheduler};
use super::score::{ScoreSnapshot, ScoreTracker};
use super::selector::MoveSelector;
use super::types::{Grid, Mark};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument, warn};

/// Who plays the second mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Mode {
    /// Two humans alternate at the same controller.
    #[default]
    #[strum(to_string = "Human vs Human", serialize = "human-vs-human", serialize = "hvh")]
    HumanVsHuman,
    /// The human plays X, the automated opponent plays O.
    #[strum(
        to_string = "Human vs Automated",
        serialize = "human-vs-automated",
        serialize = "hva"
    )]
    HumanVsAutomated,
}

impl Mode {
    /// The mark played by the automated opponent, if there is one.
    pub fn automated_mark(self) -> Option<Mark> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsAutomated => Some(Mark::O),
        }
    }

    /// The other mode.
    pub fn toggle(self) -> Self {
        match self {
            Mode::HumanVsHuman => Mode::HumanVsAutomated,
            Mode::HumanVsAutomated => Mode::HumanVsHuman,
        }
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line was completed.
    Won(Win),
    /// The grid filled without a line.
    Draw,
}

impl GameStatus {
    /// Won or drawn.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Owned copy of the game state handed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Grid contents.
    grid: Grid,
    /// Mark to move. Meaningless once the game is over.
    current_turn: Mark,
    /// Game status.
    status: GameStatus,
    /// Active mode.
    mode: Mode,
    /// True while an automated move is scheduled but not yet applied.
    awaiting_automated: bool,
    /// Session generation; bumped by every reset.
    generation: u64,
}

/// Notification sent to subscribers after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Grid, turn, status or mode changed.
    StateChanged(GameSnapshot),
    /// Score counters changed.
    ScoreChanged(ScoreSnapshot),
}

/// The tic-tac-toe session state machine.
pub struct GameController {
    grid: Grid,
    current_turn: Mark,
    status: GameStatus,
    mode: Mode,
    score: ScoreTracker,
    generation: u64,
    pending: Option<AutoMoveTicket>,
    selector: MoveSelector,
    rng: StdRng,
    scheduler: Box<dyn Scheduler>,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
}

impl GameController {
    /// Creates a controller in `mode` that defers automated moves through `scheduler`.
    ///
    /// Tie-breaks use an OS-seeded generator; see [`GameController::with_seed`].
    #[instrument(skip(scheduler))]
    pub fn new(mode: Mode, scheduler: impl Scheduler + 'static) -> Self {
        info!("Creating game controller");
        Self {
            grid: Grid::new(),
            current_turn: Mark::X,
            status: GameStatus::InProgress,
            mode,
            score: ScoreTracker::new(),
            generation: 0,
            pending: None,
            selector: MoveSelector,
            rng: StdRng::from_os_rng(),
            scheduler: Box::new(scheduler),
            subscribers: Vec::new(),
        }
    }

    /// Reseeds the tie-break generator for reproducible automated play.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Registers a subscriber for state and score notifications.
    pub fn subscribe(&mut self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Submits a human move for `actor` at `index`.
    ///
    /// In human-vs-automated mode the automated mark cannot be submitted from
    /// outside; it only moves through [`GameController::play_automated`].
    /// A rejected move leaves the state unchanged.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn submit_move(&mut self, index: usize, actor: Mark) -> Result<GameSnapshot, MoveError> {
        if self.mode.automated_mark() == Some(actor) {
            warn!(%actor, "Move submitted for the automated mark");
            return Err(MoveError::NotYourTurn(actor));
        }
        self.apply(Move::new(actor, index))
    }

    /// Plays the automated move `ticket` was issued for.
    ///
    /// Returns `Ok(None)` without touching state or notifying anyone when the
    /// ticket is stale, i.e. the game was reset or the mode changed after it
    /// was issued.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn play_automated(
        &mut self,
        ticket: AutoMoveTicket,
    ) -> Result<Option<GameSnapshot>, MoveError> {
        if self.pending != Some(ticket) || ticket.generation != self.generation {
            debug!(
                ticket_generation = ticket.generation,
                "Discarding stale automated move"
            );
            return Ok(None);
        }
        self.pending = None;

        let Some(me) = self.mode.automated_mark() else {
            debug!("No automated opponent in this mode");
            return Ok(None);
        };

        let selection = self
            .selector
            .select(&self.grid, me, me.opponent(), &mut self.rng)
            .inspect_err(|e| {
                error!(error = %e, grid = %self.grid, "Automated move requested on a full grid")
            })?;

        info!(index = selection.index, reason = %selection.reason, "Automated opponent moves");
        self.apply(Move::new(me, selection.index)).map(Some)
    }

    /// Switches mode. Always starts a fresh game and clears the score.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: Mode) -> GameSnapshot {
        info!(from = %self.mode, to = %mode, "Switching mode");
        self.mode = mode;
        self.score.reset();
        self.emit(GameEvent::ScoreChanged(self.score.counts()));
        self.reset()
    }

    /// Starts a fresh game. The score is kept; pending automated moves are invalidated.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> GameSnapshot {
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.grid = Grid::new();
        self.current_turn = Mark::X;
        self.status = GameStatus::InProgress;
        info!(generation = self.generation, "Game reset");

        let snapshot = self.state();
        self.emit(GameEvent::StateChanged(snapshot));
        snapshot
    }

    /// Zeroes the score. The game itself is unaffected.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) -> ScoreSnapshot {
        self.score.reset();
        info!("Score reset");
        let counts = self.score.counts();
        self.emit(GameEvent::ScoreChanged(counts));
        counts
    }

    /// Snapshot of the current game.
    pub fn state(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            current_turn: self.current_turn,
            status: self.status,
            mode: self.mode,
            awaiting_automated: self.pending.is_some(),
            generation: self.generation,
        }
    }

    /// Snapshot of the score.
    pub fn score(&self) -> ScoreSnapshot {
        self.score.counts()
    }

    /// Validates and applies one move, then evaluates the outcome.
    fn apply(&mut self, action: Move) -> Result<GameSnapshot, MoveError> {
        if self.status.is_terminal() {
            warn!(%action, "Move submitted after the game ended");
            return Err(MoveError::GameNotInProgress);
        }
        if action.mark != self.current_turn {
            warn!(%action, expected = %self.current_turn, "Move out of turn");
            return Err(MoveError::NotYourTurn(action.mark));
        }
        let before = self.grid;
        self.grid
            .place(action.index, action.mark)
            .inspect_err(|e| warn!(%action, error = %e, "Invalid move"))?;
        info!(%action, "Move applied");

        let mut scheduled = None;
        if let Some(win) = winner(&self.grid) {
            self.status = GameStatus::Won(win);
            self.score.credit(win.mark);
            info!(mark = %win.mark, line = ?win.line.indices(), "Game won");
        } else if is_draw(&self.grid) {
            self.status = GameStatus::Draw;
            self.score.credit_draw();
            info!("Game drawn");
        } else {
            self.current_turn = self.current_turn.opponent();
            if self.mode.automated_mark() == Some(self.current_turn) {
                let ticket = AutoMoveTicket::new(self.generation);
                self.pending = Some(ticket);
                scheduled = Some(ticket);
            }
        }

        let snapshot = self.state();
        debug_assert!(
            MonotonicGrid::holds(&(before, self.grid)),
            "{}",
            MonotonicGrid::description()
        );
        debug_assert!(
            BalancedMarks::holds(&self.grid),
            "{}",
            BalancedMarks::description()
        );
        debug_assert!(
            TurnFollowsMarks::holds(&snapshot),
            "{}",
            TurnFollowsMarks::description()
        );

        self.emit(GameEvent::StateChanged(snapshot));
        if snapshot.status.is_terminal() {
            self.emit(GameEvent::ScoreChanged(self.score.counts()));
        }
        // Hand off only after the move is committed and announced.
        if let Some(ticket) = scheduled {
            debug!(generation = ticket.generation, "Scheduling automated move");
            self.scheduler.schedule(ticket);
        }
        Ok(snapshot)
    }

    fn emit(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl std::fmt::Debug for GameController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("grid", &self.grid)
            .field("current_turn", &self.current_turn)
            .field("status", &self.status)
            .field("mode", &self.mode)
            .field("score", &self.score)
            .field("generation", &self.generation)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}
