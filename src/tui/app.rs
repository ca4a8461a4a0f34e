//! Application state and logic.

use crossterm::event::KeyCode;
use tictactoe_duel::{
    AutoMoveTicket, GameController, GameEvent, GameSnapshot, GameStatus, Position, ScoreSnapshot,
    Settings, TimerScheduler,
};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use super::input::move_cursor;

/// Main application state.
///
/// The controller is the single source of truth; `snapshot` and `score` are
/// only ever updated from its notifications.
pub struct App {
    controller: GameController,
    events: mpsc::UnboundedReceiver<GameEvent>,
    tickets: mpsc::UnboundedReceiver<AutoMoveTicket>,
    snapshot: GameSnapshot,
    score: ScoreSnapshot,
    cursor: Position,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application from settings.
    pub fn new(settings: &Settings) -> Self {
        let (scheduler, tickets) = TimerScheduler::new(settings.think_delay());
        let mut controller = GameController::new(*settings.mode(), scheduler);
        if let Some(seed) = settings.seed() {
            controller = controller.with_seed(*seed);
        }
        let events = controller.subscribe();
        let snapshot = controller.state();
        let score = controller.score();

        Self {
            controller,
            events,
            tickets,
            snapshot,
            score,
            cursor: Position::Center,
            message: None,
            should_quit: false,
        }
    }

    /// Latest game snapshot.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Latest score.
    pub fn score(&self) -> &ScoreSnapshot {
        &self.score
    }

    /// Cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies pending notifications to the displayed state.
    pub fn sync(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling game event");
            match event {
                GameEvent::StateChanged(snapshot) => self.snapshot = snapshot,
                GameEvent::ScoreChanged(score) => self.score = score,
            }
        }
    }

    /// Plays any automated moves that have come due.
    pub fn tick(&mut self) {
        while let Ok(ticket) = self.tickets.try_recv() {
            match self.controller.play_automated(ticket) {
                Ok(Some(_)) => self.message = None,
                Ok(None) => debug!(?ticket, "Stale ticket ignored"),
                Err(e) => {
                    error!(error = %e, "Automated move failed");
                    self.message = Some(format!("Automated move failed: {}", e));
                }
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.message = None;
            }
            KeyCode::Char('s') => {
                self.controller.reset_score();
            }
            KeyCode::Char('m') => {
                let mode = self.snapshot.mode().toggle();
                self.controller.set_mode(mode);
                self.message = Some(format!("Mode: {}", mode));
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(position) = c
                    .to_digit(10)
                    .and_then(|digit| (digit as usize).checked_sub(1))
                    .and_then(Position::from_index)
                {
                    self.cursor = position;
                    self.place(position);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Submits a move for whoever is to play.
    ///
    /// Ignored while the automated opponent is thinking.
    fn place(&mut self, position: Position) {
        if *self.snapshot.awaiting_automated() {
            debug!(%position, "Placement ignored while the opponent is thinking");
            return;
        }
        let actor = *self.snapshot.current_turn();
        match self.controller.submit_move(position.to_index(), actor) {
            Ok(_) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Status text for the current state.
    pub fn status_line(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        match self.snapshot.status() {
            GameStatus::Won(win) => format!("Player {} wins! Press 'r' to play again.", win.mark),
            GameStatus::Draw => "It's a draw! Press 'r' to play again.".to_string(),
            GameStatus::InProgress if *self.snapshot.awaiting_automated() => {
                format!("{} is thinking...", self.snapshot.current_turn())
            }
            GameStatus::InProgress => format!("Player {} to move", self.snapshot.current_turn()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_duel::{Cell, Mark, Mode};

    fn automated_app() -> App {
        let settings = Settings::default()
            .with_overrides(Some(Mode::HumanVsAutomated), Some(500), Some(4))
            .unwrap();
        App::new(&settings)
    }

    #[tokio::test(start_paused = true)]
    async fn test_placement_ignored_while_opponent_thinks() {
        let mut app = automated_app();

        app.handle_key(KeyCode::Char('1'));
        app.sync();
        assert!(*app.snapshot().awaiting_automated());
        assert_eq!(app.status_line(), "O is thinking...");

        app.handle_key(KeyCode::Char('2'));
        app.handle_key(KeyCode::Enter);
        app.sync();
        assert_eq!(app.status_line(), "O is thinking...");
        assert_eq!(app.snapshot().grid().get(1), Ok(Cell::Empty));
        assert_eq!(app.snapshot().grid().count(Mark::X), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_automated_move_reaches_display_after_delay() {
        let mut app = automated_app();

        app.handle_key(KeyCode::Char('1'));
        tokio::time::sleep(std::time::Duration::from_millis(600)).await;
        app.tick();
        app.sync();

        assert!(!*app.snapshot().awaiting_automated());
        assert_eq!(app.snapshot().grid().get(4), Ok(Cell::Occupied(Mark::O)));
        assert_eq!(app.status_line(), "Player X to move");
    }
}
