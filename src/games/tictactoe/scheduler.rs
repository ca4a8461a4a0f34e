//! Deferral of the automated opponent's move.
//!
//! The controller never plays the automated move inline. It hands a ticket to
//! a [`Scheduler`], and whoever owns the controller feeds the ticket back to
//! [`GameController::play_automated`](super::GameController::play_automated)
//! when it comes due. Tickets carry the session generation they were issued
//! in, so a ticket that outlives a reset is recognized and dropped.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// Permission to play one automated move in a given session generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct AutoMoveTicket {
    /// Session generation the ticket was issued in.
    pub generation: u64,
}

/// Defers automated moves on behalf of the controller.
pub trait Scheduler: Send {
    /// Arranges for `ticket` to be delivered back to the controller's owner later.
    fn schedule(&mut self, ticket: AutoMoveTicket);
}

/// Delivers tickets after a fixed "thinking" delay using the tokio timer.
///
/// Requires a running tokio runtime when [`Scheduler::schedule`] is called.
#[derive(Debug)]
pub struct TimerScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<AutoMoveTicket>,
}

impl TimerScheduler {
    /// Creates a scheduler and the receiver its tickets arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<AutoMoveTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { delay, tx }, rx)
    }
}

impl Scheduler for TimerScheduler {
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    fn schedule(&mut self, ticket: AutoMoveTicket) {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ticket).is_err() {
                // Receiver gone: the session ended while the opponent was thinking.
                debug!(generation = ticket.generation, "Ticket receiver closed");
            }
        });
    }
}

/// Delivers tickets immediately, for headless drivers and tests.
#[derive(Debug)]
pub struct QueueScheduler {
    tx: mpsc::UnboundedSender<AutoMoveTicket>,
}

impl QueueScheduler {
    /// Creates a scheduler and the receiver its tickets arrive on.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<AutoMoveTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Scheduler for QueueScheduler {
    fn schedule(&mut self, ticket: AutoMoveTicket) {
        if self.tx.send(ticket).is_err() {
            warn!(generation = ticket.generation, "Ticket receiver closed");
        }
    }
}
