//! Win/draw tally across games in a session.

use super::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Read-only copy of the tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreSnapshot {
    /// Wins credited to `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }
}

/// Purely additive score counters.
#[derive(Debug, Clone, Default)]
pub struct ScoreTracker {
    counts: ScoreSnapshot,
}

impl ScoreTracker {
    /// Creates a tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `mark`.
    pub fn credit(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.counts.x_wins += 1,
            Mark::O => self.counts.o_wins += 1,
        }
    }

    /// Counts a draw.
    pub fn credit_draw(&mut self) {
        self.counts.draws += 1;
    }

    /// Current counts.
    pub fn counts(&self) -> ScoreSnapshot {
        self.counts
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        self.counts = ScoreSnapshot::default();
    }
}
