//! Cooperative timers.
//!
//! The engine has no threads; every suspended operation is a value holding
//! remaining time, advanced once per [`tick`](crate::session::MatchCoordinator::tick)
//! and resumed synchronously on expiry. Four such operations exist: card
//! flip animations (which carry their own timer), the initial reveal, the
//! mismatch reversal, and the audio pitch reset.

use serde::{Deserialize, Serialize};

/// A one-shot countdown.
///
/// `tick` reports `true` when the remaining time crosses zero. Callers hold
/// the countdown in an `Option` and drop it on expiry, so it fires exactly
/// once.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Countdown {
    remaining: f32,
}

impl Countdown {
    /// Start a countdown of `secs` seconds.
    #[must_use]
    pub fn new(secs: f32) -> Self {
        Self {
            remaining: secs.max(0.0),
        }
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining(&self) -> f32 {
        self.remaining.max(0.0)
    }

    /// Advance by `dt` seconds; `true` once the countdown has elapsed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.remaining -= dt;
        self.remaining <= 0.0
    }
}

/// Elapsed-time accumulator for the in-game timer.
///
/// Started when the initial reveal ends, seeded from the snapshot on load,
/// stopped when the game completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameClock {
    elapsed_secs: f32,
    running: bool,
}

impl GameClock {
    /// A stopped clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from zero and run.
    pub fn start(&mut self) {
        self.elapsed_secs = 0.0;
        self.running = true;
    }

    /// Run from a saved elapsed time.
    pub fn resume_at(&mut self, secs: f32) {
        self.elapsed_secs = secs.max(0.0);
        self.running = true;
    }

    /// Stop accumulating; elapsed time is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Reset to a stopped zero clock.
    pub fn reset(&mut self) {
        self.elapsed_secs = 0.0;
        self.running = false;
    }

    /// Advance by `dt` seconds while running.
    pub fn tick(&mut self, dt: f32) {
        if self.running {
            self.elapsed_secs += dt;
        }
    }

    /// Elapsed seconds.
    #[must_use]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Is the clock accumulating?
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
