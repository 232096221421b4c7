//! Kill-streak combo and score accumulation.
//!
//! Kills inside a rolling window raise the score multiplier from 1 to 2.
//! Each kill extends the window; once it lapses the streak is lost.

use skyace_core::constants::{
    BASE_MULTIPLIER, COMBO_KILL_THRESHOLD, COMBO_MULTIPLIER, COMBO_WINDOW_SECS,
};

/// Time-windowed kill streak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComboState {
    multiplier: u32,
    kills_in_window: u32,
    /// Run time (seconds) after which the streak is lost.
    window_expires_at: f64,
}

impl Default for ComboState {
    fn default() -> Self {
        Self {
            multiplier: BASE_MULTIPLIER,
            kills_in_window: 0,
            window_expires_at: 0.0,
        }
    }
}

impl ComboState {
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }

    pub fn kills_in_window(&self) -> u32 {
        self.kills_in_window
    }

    pub fn window_expires_at(&self) -> f64 {
        self.window_expires_at
    }

    /// Drop the streak if the window has lapsed. Called once per tick,
    /// before any kills of that tick are registered.
    ///
    /// Returns the new multiplier when it changed.
    pub fn expire(&mut self, now: f64) -> Option<u32> {
        if self.kills_in_window == 0 || now <= self.window_expires_at {
            return None;
        }
        let dropped = self.multiplier != BASE_MULTIPLIER;
        self.kills_in_window = 0;
        self.multiplier = BASE_MULTIPLIER;
        dropped.then_some(BASE_MULTIPLIER)
    }

    /// Count a kill at `now` and extend the window.
    ///
    /// Returns the new multiplier when it changed. The kill that reaches the
    /// threshold is already scored at the raised multiplier.
    pub fn register_kill(&mut self, now: f64) -> Option<u32> {
        self.kills_in_window += 1;
        self.window_expires_at = now + COMBO_WINDOW_SECS;
        if self.kills_in_window >= COMBO_KILL_THRESHOLD && self.multiplier != COMBO_MULTIPLIER {
            self.multiplier = COMBO_MULTIPLIER;
            return Some(COMBO_MULTIPLIER);
        }
        None
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Running score for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u64,
}

impl ScoreState {
    /// Add `base * multiplier` points and return the amount awarded.
    pub fn award(&mut self, base: u64, multiplier: u32) -> u64 {
        let points = base * u64::from(multiplier);
        self.score = self.score.saturating_add(points);
        points
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
