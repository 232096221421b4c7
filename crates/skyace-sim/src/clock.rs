//! Frame clocks.
//!
//! The engine never reads wall time itself. The host injects a `Clock` and
//! the engine integrates whatever delta it reports, so tests can replay a
//! run exactly with a fixed step.

use std::time::{Duration, Instant};

/// Source of per-frame time deltas.
pub trait Clock {
    /// Seconds since the previous call (or since construction on the first call).
    fn delta_secs(&mut self) -> f64;
}

/// Wall clock backed by `std::time::Instant`.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    last: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn delta_secs(&mut self) -> f64 {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        dt.as_secs_f64()
    }
}

/// Deterministic clock that reports the same step every frame.
#[derive(Debug, Clone, Copy)]
pub struct FixedStepClock {
    step: f64,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step: step.as_secs_f64(),
        }
    }

    /// Step for the given frame rate.
    pub fn from_rate(hz: u32) -> Self {
        Self {
            step: 1.0 / hz.max(1) as f64,
        }
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Clock for FixedStepClock {
    fn delta_secs(&mut self) -> f64 {
        self.step
    }
}
