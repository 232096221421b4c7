//! Fundamental simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::REFERENCE_FRAME_RATE;

/// Simulation time tracking for the current run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Active ticks since the run started.
    pub tick: u64,
    /// Elapsed run time in seconds (sum of sanitized frame deltas).
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Identity of an instance inside an object pool.
///
/// Stable for as long as the instance is active, so the presentation layer
/// can use it as a render handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotId(pub u32);

impl SlotId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 2D steering sample. Both axes are nominally in [-1, 1].
///
/// x: -1 = full left, +1 = full right.
/// y: -1 = full down, +1 = full up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SteeringInput {
    pub x: f32,
    pub y: f32,
}

impl SteeringInput {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp both axes into [-1, 1]. NaN becomes 0.
    pub fn clamped(self) -> Self {
        Self {
            x: clamp_axis(self.x),
            y: clamp_axis(self.y),
        }
    }
}

fn clamp_axis(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(-1.0, 1.0)
    }
}

/// Convert a per-frame lerp factor tuned at `REFERENCE_FRAME_RATE` into the
/// equivalent factor for a frame of `dt` seconds.
///
/// `1 - (1 - f)^(dt * rate)` keeps the exponential decay identical at any frame rate.
pub fn frame_alpha(per_frame: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - per_frame).powf(dt * REFERENCE_FRAME_RATE)
}
