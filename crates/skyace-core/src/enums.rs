//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Behavioral/visual kind of a target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetVariant {
    /// Flies straight, one hit.
    #[default]
    Standard,
    /// Drifts laterally toward the craft, one hit.
    Homing,
    /// Large and slow to kill: three hits, bigger radius, 10x points.
    Heavy,
}

/// Color tag the presentation layer maps to a material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTag {
    #[default]
    Yellow,
    Cyan,
    Magenta,
}

impl ColorTag {
    /// RGB hex value (0xRRGGBB).
    pub fn hex(self) -> u32 {
        match self {
            ColorTag::Yellow => 0xffcc00,
            ColorTag::Cyan => 0x00ffff,
            ColorTag::Magenta => 0xff00ff,
        }
    }
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first StartRun.
    #[default]
    Ready,
    Active,
    Paused,
    /// Run ended by a collision. Entities are frozen until the next StartRun.
    GameOver,
}
