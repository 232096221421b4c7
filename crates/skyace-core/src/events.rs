//! Events emitted by the simulation for UI and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::TargetVariant;
use crate::state::TargetView;

/// One-shot notifications produced during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A run started; score and multiplier are back to their initial values.
    RunStarted,
    /// Score changed (always an increase during a run).
    ScoreChanged { score: u64 },
    /// Combo multiplier changed.
    ComboChanged { multiplier: u32 },
    /// A target lost its last hit point.
    TargetDestroyed {
        variant: TargetVariant,
        position: Vec3,
        points: u64,
    },
    /// The craft hit a target. Emitted once per run.
    GameOver {
        final_score: u64,
        /// The target the craft flew into, still intact.
        collided_with: TargetView,
    },
}
