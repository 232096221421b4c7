//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.
//! Steering is not a command: it is a latest-value sample set directly on the engine.

use serde::{Deserialize, Serialize};

/// All discrete player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new run, or restart after game over. Flushes all entities.
    StartRun,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = frozen).
    SetTimeScale { scale: f64 },
}
