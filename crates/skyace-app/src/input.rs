//! Steering input shared between the host thread and the game loop.

use std::sync::{Arc, Mutex};

use skyace_core::types::SteeringInput;

/// Latest-value steering cell. Writers overwrite, the game loop reads once per
/// frame. There is no queue: intermediate samples between frames are dropped.
#[derive(Debug, Clone, Default)]
pub struct SteeringCell {
    inner: Arc<Mutex<SteeringInput>>,
}

impl SteeringCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new sample. Components are clamped to [-1, 1].
    pub fn set(&self, input: SteeringInput) -> Result<(), String> {
        let mut lock = self.inner.lock().map_err(|e| e.to_string())?;
        *lock = input.clamped();
        Ok(())
    }

    /// Read the current sample. A poisoned lock reads as neutral steering.
    pub fn get(&self) -> SteeringInput {
        self.inner
            .lock()
            .map(|lock| *lock)
            .unwrap_or_default()
    }
}
