//! Host state shared between the control functions and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skyace_core::commands::PlayerCommand;
use skyace_core::state::GameSnapshot;

use crate::input::SteeringCell;

/// Commands sent from the host to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state.
///
/// `mpsc::Sender` is not `Sync`, so it sits behind a `Mutex` along with the
/// loop's join handle. Both are `None` until `start_simulation` runs.
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Game loop thread, joined on shutdown.
    pub loop_thread: Mutex<Option<JoinHandle<()>>>,
    /// Latest snapshot for polling. Updated by the game loop after each frame.
    pub latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
    /// Steering sample read by the game loop once per frame.
    pub steering: SteeringCell,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            loop_thread: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            steering: SteeringCell::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a game loop thread has been started and not yet stopped.
    pub fn is_running(&self) -> bool {
        self.command_tx
            .lock()
            .map(|tx| tx.is_some())
            .unwrap_or(false)
    }
}
