//! Host control surface.
//!
//! Bridges host requests to the game loop thread via channels. Every
//! function reports failure as a plain message string.

use skyace_core::commands::PlayerCommand;
use skyace_core::state::GameSnapshot;
use skyace_core::types::SteeringInput;
use skyace_sim::engine::SimConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig, fps: u32) -> Result<(), String> {
    let mut tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    if tx_lock.is_some() {
        return Err("Simulation already running".into());
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(
        config,
        fps,
        state.steering.clone(),
        state.latest_snapshot.clone(),
    )?;

    *tx_lock = Some(cmd_tx);
    let mut thread_lock = state.loop_thread.lock().map_err(|e| e.to_string())?;
    *thread_lock = Some(handle);

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), String> {
    let tx_lock = state.command_tx.lock().map_err(|e| e.to_string())?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|e| format!("Failed to send command: {}", e)),
        None => Err("Simulation not started".into()),
    }
}

/// Replace the steering sample the next frame will read.
pub fn set_steering(state: &AppState, input: SteeringInput) -> Result<(), String> {
    state.steering.set(input)
}

/// Get the latest snapshot (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameSnapshot>, String> {
    let lock = state.latest_snapshot.lock().map_err(|e| e.to_string())?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to exit.
pub fn stop_simulation(state: &AppState) -> Result<(), String> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|e| e.to_string())?
        .take()
        .ok_or_else(|| String::from("Simulation not started"))?;
    // A loop that already exited has dropped its receiver. Nothing to stop.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state.loop_thread.lock().map_err(|e| e.to_string())?.take();
    if let Some(handle) = handle {
        handle
            .join()
            .map_err(|_| String::from("Game loop thread panicked"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use skyace_core::enums::GamePhase;

    use super::*;

    #[test]
    fn test_commands_require_running_loop() {
        let state = AppState::new();
        assert!(send_command(&state, PlayerCommand::StartRun).is_err());
        assert!(stop_simulation(&state).is_err());
        assert_eq!(get_snapshot(&state).unwrap(), None);
    }

    #[test]
    fn test_start_run_stop() {
        let state = AppState::new();
        start_simulation(&state, SimConfig::default(), 120).unwrap();
        assert!(state.is_running());
        assert!(start_simulation(&state, SimConfig::default(), 120).is_err());

        send_command(&state, PlayerCommand::StartRun).unwrap();
        set_steering(&state, SteeringInput::new(-1.0, 0.5)).unwrap();
        std::thread::sleep(Duration::from_millis(200));

        stop_simulation(&state).unwrap();
        assert!(!state.is_running());

        let snapshot = get_snapshot(&state).unwrap().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.craft.position.x < 0.0);
    }
}
