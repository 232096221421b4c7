//! Game loop thread. Runs the simulation engine at a fixed frame rate and
//! publishes snapshots.
//!
//! The engine is created inside this thread and never shared. Commands arrive
//! via an `mpsc` channel, steering via the latest-value `SteeringCell`, and the
//! snapshot of every frame replaces the previous one in shared state.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use skyace_core::constants::REFERENCE_FRAME_RATE;
use skyace_core::state::GameSnapshot;
use skyace_sim::clock::MonotonicClock;
use skyace_sim::engine::{SimConfig, SimulationEngine};

use crate::input::SteeringCell;
use crate::state::GameLoopCommand;

/// Default host frame rate.
pub const DEFAULT_FPS: u32 = REFERENCE_FRAME_RATE as u32;

/// Wall-clock duration of one frame at `fps`.
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(fps.max(1)))
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and the thread handle.
pub fn spawn_game_loop(
    config: SimConfig,
    fps: u32,
    steering: SteeringCell,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>), String> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyace-game-loop".into())
        .spawn(move || {
            run_game_loop(config, fps, cmd_rx, &steering, &latest_snapshot);
        })
        .map_err(|e| format!("Failed to spawn game loop thread: {e}"))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    fps: u32,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    steering: &SteeringCell,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut clock = MonotonicClock::new();
    let frame = frame_duration(fps);
    let mut next_frame_time = Instant::now();

    log::debug!("game loop running at {fps} fps");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&cmd_rx, &mut engine) {
            log::debug!("game loop stopped at tick {}", engine.time().tick);
            return;
        }

        // 2. Latest steering sample, once per frame
        engine.set_steering(steering.get());

        // 3. Advance by the measured frame delta
        let snapshot = engine.tick_with(&mut clock);

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until next frame
        next_frame_time += frame;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > frame * 2 {
            // Too far behind. Reset instead of bursting to catch up.
            log::warn!(
                "game loop overran by {:?}, resetting frame schedule",
                now - next_frame_time
            );
            next_frame_time = now;
        }
    }
}

/// Forward queued commands to the engine. Returns `false` when the loop should stop.
fn drain_commands(
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    engine: &mut SimulationEngine,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyace_core::commands::PlayerCommand;
    use skyace_core::enums::GamePhase;
    use skyace_core::types::SteeringInput;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut engine = SimulationEngine::new(SimConfig::default());

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        assert!(drain_commands(&rx, &mut engine));
        assert_eq!(engine.tick(1.0 / 60.0).phase, GamePhase::Active);

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(!drain_commands(&rx, &mut engine));
        assert_eq!(engine.tick(1.0 / 60.0).phase, GamePhase::Paused);
    }

    #[test]
    fn test_disconnect_stops_loop() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();
        let mut engine = SimulationEngine::new(SimConfig::default());
        drop(tx);
        assert!(!drain_commands(&rx, &mut engine));
    }

    #[test]
    fn test_snapshot_serialization_under_3ms() {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.queue_command(PlayerCommand::StartRun);

        // Run enough frames to populate entities and a few explosions
        for _ in 0..300 {
            engine.tick(1.0 / 60.0);
        }

        let snapshot = engine.tick(1.0 / 60.0);
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(3),
            "Snapshot serialization took {:?}, should be <3ms",
            elapsed
        );
        assert!(!json.is_empty());
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let steering = SteeringCell::new();
        steering.set(SteeringInput::new(1.0, 0.0)).unwrap();

        let (tx, handle) =
            spawn_game_loop(SimConfig::default(), 120, steering, latest.clone()).unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::StartRun))
            .unwrap();
        std::thread::sleep(Duration::from_millis(200));
        tx.send(GameLoopCommand::Shutdown).unwrap();
        handle.join().unwrap();

        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert!(snapshot.time.tick > 0);
        assert!(snapshot.craft.position.x > 0.0, "Steering reached the engine");
    }

    #[test]
    fn test_frame_duration() {
        // 60 Hz = 16.666ms per frame
        assert_eq!(frame_duration(60).as_nanos(), 1_000_000_000u128 / 60);
        assert_eq!(frame_duration(0), Duration::from_secs(1));
    }
}
