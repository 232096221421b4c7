//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the world, processes player commands, runs all
//! systems once per host frame, and produces `GameSnapshot`s. Completely
//! headless and driven by an injected frame delta, enabling deterministic
//! testing.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyace_core::commands::PlayerCommand;
use skyace_core::constants::{MAX_FRAME_DT, MAX_TIME_SCALE};
use skyace_core::enums::GamePhase;
use skyace_core::events::SimEvent;
use skyace_core::state::GameSnapshot;
use skyace_core::types::{SimTime, SteeringInput};

use crate::clock::Clock;
use crate::combo::{ComboState, ScoreState};
use crate::systems;
use crate::systems::combat::CombatOutcome;
use crate::systems::spawner::SpawnTimers;
use crate::world::World;

pub use crate::config::SimConfig;

/// The simulation engine. Owns the world and all run state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    steering: SteeringInput,
    command_queue: VecDeque<PlayerCommand>,
    events: Vec<SimEvent>,
    timers: SpawnTimers,
    combo: ComboState,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            time_scale: config.time_scale.clamp(0.0, MAX_TIME_SCALE),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            steering: SteeringInput::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
            timers: SpawnTimers::default(),
            combo: ComboState::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Replace the steering sample. Latest value wins; out-of-range input is clamped.
    pub fn set_steering(&mut self, input: SteeringInput) {
        self.steering = input.clamped();
    }

    /// Advance the simulation by one frame of `dt` seconds and return the resulting snapshot.
    pub fn tick(&mut self, dt: f64) -> GameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            let dt = sanitize_dt(dt) * self.time_scale;
            self.run_systems(dt);
            self.time.advance(dt);
            log::trace!(
                "tick {}: {} projectiles, {} targets, {} explosions",
                self.time.tick,
                self.world.projectiles.len(),
                self.world.targets.len(),
                self.world.explosions.len()
            );
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.combo,
            &self.score,
            events,
        )
    }

    /// Advance by whatever the clock reports since its last reading.
    pub fn tick_with(&mut self, clock: &mut impl Clock) -> GameSnapshot {
        let dt = clock.delta_secs();
        self.tick(dt)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current run time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn steering(&self) -> SteeringInput {
        self.steering
    }

    pub fn score(&self) -> u64 {
        self.score.score
    }

    pub fn combo(&self) -> &ComboState {
        &self.combo
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scripted scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => self.start_run(),
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = if scale.is_finite() {
                    scale.clamp(0.0, MAX_TIME_SCALE)
                } else {
                    1.0
                };
            }
        }
    }

    /// Flush the previous run and begin a new one.
    fn start_run(&mut self) {
        systems::cleanup::flush_run(&mut self.world);
        self.combo.reset();
        self.score.reset();
        self.timers = SpawnTimers::default();
        self.time = SimTime::default();
        self.phase = GamePhase::Active;
        self.events.push(SimEvent::RunStarted);
        log::info!("run started");
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        let now = self.time.elapsed_secs;
        let dt = dt as f32;

        // 1. Craft steering
        systems::steering::run(&mut self.world.craft, self.steering, dt);
        // 2. Auto-fire and target spawns
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.timers,
            &self.config,
            now,
        );
        // 3. Combo window expiry
        if let Some(multiplier) = self.combo.expire(now) {
            log::debug!("combo lost");
            self.events.push(SimEvent::ComboChanged { multiplier });
        }
        // 4. Projectile flight and expiry
        systems::movement::advance_projectiles(&mut self.world, dt);
        // 5. Target flight, hits, craft impact, fly-by despawn
        let outcome = systems::combat::run(
            &mut self.world,
            &mut self.rng,
            &mut self.combo,
            &mut self.score,
            &mut self.events,
            now,
            dt,
        );
        // 6. Explosion aging
        systems::explosions::run(&mut self.world.explosions, dt);

        if outcome == CombatOutcome::CraftDestroyed {
            self.phase = GamePhase::GameOver;
        }
    }
}

/// Negative or non-finite deltas count as zero; long stalls are truncated.
fn sanitize_dt(dt: f64) -> f64 {
    if dt.is_finite() && dt > 0.0 {
        dt.min(MAX_FRAME_DT)
    } else {
        0.0
    }
}
