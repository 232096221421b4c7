//! Simulation constants and tuning parameters.
//!
//! Units are arbitrary world units; the craft flies along -z, targets come
//! toward the camera along +z.

/// Frame rate the per-frame smoothing factors were tuned at (Hz).
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Largest frame delta the engine will integrate in one tick (seconds).
/// Longer stalls (debugger, window drag) are truncated to this.
pub const MAX_FRAME_DT: f64 = 0.25;

/// Upper bound for `SetTimeScale`.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Craft ---

/// Craft position at the start of each run.
pub const CRAFT_SPAWN_X: f32 = 0.0;
pub const CRAFT_SPAWN_Y: f32 = 10.0;
pub const CRAFT_SPAWN_Z: f32 = 0.0;

/// Lateral reach: steering x of ±1 maps to ±50 units.
pub const CRAFT_LATERAL_RANGE: f32 = 50.0;

/// Vertical reach: steering y of ±1 maps to ±25 units around the cruise altitude.
pub const CRAFT_VERTICAL_RANGE: f32 = 25.0;

/// Altitude the craft settles at with neutral steering.
pub const CRAFT_CRUISE_ALTITUDE: f32 = 12.0;

/// Per-reference-frame smoothing factor for craft position.
pub const CRAFT_POSITION_SMOOTHING: f32 = 0.1;

/// Per-reference-frame smoothing factor for bank and pitch.
pub const CRAFT_ATTITUDE_SMOOTHING: f32 = 0.08;

/// Bank at full lateral steering (radians, 45°).
pub const CRAFT_MAX_BANK: f32 = std::f32::consts::FRAC_PI_4;

/// Pitch at full vertical steering (radians, 22.5°).
pub const CRAFT_MAX_PITCH: f32 = std::f32::consts::FRAC_PI_8;

// --- Projectiles ---

/// Seconds between auto-fire volleys (120 ms).
pub const FIRE_INTERVAL_SECS: f64 = 0.120;

/// Lateral offset of each gun from the craft center.
pub const GUN_OFFSET_X: f32 = 3.0;

/// Projectile forward speed (units/s, toward -z).
pub const PROJECTILE_SPEED: f32 = 1000.0;

/// Projectiles past this depth are returned to the pool.
pub const PROJECTILE_EXPIRE_Z: f32 = -2000.0;

// --- Targets ---

/// Seconds between target spawns (350 ms).
pub const SPAWN_INTERVAL_SECS: f64 = 0.350;

/// Spawn band: x uniform in [-TARGET_SPAWN_HALF_WIDTH, TARGET_SPAWN_HALF_WIDTH].
pub const TARGET_SPAWN_HALF_WIDTH: f32 = 60.0;

/// Spawn band: y uniform in [TARGET_SPAWN_MIN_Y, TARGET_SPAWN_MAX_Y).
pub const TARGET_SPAWN_MIN_Y: f32 = 5.0;
pub const TARGET_SPAWN_MAX_Y: f32 = 50.0;

/// Depth targets spawn at.
pub const TARGET_SPAWN_Z: f32 = -1500.0;

/// Target approach speed (units/s, toward +z).
pub const TARGET_SPEED: f32 = 350.0;

/// Visual spin rate (radians/s). No effect on collision.
pub const TARGET_SPIN_RATE: f32 = 2.0;

/// Targets past this depth have flown by the craft and despawn unharmed.
pub const TARGET_DESPAWN_Z: f32 = 100.0;

/// Per-reference-frame lateral correction of Homing targets toward the craft.
pub const HOMING_CORRECTION: f32 = 0.04;

/// Variant thresholds for a single uniform draw r in [0, 1).
pub const HEAVY_ROLL_THRESHOLD: f64 = 0.9;
pub const HOMING_ROLL_THRESHOLD: f64 = 0.7;

/// Hit radius for Heavy targets (projectile and craft checks).
pub const HEAVY_HIT_RADIUS: f32 = 10.0;

/// Hit radius for Standard and Homing targets.
pub const LIGHT_HIT_RADIUS: f32 = 6.0;

pub const HEAVY_HIT_POINTS: u32 = 3;
pub const LIGHT_HIT_POINTS: u32 = 1;

pub const HEAVY_POINTS: u64 = 1000;
pub const LIGHT_POINTS: u64 = 100;

// --- Combo ---

/// Combo window length after each kill (seconds).
pub const COMBO_WINDOW_SECS: f64 = 2.0;

/// Kills inside one window needed to raise the multiplier.
pub const COMBO_KILL_THRESHOLD: u32 = 5;

/// Multiplier outside a combo.
pub const BASE_MULTIPLIER: u32 = 1;

/// Multiplier once the combo threshold is reached.
pub const COMBO_MULTIPLIER: u32 = 2;

// --- Explosions ---

/// Particles per explosion.
pub const EXPLOSION_PARTICLE_COUNT: usize = 50;

/// Max particle speed per axis (units/s); components are uniform in [-max, max].
pub const EXPLOSION_PARTICLE_SPEED: f32 = 90.0;

/// Life drained per second; life starts at 1.0.
pub const EXPLOSION_DECAY_RATE: f32 = 2.2;
