//! Spawning system: auto-fire volleys and incoming targets on run-time cadences.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyace_core::components::{Craft, Projectile, Target};
use skyace_core::constants::*;
use skyace_core::enums::TargetVariant;
use skyace_core::profiles::{get_profile, variant_for_roll};
use skyace_core::types::SlotId;

use crate::config::SimConfig;
use crate::world::World;

/// Cadence marks: the run time each volley and spawn was due.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SpawnTimers {
    pub last_fire_at: Option<f64>,
    pub last_spawn_at: Option<f64>,
}

impl SpawnTimers {
    fn fire_due(&self, now: f64) -> bool {
        self.last_fire_at
            .map_or(true, |last| now - last > FIRE_INTERVAL_SECS)
    }

    fn spawn_due(&self, now: f64) -> bool {
        self.last_spawn_at
            .map_or(true, |last| now - last > SPAWN_INTERVAL_SECS)
    }
}

/// Next timer mark after a cadence fired at `now`.
///
/// The mark advances by exactly one interval so the overshoot of a frame is
/// carried into the next cycle, keeping the rate independent of frame length.
/// A mark more than one interval behind `now` snaps forward instead of
/// bursting to catch up.
fn next_mark(last: Option<f64>, now: f64, interval: f64) -> f64 {
    match last {
        Some(last) if now - (last + interval) <= interval => last + interval,
        _ => now,
    }
}

/// Fire and spawn if their intervals have elapsed. At most one of each per tick.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    timers: &mut SpawnTimers,
    config: &SimConfig,
    now: f64,
) {
    if config.auto_fire && timers.fire_due(now) {
        fire_volley(world);
        timers.last_fire_at = Some(next_mark(timers.last_fire_at, now, FIRE_INTERVAL_SECS));
    }

    if config.spawn_targets && timers.spawn_due(now) {
        spawn_target(world, rng);
        timers.last_spawn_at = Some(next_mark(timers.last_spawn_at, now, SPAWN_INTERVAL_SECS));
    }
}

/// Fire one projectile from each gun, symmetric about the craft.
pub fn fire_volley(world: &mut World) -> [SlotId; 2] {
    let craft = world.craft;
    [
        spawn_projectile(world, gun_muzzle(&craft, -GUN_OFFSET_X)),
        spawn_projectile(world, gun_muzzle(&craft, GUN_OFFSET_X)),
    ]
}

fn gun_muzzle(craft: &Craft, offset_x: f32) -> Vec3 {
    craft.position + Vec3::new(offset_x, 0.0, 0.0)
}

/// Acquire a projectile at `position`, flying forward.
pub fn spawn_projectile(world: &mut World, position: Vec3) -> SlotId {
    let (id, projectile) = world.projectiles.spawn();
    *projectile = Projectile {
        position,
        speed: PROJECTILE_SPEED,
    };
    id
}

/// Acquire a target with a random variant at a random point of the spawn band.
pub fn spawn_target(world: &mut World, rng: &mut ChaCha8Rng) -> SlotId {
    let variant = variant_for_roll(rng.gen::<f64>());
    let position = Vec3::new(
        rng.gen_range(-TARGET_SPAWN_HALF_WIDTH..=TARGET_SPAWN_HALF_WIDTH),
        rng.gen_range(TARGET_SPAWN_MIN_Y..TARGET_SPAWN_MAX_Y),
        TARGET_SPAWN_Z,
    );
    place_target(world, variant, position)
}

/// Acquire a target of a given variant at a given position.
pub fn place_target(world: &mut World, variant: TargetVariant, position: Vec3) -> SlotId {
    let (id, target) = world.targets.spawn();
    *target = Target {
        variant,
        position,
        hit_points: get_profile(variant).hit_points,
        spin: 0.0,
    };
    id
}
