//! Collision and combat resolution.
//!
//! Targets are processed in reverse active index so they can be removed in
//! place. For each target, projectiles are scanned in ascending active index
//! and the first one inside the hit radius takes the hit. No target is hit by
//! more than one projectile per tick, and there is no nearest-projectile
//! selection.

use glam::Vec3;
use rand_chacha::ChaCha8Rng;

use skyace_core::constants::TARGET_DESPAWN_Z;
use skyace_core::events::SimEvent;
use skyace_core::profiles::get_profile;

use crate::combo::{ComboState, ScoreState};
use crate::systems::{explosions, movement, snapshot};
use crate::world::World;

/// Result of a combat pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatOutcome {
    Continue,
    /// The craft flew into a target. The run is over.
    CraftDestroyed,
}

/// Move every target, resolve projectile hits and craft impacts, and despawn
/// targets that flew past the craft.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    combo: &mut ComboState,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
    now: f64,
    dt: f32,
) -> CombatOutcome {
    let craft_position = world.craft.position;

    for i in (0..world.targets.len()).rev() {
        let target = world.targets.get_at_mut(i);
        movement::advance_target(target, craft_position.x, dt);
        let position = target.position;
        let profile = get_profile(target.variant);

        if let Some(j) = first_hit(world, position, profile.hit_radius) {
            world.projectiles.despawn_at(j);
            let target = world.targets.get_at_mut(i);
            target.hit_points = target.hit_points.saturating_sub(1);
            if target.hit_points == 0 {
                destroy_target_at(world, i, rng, combo, score, events, now);
                continue;
            }
        }

        if position.distance(craft_position) < profile.hit_radius {
            let collided_with = snapshot::target_view(world.targets.id_at(i), world.targets.get_at(i));
            log::info!(
                "craft destroyed by {:?} at {:?}, final score {}",
                collided_with.variant,
                position,
                score.score
            );
            events.push(SimEvent::GameOver {
                final_score: score.score,
                collided_with,
            });
            return CombatOutcome::CraftDestroyed;
        }

        if position.z > TARGET_DESPAWN_Z {
            world.targets.despawn_at(i);
        }
    }

    CombatOutcome::Continue
}

/// Active index of the first projectile within `radius` of `position`.
fn first_hit(world: &World, position: Vec3, radius: f32) -> Option<usize> {
    (0..world.projectiles.len())
        .find(|&j| world.projectiles.get_at(j).position.distance(position) < radius)
}

/// Release a dead target, spawn its explosion, and score the kill.
fn destroy_target_at(
    world: &mut World,
    index: usize,
    rng: &mut ChaCha8Rng,
    combo: &mut ComboState,
    score: &mut ScoreState,
    events: &mut Vec<SimEvent>,
    now: f64,
) {
    let target = *world.targets.get_at(index);
    let profile = get_profile(target.variant);

    explosions::spawn(&mut world.explosions, rng, target.position, profile.color);
    world.targets.despawn_at(index);

    if let Some(multiplier) = combo.register_kill(now) {
        log::debug!("combo x{multiplier} after {} kills", combo.kills_in_window());
        events.push(SimEvent::ComboChanged { multiplier });
    }

    let points = score.award(profile.points, combo.multiplier());
    log::debug!("{:?} destroyed for {points} points", target.variant);
    events.push(SimEvent::TargetDestroyed {
        variant: target.variant,
        position: target.position,
        points,
    });
    events.push(SimEvent::ScoreChanged { score: score.score });
}
