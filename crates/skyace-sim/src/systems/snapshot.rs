//! Snapshot system: reads the world and builds a complete `GameSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use skyace_core::components::{Craft, Target};
use skyace_core::enums::GamePhase;
use skyace_core::events::SimEvent;
use skyace_core::profiles::get_profile;
use skyace_core::state::*;
use skyace_core::types::{SimTime, SlotId};

use crate::combo::{ComboState, ScoreState};
use crate::systems::explosions;
use crate::world::World;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    combo: &ComboState,
    score: &ScoreState,
    events: Vec<SimEvent>,
) -> GameSnapshot {
    GameSnapshot {
        time: *time,
        phase,
        craft: craft_view(&world.craft),
        projectiles: world
            .projectiles
            .iter()
            .map(|(slot, p)| ProjectileView {
                slot,
                position: p.position,
            })
            .collect(),
        targets: world
            .targets
            .iter()
            .map(|(slot, t)| target_view(slot, t))
            .collect(),
        explosions: world
            .explosions
            .iter()
            .map(|e| ExplosionView {
                color: e.color,
                opacity: explosions::opacity(e),
                particles: e.particles.iter().map(|p| p.position).collect(),
            })
            .collect(),
        score: score.score,
        multiplier: combo.multiplier(),
        events,
    }
}

pub fn craft_view(craft: &Craft) -> CraftView {
    CraftView {
        position: craft.position,
        bank: craft.bank,
        pitch: craft.pitch,
    }
}

/// Render view of a target; scale and color come from its variant.
pub fn target_view(slot: SlotId, target: &Target) -> TargetView {
    let profile = get_profile(target.variant);
    TargetView {
        slot,
        variant: target.variant,
        position: target.position,
        spin: target.spin,
        scale: profile.scale,
        color: profile.color,
        hit_points: target.hit_points,
    }
}
