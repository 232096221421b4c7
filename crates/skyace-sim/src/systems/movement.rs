//! Kinematic advance for projectiles and targets.

use skyace_core::components::Target;
use skyace_core::constants::*;
use skyace_core::profiles::get_profile;
use skyace_core::types::frame_alpha;

use crate::world::World;

/// Fly every projectile forward and return the ones past the far bound to the pool.
pub fn advance_projectiles(world: &mut World, dt: f32) {
    for i in (0..world.projectiles.len()).rev() {
        let projectile = world.projectiles.get_at_mut(i);
        projectile.position.z -= projectile.speed * dt;
        if projectile.position.z < PROJECTILE_EXPIRE_Z {
            world.projectiles.despawn_at(i);
        }
    }
}

/// Bring a target toward the camera, spin it, and steer Homing targets
/// laterally toward `craft_x`.
pub fn advance_target(target: &mut Target, craft_x: f32, dt: f32) {
    target.position.z += TARGET_SPEED * dt;
    target.spin = (target.spin + TARGET_SPIN_RATE * dt) % std::f32::consts::TAU;
    if get_profile(target.variant).homing {
        target.position.x += (craft_x - target.position.x) * frame_alpha(HOMING_CORRECTION, dt);
    }
}
