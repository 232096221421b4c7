//! Cleanup system: flushes a finished run so nothing leaks into the next one.

use skyace_core::components::Craft;

use crate::world::World;

/// Return all projectiles and targets to their pools, drop all explosions,
/// and put the craft back at its spawn pose. Pools keep their capacity.
pub fn flush_run(world: &mut World) {
    world.projectiles.clear();
    world.targets.clear();
    world.explosions.clear();
    world.craft = Craft::default();
}
