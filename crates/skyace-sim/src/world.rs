//! Entity storage for one run.
//!
//! Projectiles and targets live in pooled active sets; explosions are short
//! lived and simply dropped when they fade.

use skyace_core::components::{Craft, Explosion, Projectile, Target};

/// Everything that moves.
#[derive(Debug, Clone, Default)]
pub struct World {
    pub craft: Craft,
    pub projectiles: crate::pool::ActiveSet<Projectile>,
    pub targets: crate::pool::ActiveSet<Target>,
    pub explosions: Vec<Explosion>,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }
}
