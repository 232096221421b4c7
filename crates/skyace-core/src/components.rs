//! Simulation entities.
//!
//! Entities are plain data structs with no behavior.
//! Game logic lives in systems, not here.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{CRAFT_SPAWN_X, CRAFT_SPAWN_Y, CRAFT_SPAWN_Z};
use crate::enums::{ColorTag, TargetVariant};

/// The player's craft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Craft {
    pub position: Vec3,
    /// Roll around the flight axis (radians). Positive banks left.
    pub bank: f32,
    /// Nose up/down (radians).
    pub pitch: f32,
}

impl Default for Craft {
    fn default() -> Self {
        Self {
            position: Vec3::new(CRAFT_SPAWN_X, CRAFT_SPAWN_Y, CRAFT_SPAWN_Z),
            bank: 0.0,
            pitch: 0.0,
        }
    }
}

/// A pooled projectile. All fields are rewritten on acquire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    /// Forward speed (units/s) along -z.
    pub speed: f32,
}

/// A pooled target. All fields are rewritten on acquire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub variant: TargetVariant,
    pub position: Vec3,
    pub hit_points: u32,
    /// Visual spin angle (radians).
    pub spin: f32,
}

/// One explosion particle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    /// Units per second.
    pub velocity: Vec3,
}

/// A burst of particles sharing one remaining-life scalar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub color: ColorTag,
    /// Starts at 1.0 and drains toward 0; also the fade opacity.
    pub life: f32,
    pub particles: Vec<Particle>,
}
