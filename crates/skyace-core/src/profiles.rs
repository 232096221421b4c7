//! Variant-specific target parameters.
//!
//! Consolidates everything that is a pure function of `TargetVariant`.

use crate::constants::*;
use crate::enums::{ColorTag, TargetVariant};

/// Static profile for a target variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetProfile {
    pub hit_points: u32,
    /// Collision radius for projectile hits and craft impact.
    pub hit_radius: f32,
    /// Base points awarded on destruction (before the combo multiplier).
    pub points: u64,
    /// Uniform render scale.
    pub scale: f32,
    pub color: ColorTag,
    /// Whether the target steers toward the craft.
    pub homing: bool,
}

/// Get the profile for a given variant.
pub fn get_profile(variant: TargetVariant) -> TargetProfile {
    match variant {
        TargetVariant::Standard => TargetProfile {
            hit_points: LIGHT_HIT_POINTS,
            hit_radius: LIGHT_HIT_RADIUS,
            points: LIGHT_POINTS,
            scale: 1.4,
            color: ColorTag::Yellow,
            homing: false,
        },
        TargetVariant::Homing => TargetProfile {
            hit_points: LIGHT_HIT_POINTS,
            hit_radius: LIGHT_HIT_RADIUS,
            points: LIGHT_POINTS,
            scale: 1.8,
            color: ColorTag::Cyan,
            homing: true,
        },
        TargetVariant::Heavy => TargetProfile {
            hit_points: HEAVY_HIT_POINTS,
            hit_radius: HEAVY_HIT_RADIUS,
            points: HEAVY_POINTS,
            scale: 4.0,
            color: ColorTag::Magenta,
            homing: false,
        },
    }
}

/// Map a uniform draw in [0, 1) to a variant.
pub fn variant_for_roll(r: f64) -> TargetVariant {
    if r > HEAVY_ROLL_THRESHOLD {
        TargetVariant::Heavy
    } else if r > HOMING_ROLL_THRESHOLD {
        TargetVariant::Homing
    } else {
        TargetVariant::Standard
    }
}
