//! Craft steering system.
//!
//! Eases the craft toward the pose implied by the latest steering sample.
//! Smoothing is an exponential decay in time, so the craft follows the same
//! path at 30 Hz as at 144 Hz.

use skyace_core::components::Craft;
use skyace_core::constants::*;
use skyace_core::types::{frame_alpha, SteeringInput};

/// Pose the craft is easing toward for a given input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteeringGoal {
    pub x: f32,
    pub y: f32,
    pub bank: f32,
    pub pitch: f32,
}

/// Map a steering sample to the craft's goal pose. Input is clamped first.
pub fn goal_for(input: SteeringInput) -> SteeringGoal {
    let input = input.clamped();
    SteeringGoal {
        x: input.x * CRAFT_LATERAL_RANGE,
        y: input.y * CRAFT_VERTICAL_RANGE + CRAFT_CRUISE_ALTITUDE,
        bank: -input.x * CRAFT_MAX_BANK,
        pitch: -input.y * CRAFT_MAX_PITCH,
    }
}

/// Advance the craft pose by `dt` seconds.
pub fn run(craft: &mut Craft, input: SteeringInput, dt: f32) {
    let goal = goal_for(input);
    let move_alpha = frame_alpha(CRAFT_POSITION_SMOOTHING, dt);
    let turn_alpha = frame_alpha(CRAFT_ATTITUDE_SMOOTHING, dt);

    craft.position.x += (goal.x - craft.position.x) * move_alpha;
    craft.position.y += (goal.y - craft.position.y) * move_alpha;
    craft.bank += (goal.bank - craft.bank) * turn_alpha;
    craft.pitch += (goal.pitch - craft.pitch) * turn_alpha;
}
