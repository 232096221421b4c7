//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over the world and the state they touch.
//! They do not own state; everything lives in `World` or the engine.

pub mod cleanup;
pub mod combat;
pub mod explosions;
pub mod movement;
pub mod snapshot;
pub mod spawner;
pub mod steering;
