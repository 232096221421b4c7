//! Neon Sky Ace headless host.
//!
//! This crate runs the simulation on its own thread at a fixed frame rate and
//! exposes it to a driver through a command channel, a steering cell, and a
//! latest-snapshot cell.

pub mod control;
pub mod game_loop;
pub mod input;
pub mod state;

pub use skyace_core as core;
