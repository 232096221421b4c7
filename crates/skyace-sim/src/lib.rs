//! Simulation engine for SKYACE.
//!
//! Owns the pooled entity sets, runs systems once per host frame,
//! and produces `GameSnapshot`s for the presentation layer.

pub mod clock;
pub mod combo;
pub mod config;
pub mod engine;
pub mod pool;
pub mod systems;
pub mod world;

pub use skyace_core as core;
pub use engine::SimulationEngine;
