//! Game state snapshot: the complete visible state handed to the presentation layer each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{SimTime, SlotId};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub craft: CraftView,
    pub projectiles: Vec<ProjectileView>,
    pub targets: Vec<TargetView>,
    pub explosions: Vec<ExplosionView>,
    pub score: u64,
    pub multiplier: u32,
    /// Events produced by this tick only.
    pub events: Vec<SimEvent>,
}

impl GameSnapshot {
    /// The game-over event of this tick, if the run ended.
    pub fn game_over(&self) -> Option<&SimEvent> {
        self.events
            .iter()
            .find(|e| matches!(e, SimEvent::GameOver { .. }))
    }
}

/// Craft pose.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CraftView {
    pub position: Vec3,
    pub bank: f32,
    pub pitch: f32,
}

/// An active projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub slot: SlotId,
    pub position: Vec3,
}

/// An active target. Renderers resolve `color` with `ColorTag::hex`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetView {
    pub slot: SlotId,
    pub variant: TargetVariant,
    pub position: Vec3,
    /// Visual spin around the vertical axis (radians).
    pub spin: f32,
    pub scale: f32,
    pub color: ColorTag,
    pub hit_points: u32,
}

/// A live explosion. `color` resolves with `ColorTag::hex`; `opacity` fades from 1 to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub color: ColorTag,
    /// 0.0 (gone) to 1.0 (fresh).
    pub opacity: f32,
    pub particles: Vec<Vec3>,
}
