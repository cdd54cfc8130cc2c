//! Game state snapshot: the complete visible state handed to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::components::PlatformKind;
use crate::enums::*;
use crate::error::LevelDiagnostic;
use crate::events::GameEvent;
use crate::types::{Aabb, Rgb, SimTime};

/// Complete game state broadcast after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Index of the level being played (or last played).
    pub level: usize,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub boss: Option<BossView>,
    pub projectiles: Vec<ProjectileView>,
    pub platforms: Vec<PlatformView>,
    pub powerups: Vec<PowerupView>,
    pub hazards: Vec<HazardView>,
    pub particles: Vec<ParticleView>,
    /// Camera x offset in world units.
    pub scroll_x: f64,
    pub goal_x: f64,
    pub score: i64,
    pub lives: u32,
    pub events: Vec<GameEvent>,
    /// Problems found while ingesting the current level grid.
    pub diagnostics: Vec<LevelDiagnostic>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub rect: Aabb,
    pub mode: Mode,
    pub health: i32,
    pub max_health: i32,
    pub has_weapon: bool,
    pub weapon_power: u8,
    /// Ticks left on the boosted weapon.
    pub powerup_remaining: u32,
    pub invincible: bool,
    pub frame: u32,
    pub facing: Facing,
    /// 0.0..1.0 while transforming, otherwise None.
    pub transform_progress: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub rect: Aabb,
    pub archetype: EnemyArchetype,
    pub direction: Facing,
    pub frame: u32,
    pub health: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub rect: Aabb,
    pub health: i32,
    pub max_health: i32,
    pub phase: BossPhase,
    pub frame: u32,
    pub invincible: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub rect: Aabb,
    pub owner: ProjectileOwner,
    pub kind: ProjectileKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformView {
    pub rect: Aabb,
    pub kind: PlatformKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerupView {
    pub rect: Aabb,
    pub kind: PowerupKind,
    /// Vertical draw offset of the bob animation.
    pub bob_offset: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HazardView {
    pub rect: Aabb,
    pub lifetime: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Rgb,
    /// 1.0 when fresh, 0.0 when expired.
    pub alpha: f64,
}
