//! Entity components and level furniture.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems and behaviour FSMs, not components.
//! Every dynamic entity also carries a `Body` (see `types.rs`).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Aabb, Body, Rgb};

/// Enemy state. One struct for every archetype; the archetype tag selects
/// which timers are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub archetype: EnemyArchetype,
    pub health: i32,
    /// Current travel direction.
    pub direction: Facing,
    /// Ticks alive; drives animation and movement cycles.
    pub animation_timer: u32,
    /// Ticks alive; attacks fire on multiples of the archetype interval.
    pub attack_timer: u32,
    /// Mantis only: ticks until the next leap is allowed.
    pub jump_cooldown: u32,
    /// Mantis only: airborne after a leap.
    pub leaping: bool,
    /// Current animation frame index.
    pub frame: u32,
}

/// In-flight projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: ProjectileOwner,
    pub kind: ProjectileKind,
    pub damage: i32,
    /// Webs scale the victim's horizontal velocity on hit.
    pub slow_effect: bool,
}

/// Collectible power-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    pub kind: PowerupKind,
    pub collected: bool,
    /// Phase of the visual bob (radians).
    pub bob_phase: f64,
}

/// Sticky goo left by caterpillars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickyTrail {
    /// Remaining ticks before the trail dries up.
    pub lifetime: u32,
    pub damage: i32,
}

/// Cosmetic particle. Never affects gameplay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub color: Rgb,
    pub size: f64,
    pub age: u32,
    pub lifespan: u32,
}

/// Platform behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlatformKind {
    /// Solid ground or a standable ledge.
    Ground,
    /// Oscillates horizontally within `start_x ± range`.
    Moving {
        start_x: f64,
        range: f64,
        speed: f64,
        direction: Facing,
    },
    /// Solid block that shatters after enough player hits.
    Breakable { hits_remaining: i32 },
}

/// A solid rectangle of level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Aabb,
    pub kind: PlatformKind,
}

/// The level boss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub body: Body,
    pub health: i32,
    pub max_health: i32,
    pub phase: BossPhase,
    /// Ticks until the next volley.
    pub attack_timer: u32,
    pub invincible_timer: u32,
    pub animation_timer: u32,
    pub frame: u32,
}
