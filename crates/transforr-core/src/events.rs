//! Events emitted by the simulation for audio, effects and UI feedback.
//!
//! Events are collected during a tick and drained into that tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Rgb;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player fired a shot.
    ShotFired { power: u8 },
    /// An enemy was destroyed. `color` is the base tint of its death burst.
    EnemyKilled {
        archetype: EnemyArchetype,
        x: f64,
        y: f64,
        color: Rgb,
    },
    /// An enemy raised an attack that was realised as a projectile or hazard.
    EnemyAttacked { archetype: EnemyArchetype, attack: EnemyAttack },
    /// Player lost health.
    PlayerDamaged { amount: i32, health: i32 },
    PowerupCollected { kind: PowerupKind },
    /// A breakable block shattered.
    BlockBroken { x: f64, y: f64 },
    BossHit { health: i32 },
    BossPhaseChanged { phase: BossPhase },
    BossVolley { phase: BossPhase, count: usize },
    BossDefeated,
    TransformStarted { from: Mode },
    TransformCompleted { mode: Mode },
    /// Player died; `lives_left` is after the deduction.
    LifeLost { lives_left: u32 },
    LevelStarted { level: usize },
    LevelComplete { level: usize, bonus: i64 },
    GameOver { score: i64 },
    MissionComplete { score: i64 },
}
