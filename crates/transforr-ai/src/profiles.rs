//! Archetype-specific behavioural profiles.
//!
//! Consolidates per-archetype parameters for the enemy FSM and for spawning.

use transforr_core::constants::*;
use transforr_core::enums::EnemyArchetype;
use transforr_core::types::Rgb;

/// How an archetype's vertical velocity evolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalMotion {
    /// Falls under gravity.
    Gravity,
    /// Ignores gravity, bobs on a sine wave.
    Hover,
    /// Never moves vertically.
    Fixed,
}

/// Behavioural profile for an enemy archetype.
#[derive(Debug, Clone)]
pub struct EnemyProfile {
    pub width: f64,
    pub height: f64,
    pub health: i32,
    /// Base crawl / walk speed (units per tick).
    pub speed: f64,
    pub vertical: VerticalMotion,
    /// Reverses direction on wall contact.
    pub turns_at_walls: bool,
    /// Reverses direction when the ground sensor finds no floor ahead.
    pub turns_at_ledges: bool,
    /// Number of animation frames (1 = static sprite).
    pub frame_count: u32,
    /// Death burst colour range: (low, high) per channel.
    pub palette: (Rgb, Rgb),
}

/// Get the behavioural profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    match archetype {
        EnemyArchetype::Snail => EnemyProfile {
            width: 50.0,
            height: 40.0,
            health: ENEMY_BASE_HEALTH,
            speed: 0.6,
            vertical: VerticalMotion::Gravity,
            turns_at_walls: true,
            turns_at_ledges: true,
            frame_count: 1,
            palette: (Rgb(180, 60, 60), Rgb(220, 100, 100)),
        },
        EnemyArchetype::Caterpillar => EnemyProfile {
            width: 80.0,
            height: 35.0,
            health: ENEMY_BASE_HEALTH,
            speed: 0.8,
            vertical: VerticalMotion::Gravity,
            turns_at_walls: true,
            turns_at_ledges: true,
            frame_count: 8,
            palette: (Rgb(0, 150, 0), Rgb(50, 200, 50)),
        },
        EnemyArchetype::Scorpion => EnemyProfile {
            width: 80.0,
            height: 60.0,
            health: ENEMY_BASE_HEALTH,
            speed: 1.5,
            vertical: VerticalMotion::Gravity,
            turns_at_walls: true,
            turns_at_ledges: true,
            frame_count: 12,
            palette: (Rgb(100, 80, 40), Rgb(140, 120, 80)),
        },
        EnemyArchetype::Beetle => EnemyProfile {
            width: 70.0,
            height: 50.0,
            health: BEETLE_HEALTH,
            speed: 0.7,
            vertical: VerticalMotion::Gravity,
            turns_at_walls: true,
            turns_at_ledges: true,
            frame_count: 8,
            palette: (Rgb(40, 0, 0), Rgb(200, 40, 40)),
        },
        EnemyArchetype::Mantis => EnemyProfile {
            width: 60.0,
            height: 80.0,
            health: ENEMY_BASE_HEALTH,
            speed: 0.7,
            vertical: VerticalMotion::Gravity,
            turns_at_walls: false,
            turns_at_ledges: false,
            frame_count: 8,
            palette: (Rgb(140, 0, 140), Rgb(180, 0, 180)),
        },
        EnemyArchetype::Spider => EnemyProfile {
            width: 60.0,
            height: 45.0,
            health: ENEMY_BASE_HEALTH,
            speed: 0.0,
            vertical: VerticalMotion::Fixed,
            turns_at_walls: false,
            turns_at_ledges: false,
            frame_count: 1,
            palette: (Rgb(100, 80, 40), Rgb(140, 120, 80)),
        },
        EnemyArchetype::Bee => EnemyProfile {
            width: 50.0,
            height: 50.0,
            health: ENEMY_BASE_HEALTH,
            speed: 0.8,
            vertical: VerticalMotion::Hover,
            turns_at_walls: true,
            turns_at_ledges: false,
            frame_count: 8,
            palette: (Rgb(200, 170, 0), Rgb(255, 220, 40)),
        },
    }
}
