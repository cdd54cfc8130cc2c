//! Boss phase progression and volley patterns.
//!
//! Pure functions: the simulation owns the boss entity and feeds health and
//! positions in; this module decides the phase and the shape of each volley.

use std::f64::consts::TAU;

use glam::DVec2;
use rand::Rng;

use transforr_core::constants::*;
use transforr_core::enums::{BossPhase, ProjectileKind};

/// One projectile of a boss volley, before it becomes an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct BossShot {
    /// Centre of the projectile at launch.
    pub origin: DVec2,
    pub velocity: DVec2,
    pub kind: ProjectileKind,
    pub damage: i32,
    pub slow_effect: bool,
}

/// Phase for the given health. Never returns a phase below `current`.
pub fn phase_for_health(current: BossPhase, health: i32, max_health: i32) -> BossPhase {
    let fraction = if max_health > 0 {
        health as f64 / max_health as f64
    } else {
        0.0
    };

    let target = if fraction < BOSS_PHASE_3_THRESHOLD {
        BossPhase::Three
    } else if fraction < BOSS_PHASE_2_THRESHOLD {
        BossPhase::Two
    } else {
        BossPhase::One
    };

    current.max(target)
}

/// Ticks between volleys in the given phase.
pub fn volley_cooldown(phase: BossPhase) -> u32 {
    match phase {
        BossPhase::One => BOSS_PHASE_1_COOLDOWN,
        BossPhase::Two => BOSS_PHASE_2_COOLDOWN,
        BossPhase::Three => BOSS_PHASE_3_COOLDOWN,
    }
}

/// Build the volley for `phase`.
///
/// `boss_center` is the centre of the boss box; shots leave slightly below
/// it. Only phase 2 draws from `rng`.
pub fn volley<R: Rng>(
    phase: BossPhase,
    boss_center: DVec2,
    player_center: DVec2,
    rng: &mut R,
) -> Vec<BossShot> {
    let muzzle = boss_center + DVec2::new(0.0, BOSS_MUZZLE_DROP);

    match phase {
        BossPhase::One => web_fan(muzzle, player_center),
        BossPhase::Two => (0..BOSS_BURST_COUNT)
            .map(|_| {
                let angle = rng.gen_range(0.0..TAU);
                BossShot {
                    origin: muzzle,
                    velocity: DVec2::new(
                        angle.cos() * HOSTILE_SHOT_SPEED,
                        angle.sin() * BOSS_BURST_VERTICAL_SCALE,
                    ),
                    kind: ProjectileKind::Energy,
                    damage: BOSS_BURST_DAMAGE,
                    slow_effect: false,
                }
            })
            .collect(),
        BossPhase::Three => aimed_burst(muzzle, player_center),
    }
}

/// Five webs at fixed angles, opening toward the player's side.
fn web_fan(muzzle: DVec2, player_center: DVec2) -> Vec<BossShot> {
    let side = if player_center.x < muzzle.x { -1.0 } else { 1.0 };

    BOSS_WEB_ANGLES_DEG
        .iter()
        .map(|deg| {
            let rad = deg.to_radians();
            BossShot {
                origin: muzzle,
                velocity: DVec2::new(
                    rad.cos() * HOSTILE_SHOT_SPEED * side,
                    rad.sin() * BOSS_WEB_VERTICAL_SCALE,
                ),
                kind: ProjectileKind::Web,
                damage: 1,
                slow_effect: true,
            }
        })
        .collect()
}

/// Shots along the unit vector toward the player, strung out behind one
/// another so they do not overlap.
fn aimed_burst(muzzle: DVec2, player_center: DVec2) -> Vec<BossShot> {
    let direction = (player_center - muzzle).try_normalize().unwrap_or(DVec2::X);

    (0..BOSS_AIMED_COUNT)
        .map(|i| BossShot {
            origin: muzzle - direction * (i as f64 * BOSS_AIMED_SPACING),
            velocity: direction * HOSTILE_SHOT_SPEED,
            kind: ProjectileKind::Aimed,
            damage: BOSS_AIMED_DAMAGE,
            slow_effect: false,
        })
        .collect()
}
