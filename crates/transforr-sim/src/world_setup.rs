//! Entity spawn factories for building a level into the ECS world.
//!
//! Creates platforms, enemies, power-ups, the boss, projectiles and
//! sticky trails with the component bundles the systems query for.

use std::f64::consts::TAU;

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use transforr_ai::profiles::get_profile;
use transforr_core::components::*;
use transforr_core::constants::*;
use transforr_core::enums::*;
use transforr_core::types::{Aabb, Body};

use crate::level::{LevelLayout, Spawn};

/// Populate an empty world from a parsed layout.
///
/// Enemy start directions draw from the gameplay RNG; power-up bob phases
/// draw from the cosmetic RNG.
pub fn populate(
    world: &mut World,
    layout: &LevelLayout,
    rng: &mut ChaCha8Rng,
    cosmetic_rng: &mut ChaCha8Rng,
) {
    for platform in &layout.platforms {
        world.spawn((*platform,));
    }

    for spawn in &layout.spawns {
        match *spawn {
            Spawn::Enemy { archetype, x, y } => {
                spawn_enemy(world, rng, archetype, x, y);
            }
            Spawn::Powerup { kind, x, y } => {
                spawn_powerup(world, cosmetic_rng, kind, x, y);
            }
            Spawn::Boss { x, y } => {
                spawn_boss(world, x, y, BOSS_MAX_HEALTH);
            }
        }
    }
}

/// Spawn an enemy with its top-left corner at `(x, y)`, facing a random way.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    archetype: EnemyArchetype,
    x: f64,
    y: f64,
) -> Entity {
    let direction = if rng.gen_bool(0.5) {
        Facing::Right
    } else {
        Facing::Left
    };
    spawn_enemy_facing(world, archetype, x, y, direction)
}

/// Spawn an enemy with an explicit start direction.
pub fn spawn_enemy_facing(
    world: &mut World,
    archetype: EnemyArchetype,
    x: f64,
    y: f64,
    direction: Facing,
) -> Entity {
    let profile = get_profile(archetype);
    let enemy = Enemy {
        archetype,
        health: profile.health,
        direction,
        animation_timer: 0,
        attack_timer: 0,
        jump_cooldown: 0,
        leaping: false,
        frame: 0,
    };
    world.spawn((enemy, Body::new(x, y, profile.width, profile.height)))
}

pub fn spawn_powerup(
    world: &mut World,
    cosmetic_rng: &mut ChaCha8Rng,
    kind: PowerupKind,
    x: f64,
    y: f64,
) -> Entity {
    let powerup = Powerup {
        kind,
        collected: false,
        bob_phase: cosmetic_rng.gen_range(0.0..TAU),
    };
    world.spawn((powerup, Aabb::new(x, y, POWERUP_SIZE, POWERUP_SIZE)))
}

pub fn spawn_boss(world: &mut World, x: f64, y: f64, max_health: i32) -> Entity {
    world.spawn((Boss {
        body: Body::new(x, y, BOSS_WIDTH, BOSS_HEIGHT),
        health: max_health,
        max_health,
        phase: BossPhase::One,
        attack_timer: 0,
        invincible_timer: 0,
        animation_timer: 0,
        frame: 0,
    },))
}

/// Spawn a projectile whose box is centred on `center`.
pub fn spawn_projectile(
    world: &mut World,
    center: DVec2,
    size: DVec2,
    velocity: DVec2,
    projectile: Projectile,
) -> Entity {
    let body = Body::new(
        center.x - size.x / 2.0,
        center.y - size.y / 2.0,
        size.x,
        size.y,
    )
    .with_velocity(velocity);
    world.spawn((projectile, body))
}

/// Spawn a hostile projectile of the standard size.
pub fn spawn_hostile_shot(
    world: &mut World,
    center: DVec2,
    velocity: DVec2,
    kind: ProjectileKind,
    damage: i32,
    slow_effect: bool,
) -> Entity {
    spawn_projectile(
        world,
        center,
        DVec2::splat(HOSTILE_SHOT_SIZE),
        velocity,
        Projectile {
            owner: ProjectileOwner::Hostile,
            kind,
            damage,
            slow_effect,
        },
    )
}

/// Lay a sticky trail centred under `center_x`, resting on `surface_y`.
pub fn spawn_sticky_trail(world: &mut World, center_x: f64, surface_y: f64) -> Entity {
    world.spawn((
        StickyTrail {
            lifetime: STICKY_TRAIL_LIFETIME,
            damage: 1,
        },
        Aabb::new(
            center_x - STICKY_TRAIL_WIDTH / 2.0,
            surface_y - STICKY_TRAIL_HEIGHT,
            STICKY_TRAIL_WIDTH,
            STICKY_TRAIL_HEIGHT,
        ),
    ))
}
