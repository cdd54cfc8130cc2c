//! Cross-entity collision: shots against enemies, the boss and the player,
//! and enemy bodies against the player.
//!
//! Positions are gathered first, hits are decided on the snapshot, then
//! component updates and despawns are applied. A projectile is consumed
//! by the first valid target it touches; an enemy is removed the tick its
//! health reaches zero and scores exactly once.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use transforr_ai::profiles::get_profile;
use transforr_core::components::{Boss, Enemy, Particle, Projectile};
use transforr_core::constants::*;
use transforr_core::enums::ProjectileOwner;
use transforr_core::events::GameEvent;
use transforr_core::types::{Aabb, Body, Rgb};

use crate::player::Player;
use crate::systems::boss;
use crate::systems::particles::{self, Burst};

const BOSS_HIT_COLOR: Rgb = Rgb(255, 100, 100);

struct Shot {
    entity: Entity,
    rect: Aabb,
    projectile: Projectile,
    consumed: bool,
}

struct Target {
    entity: Entity,
    rect: Aabb,
    killed: bool,
}

/// Run collision resolution for one tick.
pub fn run(
    world: &mut World,
    player: &mut Player,
    score: &mut i64,
    particles: &mut Vec<Particle>,
    cosmetic_rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut shots: Vec<Shot> = world
        .query::<(&Projectile, &Body)>()
        .iter()
        .map(|(entity, (projectile, body))| Shot {
            entity,
            rect: body.rect,
            projectile: projectile.clone(),
            consumed: false,
        })
        .collect();

    let mut enemies: Vec<Target> = world
        .query::<(&Enemy, &Body)>()
        .iter()
        .map(|(entity, (_, body))| Target {
            entity,
            rect: body.rect,
            killed: false,
        })
        .collect();

    // 1. Player shots against enemies.
    for target in enemies.iter_mut() {
        for shot in shots.iter_mut() {
            if target.killed
                || shot.consumed
                || shot.projectile.owner != ProjectileOwner::Player
                || !shot.rect.intersects(&target.rect)
            {
                continue;
            }
            shot.consumed = true;

            let Ok(mut enemy) = world.get::<&mut Enemy>(target.entity) else {
                continue;
            };
            enemy.health -= shot.projectile.damage;
            if enemy.health > 0 {
                continue;
            }

            target.killed = true;
            let profile = get_profile(enemy.archetype);
            *score += SCORE_ENEMY_KILL;
            particles::emit(
                particles,
                cosmetic_rng,
                target.rect.center(),
                &Burst::death(profile.palette, KILL_PARTICLES),
            );
            events.push(GameEvent::EnemyKilled {
                archetype: enemy.archetype,
                x: target.rect.center_x(),
                y: target.rect.center_y(),
                color: profile.palette.0,
            });
            debug!(archetype = ?enemy.archetype, "enemy killed");
            despawn_buffer.push(target.entity);
        }
    }

    // 2. Player shots against the boss.
    for (_entity, boss_state) in world.query_mut::<&mut Boss>() {
        if boss_state.health <= 0 {
            continue;
        }
        for shot in shots.iter_mut() {
            if shot.consumed
                || shot.projectile.owner != ProjectileOwner::Player
                || !shot.rect.intersects(&boss_state.body.rect)
            {
                continue;
            }
            shot.consumed = true;

            let Some(hit) = boss::take_damage(boss_state, shot.projectile.damage) else {
                continue;
            };
            *score += SCORE_BOSS_HIT;
            particles::emit(
                particles,
                cosmetic_rng,
                shot.rect.center(),
                &Burst::sparks(BOSS_HIT_COLOR, BOSS_HIT_PARTICLES, 20..=40),
            );
            events.push(GameEvent::BossHit {
                health: boss_state.health,
            });
            if hit.phase_changed {
                events.push(GameEvent::BossPhaseChanged {
                    phase: boss_state.phase,
                });
            }
            if hit.defeated {
                info!("boss defeated");
                events.push(GameEvent::BossDefeated);
                break;
            }
        }
    }

    // 3. Hostile shots against the player.
    for shot in shots.iter_mut() {
        if shot.consumed
            || shot.projectile.owner != ProjectileOwner::Hostile
            || !shot.rect.intersects(player.rect())
        {
            continue;
        }
        shot.consumed = true;

        if player.take_damage(shot.projectile.damage) {
            *score += SCORE_PROJECTILE_PENALTY;
            if shot.projectile.slow_effect {
                player.body.vel.x *= SLOW_FACTOR;
                player.slowed = true;
            }
            events.push(GameEvent::PlayerDamaged {
                amount: shot.projectile.damage,
                health: player.health,
            });
        }
    }

    // 4. Enemy bodies against the player.
    for target in enemies.iter().filter(|t| !t.killed) {
        if target.rect.intersects(player.rect()) && player.take_damage(1) {
            *score += SCORE_CONTACT_PENALTY;
            events.push(GameEvent::PlayerDamaged {
                amount: 1,
                health: player.health,
            });
        }
    }

    despawn_buffer.extend(shots.iter().filter(|s| s.consumed).map(|s| s.entity));
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
