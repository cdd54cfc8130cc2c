//! Enemy AI system: runs the behaviour FSM for every enemy, applies
//! physics, and turns raised attacks into projectiles or hazards.

use glam::DVec2;
use hecs::World;

use transforr_ai::fsm::{evaluate, EnemyContext, VerticalIntent};
use transforr_ai::profiles::get_profile;
use transforr_core::components::Enemy;
use transforr_core::constants::*;
use transforr_core::enums::{EnemyArchetype, EnemyAttack, Facing, ProjectileKind};
use transforr_core::events::GameEvent;
use transforr_core::types::{Aabb, Body};

use crate::physics;
use crate::world_setup;

/// An attack raised this tick, realised after the query ends.
struct PendingAttack {
    archetype: EnemyArchetype,
    attack: EnemyAttack,
    rect: Aabb,
    direction: Facing,
}

/// Run one tick of enemy behaviour.
pub fn run(world: &mut World, player_rect: &Aabb, solids: &[Aabb], events: &mut Vec<GameEvent>) {
    let player_center_x = player_rect.center_x();
    let mut pending: Vec<PendingAttack> = Vec::new();

    for (_entity, (enemy, body)) in world.query_mut::<(&mut Enemy, &mut Body)>() {
        enemy.animation_timer += 1;
        enemy.attack_timer += 1;
        enemy.jump_cooldown = enemy.jump_cooldown.saturating_sub(1);

        let profile = get_profile(enemy.archetype);
        let ctx = EnemyContext {
            archetype: enemy.archetype,
            direction: enemy.direction,
            vel_x: body.vel.x,
            on_ground: body.on_ground,
            center_x: body.rect.center_x(),
            player_center_x,
            animation_timer: enemy.animation_timer,
            attack_timer: enemy.attack_timer,
            jump_cooldown: enemy.jump_cooldown,
            leaping: enemy.leaping,
        };
        let update = evaluate(&ctx);

        enemy.direction = update.direction;
        enemy.jump_cooldown = update.jump_cooldown;
        enemy.leaping = update.leaping;
        body.vel.x = update.vel_x;
        match update.vertical {
            VerticalIntent::Gravity => physics::apply_gravity(body),
            VerticalIntent::Launch(vy) | VerticalIntent::Set(vy) => body.vel.y = vy,
        }

        physics::move_vertical(body, solids);
        let hit_wall = physics::move_horizontal(body, solids);
        if hit_wall && profile.turns_at_walls {
            enemy.direction = enemy.direction.flipped();
        }

        if body.on_ground
            && profile.turns_at_ledges
            && !physics::ground_ahead(&body.rect, enemy.direction, solids)
        {
            enemy.direction = enemy.direction.flipped();
        }

        if enemy.animation_timer % ENEMY_ANIMATION_INTERVAL == 0 {
            enemy.frame = (enemy.frame + 1) % profile.frame_count;
        }

        if let Some(attack) = update.attack {
            pending.push(PendingAttack {
                archetype: enemy.archetype,
                attack,
                rect: body.rect,
                direction: enemy.direction,
            });
        }
    }

    for attack in pending {
        realise(world, &attack);
        events.push(GameEvent::EnemyAttacked {
            archetype: attack.archetype,
            attack: attack.attack,
        });
    }
}

fn realise(world: &mut World, pending: &PendingAttack) {
    let rect = &pending.rect;
    let dir = pending.direction.sign();

    match pending.attack {
        EnemyAttack::StickyTrail => {
            world_setup::spawn_sticky_trail(world, rect.center_x(), rect.bottom());
        }
        EnemyAttack::Sting => {
            world_setup::spawn_hostile_shot(
                world,
                DVec2::new(rect.center_x(), rect.top()),
                DVec2::new(dir * STING_SPEED, 0.0),
                ProjectileKind::Sting,
                1,
                false,
            );
        }
        EnemyAttack::HeavyBlast => {
            world_setup::spawn_hostile_shot(
                world,
                rect.center(),
                DVec2::new(dir * HEAVY_BLAST_SPEED, 0.0),
                ProjectileKind::HeavyBlast,
                HEAVY_BLAST_DAMAGE,
                false,
            );
        }
        EnemyAttack::Honey => {
            world_setup::spawn_hostile_shot(
                world,
                DVec2::new(rect.center_x(), rect.bottom()),
                DVec2::new(0.0, HONEY_FALL_SPEED),
                ProjectileKind::Honey,
                1,
                false,
            );
        }
        EnemyAttack::Blade => {
            world_setup::spawn_hostile_shot(
                world,
                rect.center(),
                DVec2::new(dir * BLADE_SPEED, 0.0),
                ProjectileKind::Blade,
                1,
                false,
            );
        }
    }
}
