//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use transforr_core::components::*;
use transforr_core::enums::GamePhase;
use transforr_core::error::LevelDiagnostic;
use transforr_core::events::GameEvent;
use transforr_core::state::*;
use transforr_core::types::{Aabb, Body, SimTime};

use crate::player::Player;
use crate::systems::pickups::bob_offset;

/// Everything outside the ECS world that the snapshot reports.
pub struct SnapshotContext<'a> {
    pub time: SimTime,
    pub phase: GamePhase,
    pub level: usize,
    pub player: &'a Player,
    pub transform_progress: Option<f64>,
    pub particles: &'a [Particle],
    pub scroll_x: f64,
    pub goal_x: f64,
    pub score: i64,
    pub lives: u32,
    pub diagnostics: &'a [LevelDiagnostic],
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    ctx: &SnapshotContext<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: ctx.time,
        phase: ctx.phase,
        level: ctx.level,
        player: build_player(ctx.player, ctx.transform_progress),
        enemies: build_enemies(world),
        boss: build_boss(world),
        projectiles: build_projectiles(world),
        platforms: build_platforms(world),
        powerups: build_powerups(world),
        hazards: build_hazards(world),
        particles: build_particles(ctx.particles),
        scroll_x: ctx.scroll_x,
        goal_x: ctx.goal_x,
        score: ctx.score,
        lives: ctx.lives,
        events,
        diagnostics: ctx.diagnostics.to_vec(),
    }
}

fn build_player(player: &Player, transform_progress: Option<f64>) -> PlayerView {
    PlayerView {
        rect: player.body.rect,
        mode: player.mode,
        health: player.health,
        max_health: player.max_health,
        has_weapon: player.has_weapon,
        weapon_power: player.weapon_power,
        powerup_remaining: player.powerup_timer,
        invincible: player.is_invincible(),
        frame: player.frame,
        facing: player.facing,
        transform_progress,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Body)>()
        .iter()
        .map(|(_, (enemy, body))| EnemyView {
            rect: body.rect,
            archetype: enemy.archetype,
            direction: enemy.direction,
            frame: enemy.frame,
            health: enemy.health,
        })
        .collect()
}

fn build_boss(world: &World) -> Option<BossView> {
    world
        .query::<&Boss>()
        .iter()
        .next()
        .map(|(_, boss)| BossView {
            rect: boss.body.rect,
            health: boss.health,
            max_health: boss.max_health,
            phase: boss.phase,
            frame: boss.frame,
            invincible: boss.invincible_timer > 0,
        })
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Projectile, &Body)>()
        .iter()
        .map(|(_, (projectile, body))| ProjectileView {
            rect: body.rect,
            owner: projectile.owner,
            kind: projectile.kind,
        })
        .collect()
}

fn build_platforms(world: &World) -> Vec<PlatformView> {
    world
        .query::<&Platform>()
        .iter()
        .map(|(_, platform)| PlatformView {
            rect: platform.rect,
            kind: platform.kind,
        })
        .collect()
}

fn build_powerups(world: &World) -> Vec<PowerupView> {
    world
        .query::<(&Powerup, &Aabb)>()
        .iter()
        .map(|(_, (powerup, rect))| PowerupView {
            rect: *rect,
            kind: powerup.kind,
            bob_offset: bob_offset(powerup),
        })
        .collect()
}

fn build_hazards(world: &World) -> Vec<HazardView> {
    world
        .query::<(&StickyTrail, &Aabb)>()
        .iter()
        .map(|(_, (trail, rect))| HazardView {
            rect: *rect,
            lifetime: trail.lifetime,
        })
        .collect()
}

fn build_particles(particles: &[Particle]) -> Vec<ParticleView> {
    particles
        .iter()
        .map(|p| ParticleView {
            x: p.pos.x,
            y: p.pos.y,
            size: p.size,
            color: p.color,
            alpha: 1.0 - p.age as f64 / p.lifespan.max(1) as f64,
        })
        .collect()
}
