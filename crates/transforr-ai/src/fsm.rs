//! Enemy behaviour state machine.
//!
//! Pure functions that decide velocities, direction and attack signals for
//! one enemy per tick based on its archetype, timers and the player's
//! position. No ECS dependency; operates on plain data. Physics and
//! collision are applied afterwards by the simulation.
//!
//! The caller advances the per-enemy timers (animation, attack, jump
//! cooldown) before calling `evaluate`.

use transforr_core::constants::*;
use transforr_core::enums::{EnemyArchetype, EnemyAttack, Facing};

use crate::profiles::{get_profile, EnemyProfile, VerticalMotion};

/// How vertical velocity is produced this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VerticalIntent {
    /// Add gravity to the current vertical velocity.
    Gravity,
    /// Replace vertical velocity with an impulse; gravity skipped this tick.
    Launch(f64),
    /// Replace vertical velocity outright (hover, static).
    Set(f64),
}

/// Input to the enemy FSM for a single entity.
#[derive(Debug, Clone)]
pub struct EnemyContext {
    pub archetype: EnemyArchetype,
    pub direction: Facing,
    /// Horizontal velocity left over from the previous tick.
    pub vel_x: f64,
    pub on_ground: bool,
    pub center_x: f64,
    pub player_center_x: f64,
    pub animation_timer: u32,
    pub attack_timer: u32,
    pub jump_cooldown: u32,
    pub leaping: bool,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyUpdate {
    pub direction: Facing,
    pub vel_x: f64,
    pub vertical: VerticalIntent,
    pub jump_cooldown: u32,
    pub leaping: bool,
    pub attack: Option<EnemyAttack>,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.archetype);

    match ctx.archetype {
        EnemyArchetype::Snail => crawl(ctx, &profile, 1.0, None),
        EnemyArchetype::Caterpillar => {
            let attack = fires_on(ctx.attack_timer, CATERPILLAR_TRAIL_INTERVAL)
                .then_some(EnemyAttack::StickyTrail);
            crawl(ctx, &profile, 1.0, attack)
        }
        EnemyArchetype::Scorpion => {
            let dashing = ctx.animation_timer % SCORPION_CYCLE_TICKS < SCORPION_DASH_TICKS;
            let attack =
                fires_on(ctx.attack_timer, SCORPION_FIRE_INTERVAL).then_some(EnemyAttack::Sting);
            crawl(ctx, &profile, if dashing { 1.0 } else { 0.0 }, attack)
        }
        EnemyArchetype::Beetle => {
            let frozen = ctx.animation_timer % BEETLE_CYCLE_TICKS < BEETLE_FREEZE_TICKS;
            let attack = fires_on(ctx.attack_timer, BEETLE_FIRE_INTERVAL)
                .then_some(EnemyAttack::HeavyBlast);
            crawl(ctx, &profile, if frozen { 0.0 } else { 1.0 }, attack)
        }
        EnemyArchetype::Bee => {
            let aligned = (ctx.center_x - ctx.player_center_x).abs() < BEE_ALIGN_RANGE;
            let attack = (aligned && fires_on(ctx.attack_timer, BEE_DROP_INTERVAL))
                .then_some(EnemyAttack::Honey);
            crawl(ctx, &profile, 1.0, attack)
        }
        EnemyArchetype::Mantis => evaluate_mantis(ctx, &profile),
        EnemyArchetype::Spider => crawl(ctx, &profile, 0.0, None),
    }
}

/// Vertical behaviour when nothing overrides it this tick.
fn idle_vertical(ctx: &EnemyContext, profile: &EnemyProfile) -> VerticalIntent {
    match profile.vertical {
        VerticalMotion::Gravity => VerticalIntent::Gravity,
        VerticalMotion::Hover => VerticalIntent::Set(
            (ctx.animation_timer as f64 * BEE_HOVER_FREQUENCY).sin() * BEE_HOVER_AMPLITUDE,
        ),
        VerticalMotion::Fixed => VerticalIntent::Set(0.0),
    }
}

/// True on every tick that is a positive multiple of `interval`.
fn fires_on(timer: u32, interval: u32) -> bool {
    timer > 0 && timer % interval == 0
}

/// Constant speed scaled by the archetype's cycle; vertical motion from the profile.
fn crawl(
    ctx: &EnemyContext,
    profile: &EnemyProfile,
    speed_scale: f64,
    attack: Option<EnemyAttack>,
) -> EnemyUpdate {
    EnemyUpdate {
        direction: ctx.direction,
        vel_x: ctx.direction.sign() * profile.speed * speed_scale,
        vertical: idle_vertical(ctx, profile),
        jump_cooldown: ctx.jump_cooldown,
        leaping: false,
        attack,
    }
}

/// Mantis: stalk on the ground, leap at the player from mid range, dash
/// harder every airborne tick, throw blades while the player is in view.
fn evaluate_mantis(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyUpdate {
    let dx = ctx.player_center_x - ctx.center_x;
    let distance = dx.abs();

    let mut direction = ctx.direction;
    let mut vel_x = ctx.vel_x;
    let mut vertical = idle_vertical(ctx, profile);
    let mut jump_cooldown = ctx.jump_cooldown;
    let mut leaping = ctx.leaping;

    if ctx.on_ground {
        leaping = false;

        if distance < MANTIS_STRIKE_ZONE {
            vel_x = 0.0;
        } else {
            direction = Facing::toward(ctx.center_x, ctx.player_center_x);
            vel_x = direction.sign() * profile.speed;
        }

        if distance > MANTIS_STRIKE_ZONE && distance < MANTIS_LEAP_RANGE && jump_cooldown == 0 {
            vertical = VerticalIntent::Launch(MANTIS_LEAP_VY);
            vel_x = direction.sign() * MANTIS_LEAP_VX;
            jump_cooldown = MANTIS_JUMP_COOLDOWN_TICKS;
            leaping = true;
        }
    } else {
        // Capped at MANTIS_MAX_AIR_SPEED (24) or a long fall compounds without bound.
        vel_x = (vel_x * MANTIS_AIR_DASH_FACTOR).clamp(-MANTIS_MAX_AIR_SPEED, MANTIS_MAX_AIR_SPEED);
    }

    let attack = (fires_on(ctx.attack_timer, MANTIS_FIRE_INTERVAL)
        && distance < MANTIS_FIRE_RANGE)
        .then_some(EnemyAttack::Blade);

    EnemyUpdate {
        direction,
        vel_x,
        vertical,
        jump_cooldown,
        leaping,
        attack,
    }
}
