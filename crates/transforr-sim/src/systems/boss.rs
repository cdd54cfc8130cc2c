//! Boss system: float/drift motion, animation, volley countdown.
//!
//! Damage is applied by the collision system through `take_damage`, which
//! also advances the phase the same tick.

use glam::DVec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use transforr_ai::boss::{phase_for_health, volley, volley_cooldown};
use transforr_core::components::Boss;
use transforr_core::constants::*;
use transforr_core::events::GameEvent;

use crate::world_setup;

/// Run one tick of boss behaviour. A defeated boss stays in place, inert.
pub fn run(
    world: &mut World,
    player_center: DVec2,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let mut shots = Vec::new();

    for (_entity, boss) in world.query_mut::<&mut Boss>() {
        boss.invincible_timer = boss.invincible_timer.saturating_sub(1);
        if boss.health <= 0 {
            continue;
        }

        boss.animation_timer += 1;
        if boss.animation_timer % BOSS_ANIMATION_INTERVAL == 0 {
            boss.frame = (boss.frame + 1) % BOSS_FRAME_COUNT;
        }

        let t = boss.animation_timer as f64;
        boss.body.vel.x = (t * BOSS_DRIFT_FREQUENCY).sin() * BOSS_DRIFT_AMPLITUDE;
        boss.body.vel.y = (t * BOSS_FLOAT_FREQUENCY).sin() * BOSS_FLOAT_AMPLITUDE;
        let vel = boss.body.vel;
        boss.body.rect.translate(vel);

        if boss.attack_timer > 0 {
            boss.attack_timer -= 1;
        }
        if boss.attack_timer == 0 {
            let pattern = volley(boss.phase, boss.body.rect.center(), player_center, rng);
            debug!(phase = boss.phase.number(), count = pattern.len(), "boss volley");
            events.push(GameEvent::BossVolley {
                phase: boss.phase,
                count: pattern.len(),
            });
            shots.extend(pattern);
            boss.attack_timer = volley_cooldown(boss.phase);
        }
    }

    for shot in shots {
        world_setup::spawn_hostile_shot(
            world,
            shot.origin,
            shot.velocity,
            shot.kind,
            shot.damage,
            shot.slow_effect,
        );
    }
}

/// Outcome of a hit that landed on the boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossHit {
    pub phase_changed: bool,
    pub defeated: bool,
}

/// Apply damage unless the boss is invincible or already defeated. Health
/// is kept in [0, max] and the phase is re-evaluated on the spot.
pub fn take_damage(boss: &mut Boss, amount: i32) -> Option<BossHit> {
    if boss.invincible_timer > 0 || boss.health <= 0 {
        return None;
    }

    boss.health = (boss.health - amount).clamp(0, boss.max_health);
    boss.invincible_timer = BOSS_INVINCIBILITY_TICKS;

    let phase = phase_for_health(boss.phase, boss.health, boss.max_health);
    let phase_changed = phase != boss.phase;
    if phase_changed {
        debug!(from = boss.phase.number(), to = phase.number(), "boss phase change");
    }
    boss.phase = phase;

    Some(BossHit {
        phase_changed,
        defeated: boss.health == 0,
    })
}
