//! Projectile movement, wall impacts and culling.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use transforr_core::components::{Particle, Platform, PlatformKind, Projectile};
use transforr_core::constants::*;
use transforr_core::enums::ProjectileOwner;
use transforr_core::events::GameEvent;
use transforr_core::types::{Aabb, Body, Rgb};

use crate::systems::particles::{self, Burst};

const PLAYER_SPARK: Rgb = Rgb(255, 255, 255);
const HOSTILE_SPARK: Rgb = Rgb(255, 165, 0);

/// True when a projectile has left the active scroll window.
pub fn outside_window(rect: &Aabb, scroll_x: f64) -> bool {
    rect.right() < scroll_x - CULL_MARGIN_BEHIND
        || rect.left() > scroll_x + SCREEN_WIDTH + CULL_MARGIN_AHEAD
        || rect.top() > SCREEN_HEIGHT + CULL_MARGIN_VERTICAL
        || rect.bottom() < -CULL_MARGIN_VERTICAL
}

/// Move every projectile, destroy those that hit a platform or left the
/// window. Player shots chip breakable blocks.
pub fn run(
    world: &mut World,
    scroll_x: f64,
    particles: &mut Vec<Particle>,
    cosmetic_rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let platforms: Vec<(Entity, Aabb)> = world
        .query::<&Platform>()
        .iter()
        .map(|(entity, platform)| (entity, platform.rect))
        .collect();

    let mut block_hits: Vec<Entity> = Vec::new();

    for (entity, (projectile, body)) in world.query_mut::<(&Projectile, &mut Body)>() {
        body.rect.translate(body.vel);

        if outside_window(&body.rect, scroll_x) {
            despawn_buffer.push(entity);
            continue;
        }

        let Some((platform, _)) = platforms
            .iter()
            .find(|(_, rect)| body.rect.intersects(rect))
        else {
            continue;
        };

        let color = match projectile.owner {
            ProjectileOwner::Player => {
                block_hits.push(*platform);
                PLAYER_SPARK
            }
            ProjectileOwner::Hostile => HOSTILE_SPARK,
        };
        particles::emit(
            particles,
            cosmetic_rng,
            body.rect.center(),
            &Burst::sparks(color, IMPACT_PARTICLES, 15..=15),
        );
        despawn_buffer.push(entity);
    }

    for entity in block_hits {
        chip_block(world, entity, events, despawn_buffer);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// One player hit on a platform; breakable blocks shatter at zero.
fn chip_block(
    world: &mut World,
    entity: Entity,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    let Ok(mut platform) = world.get::<&mut Platform>(entity) else {
        return;
    };
    let platform = &mut *platform;
    let PlatformKind::Breakable { hits_remaining } = &mut platform.kind else {
        return;
    };
    if *hits_remaining <= 0 {
        return;
    }

    *hits_remaining -= 1;
    if *hits_remaining == 0 {
        debug!(x = platform.rect.x, y = platform.rect.y, "block broken");
        events.push(GameEvent::BlockBroken {
            x: platform.rect.x,
            y: platform.rect.y,
        });
        despawn_buffer.push(entity);
    }
}
