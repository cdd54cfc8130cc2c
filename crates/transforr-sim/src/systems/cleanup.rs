//! Cleanup system: removes enemies that fell out of the world.
//!
//! Falling into a pit is not a kill, so nothing is scored.

use hecs::{Entity, World};
use tracing::debug;

use transforr_core::components::Enemy;
use transforr_core::constants::{CULL_MARGIN_VERTICAL, SCREEN_HEIGHT};
use transforr_core::types::Body;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (enemy, body)) in world.query_mut::<(&Enemy, &Body)>() {
        if body.rect.top() > SCREEN_HEIGHT + CULL_MARGIN_VERTICAL {
            debug!(archetype = ?enemy.archetype, "enemy fell out of the world");
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
