//! Sticky trail hazards: ageing and player contact.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use transforr_core::components::StickyTrail;
use transforr_core::constants::STICKY_TRAIL_DAMAGE_CHANCE;
use transforr_core::enums::Mode;
use transforr_core::events::GameEvent;
use transforr_core::types::Aabb;

use crate::player::Player;

/// Age every trail, drop the dried ones, and slow (and sometimes bite) a
/// hero standing in goo. The vehicle rolls over trails unharmed.
pub fn run(
    world: &mut World,
    player: &mut Player,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (trail, rect)) in world.query_mut::<(&mut StickyTrail, &Aabb)>() {
        trail.lifetime = trail.lifetime.saturating_sub(1);
        if trail.lifetime == 0 {
            despawn_buffer.push(entity);
            continue;
        }

        if player.mode != Mode::Hero || !rect.intersects(player.rect()) {
            continue;
        }

        player.slowed = true;
        if rng.gen_bool(STICKY_TRAIL_DAMAGE_CHANCE) && player.take_damage(trail.damage) {
            events.push(GameEvent::PlayerDamaged {
                amount: trail.damage,
                health: player.health,
            });
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
