//! Power-up bobbing and collection.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use transforr_core::components::{Particle, Powerup};
use transforr_core::constants::*;
use transforr_core::enums::PowerupKind;
use transforr_core::events::GameEvent;
use transforr_core::types::{Aabb, Rgb};

use crate::player::Player;
use crate::systems::particles::{self, Burst};

fn pickup_color(kind: PowerupKind) -> Rgb {
    match kind {
        PowerupKind::Weapon => Rgb(0, 191, 255),
        PowerupKind::Health => Rgb(50, 205, 50),
    }
}

/// Draw offset of a power-up's bob animation.
pub fn bob_offset(powerup: &Powerup) -> f64 {
    powerup.bob_phase.sin() * POWERUP_BOB_AMPLITUDE
}

/// Collect touched power-ups, then advance the bob of the rest. Collision
/// uses the resting box, not the drawn offset.
pub fn run(
    world: &mut World,
    player: &mut Player,
    particles: &mut Vec<Particle>,
    cosmetic_rng: &mut ChaCha8Rng,
    events: &mut Vec<GameEvent>,
) {
    let mut collected: Vec<(Entity, PowerupKind, Aabb)> = Vec::new();

    for (entity, (powerup, rect)) in world.query_mut::<(&mut Powerup, &Aabb)>() {
        if !powerup.collected && rect.intersects(player.rect()) {
            powerup.collected = true;
            collected.push((entity, powerup.kind, *rect));
        } else {
            powerup.bob_phase += POWERUP_BOB_SPEED;
        }
    }

    for (entity, kind, rect) in collected {
        player.add_powerup(kind);
        debug!(?kind, health = player.health, "power-up collected");
        particles::emit(
            particles,
            cosmetic_rng,
            rect.center(),
            &Burst::pickup(pickup_color(kind), PICKUP_PARTICLES),
        );
        events.push(GameEvent::PowerupCollected { kind });
        let _ = world.despawn(entity);
    }
}
