//! Level geometry: moving platform oscillation and the solid list every
//! physics pass collides against.

use hecs::World;

use transforr_core::components::{Platform, PlatformKind};
use transforr_core::enums::Facing;
use transforr_core::types::Aabb;

/// Rectangles of every platform, in spawn order.
pub fn solids(world: &World) -> Vec<Aabb> {
    world
        .query::<&Platform>()
        .iter()
        .map(|(_, platform)| platform.rect)
        .collect()
}

/// Move every moving platform and reverse it at either end of its range.
pub fn run(world: &mut World) {
    for (_entity, platform) in world.query_mut::<&mut Platform>() {
        let PlatformKind::Moving {
            start_x,
            range,
            speed,
            direction,
        } = &mut platform.kind
        else {
            continue;
        };

        platform.rect.x += *speed * direction.sign();

        let (low, high) = (*start_x - *range, *start_x + *range);
        if platform.rect.x >= high {
            platform.rect.x = high;
            *direction = Facing::Left;
        } else if platform.rect.x <= low {
            platform.rect.x = low;
            *direction = Facing::Right;
        }
    }
}
