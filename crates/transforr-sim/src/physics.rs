//! Axis-separated movement and collision against level geometry.
//!
//! Movement is integrated one axis at a time and each axis is resolved
//! before the next one moves. The player moves horizontally then
//! vertically; enemies move vertically then horizontally. The order
//! matters at corners and is part of the contract.
//!
//! Solids are visited in the order given. Once a pass zeroes the velocity
//! on its axis, later overlaps in the same pass are left alone.

use transforr_core::constants::{GRAVITY, SENSOR_DROP, SENSOR_REACH, SENSOR_SIZE};
use transforr_core::enums::Facing;
use transforr_core::types::{Aabb, Body};

/// Add one tick of gravity.
pub fn apply_gravity(body: &mut Body) {
    body.vel.y += GRAVITY;
}

/// Move along x and push out of any solid. Returns true on wall contact.
pub fn move_horizontal(body: &mut Body, solids: &[Aabb]) -> bool {
    body.rect.x += body.vel.x;
    resolve_horizontal(body, solids)
}

/// Move along y and push out of any solid. Clears and recomputes `on_ground`.
pub fn move_vertical(body: &mut Body, solids: &[Aabb]) {
    body.rect.y += body.vel.y;
    body.on_ground = false;
    resolve_vertical(body, solids);
}

/// Horizontal pass: the leading edge snaps to the near edge of the solid.
pub fn resolve_horizontal(body: &mut Body, solids: &[Aabb]) -> bool {
    let mut hit = false;
    for solid in solids {
        if !body.rect.intersects(solid) {
            continue;
        }
        if body.vel.x > 0.0 {
            body.rect.set_right(solid.left());
            body.vel.x = 0.0;
            hit = true;
        } else if body.vel.x < 0.0 {
            body.rect.set_left(solid.right());
            body.vel.x = 0.0;
            hit = true;
        }
    }
    hit
}

/// Vertical pass: land on top of a solid or bump the head on its underside.
pub fn resolve_vertical(body: &mut Body, solids: &[Aabb]) {
    for solid in solids {
        if !body.rect.intersects(solid) {
            continue;
        }
        if body.vel.y > 0.0 {
            body.rect.set_bottom(solid.top());
            body.vel.y = 0.0;
            body.on_ground = true;
        } else if body.vel.y < 0.0 {
            body.rect.set_top(solid.bottom());
            body.vel.y = 0.0;
        }
    }
}

/// Settle a freshly resized box among the solids without a velocity to go on.
///
/// The box may slide sideways by at most `max_shift` to clear a wall it
/// grew into; it never moves vertically. Returns `None` if it still
/// overlaps something after that.
pub fn fit_sideways(mut rect: Aabb, solids: &[Aabb], max_shift: f64) -> Option<Aabb> {
    for solid in solids {
        if !rect.intersects(solid) {
            continue;
        }
        let into_right = rect.right() - solid.left();
        let into_left = solid.right() - rect.left();
        if into_right <= into_left && into_right <= max_shift {
            rect.set_right(solid.left());
        } else if into_left < into_right && into_left <= max_shift {
            rect.set_left(solid.right());
        }
    }

    if solids.iter().any(|solid| rect.intersects(solid)) {
        None
    } else {
        Some(rect)
    }
}

/// The sensor box a walker uses to look for floor ahead of its leading edge.
pub fn ground_sensor(rect: &Aabb, direction: Facing) -> Aabb {
    let x = match direction {
        Facing::Right => rect.right() + SENSOR_REACH,
        Facing::Left => rect.left() - SENSOR_REACH,
    };
    Aabb::new(x, rect.bottom() + SENSOR_DROP, SENSOR_SIZE, SENSOR_SIZE)
}

/// True when the ground sensor touches any solid.
pub fn ground_ahead(rect: &Aabb, direction: Facing, solids: &[Aabb]) -> bool {
    let sensor = ground_sensor(rect, direction);
    solids.iter().any(|solid| sensor.intersects(solid))
}
