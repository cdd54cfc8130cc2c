//! Cosmetic particles. Kept outside the ECS world in a plain Vec and driven
//! only by the cosmetic RNG, so they can never change a gameplay outcome.

use std::ops::RangeInclusive;

use glam::DVec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use transforr_core::components::Particle;
use transforr_core::constants::{PARTICLE_DRAG_X, PARTICLE_DRAG_Y, PARTICLE_GRAVITY};
use transforr_core::types::Rgb;

/// Shape of a particle burst.
#[derive(Debug, Clone)]
pub struct Burst {
    pub count: usize,
    /// Per-channel colour range, inclusive.
    pub colors: (Rgb, Rgb),
    pub vel_x: RangeInclusive<f64>,
    pub vel_y: RangeInclusive<f64>,
    pub lifespan: RangeInclusive<u32>,
    pub size: RangeInclusive<f64>,
}

impl Burst {
    /// Enemy death: wide upward spray.
    pub fn death(colors: (Rgb, Rgb), count: usize) -> Self {
        Self {
            count,
            colors,
            vel_x: -6.0..=6.0,
            vel_y: -8.0..=-3.0,
            lifespan: 40..=80,
            size: 2.0..=6.0,
        }
    }

    /// Power-up pickup: fountain in a single colour.
    pub fn pickup(color: Rgb, count: usize) -> Self {
        Self {
            count,
            colors: (color, color),
            vel_x: -4.0..=4.0,
            vel_y: -6.0..=-3.0,
            lifespan: 50..=50,
            size: 2.0..=6.0,
        }
    }

    /// Small sparks where a projectile hits a wall or the boss.
    pub fn sparks(color: Rgb, count: usize, lifespan: RangeInclusive<u32>) -> Self {
        Self {
            count,
            colors: (color, color),
            vel_x: -3.0..=3.0,
            vel_y: -3.0..=3.0,
            lifespan,
            size: 2.0..=2.0,
        }
    }
}

pub fn emit(particles: &mut Vec<Particle>, rng: &mut ChaCha8Rng, origin: DVec2, burst: &Burst) {
    let (low, high) = burst.colors;
    particles.reserve(burst.count);
    for _ in 0..burst.count {
        let color = Rgb(
            rng.gen_range(low.0..=high.0),
            rng.gen_range(low.1..=high.1),
            rng.gen_range(low.2..=high.2),
        );
        particles.push(Particle {
            pos: origin,
            vel: DVec2::new(
                rng.gen_range(burst.vel_x.clone()),
                rng.gen_range(burst.vel_y.clone()),
            ),
            color,
            size: rng.gen_range(burst.size.clone()),
            age: 0,
            lifespan: rng.gen_range(burst.lifespan.clone()),
        });
    }
}

/// Integrate and age every particle, dropping the expired ones.
pub fn run(particles: &mut Vec<Particle>) {
    for p in particles.iter_mut() {
        p.pos += p.vel;
        p.vel.y += PARTICLE_GRAVITY;
        p.vel.x *= PARTICLE_DRAG_X;
        p.vel.y *= PARTICLE_DRAG_Y;
        p.age += 1;
    }
    particles.retain(|p| p.age < p.lifespan);
}
