//! Explosion particle bursts.
//!
//! Purely cosmetic: no collision. Velocities are drawn from the simulation RNG
//! so a seed replays the same bursts.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyace_core::components::{Explosion, Particle};
use skyace_core::constants::{
    EXPLOSION_DECAY_RATE, EXPLOSION_PARTICLE_COUNT, EXPLOSION_PARTICLE_SPEED,
};
use skyace_core::enums::ColorTag;

/// Create a fresh burst at `origin`.
pub fn spawn(
    explosions: &mut Vec<Explosion>,
    rng: &mut ChaCha8Rng,
    origin: Vec3,
    color: ColorTag,
) {
    let speed = EXPLOSION_PARTICLE_SPEED;
    let particles = (0..EXPLOSION_PARTICLE_COUNT)
        .map(|_| Particle {
            position: origin,
            velocity: Vec3::new(
                rng.gen_range(-speed..=speed),
                rng.gen_range(-speed..=speed),
                rng.gen_range(-speed..=speed),
            ),
        })
        .collect();

    explosions.push(Explosion {
        color,
        life: 1.0,
        particles,
    });
}

/// Integrate particles, drain life, and drop bursts that have faded out.
pub fn run(explosions: &mut Vec<Explosion>, dt: f32) {
    explosions.retain_mut(|explosion| {
        for particle in &mut explosion.particles {
            particle.position += particle.velocity * dt;
        }
        explosion.life -= EXPLOSION_DECAY_RATE * dt;
        explosion.life > 0.0
    });
}

/// Fade opacity for a burst.
pub fn opacity(explosion: &Explosion) -> f32 {
    explosion.life.clamp(0.0, 1.0)
}
