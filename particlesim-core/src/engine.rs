use crate::bounds::ViewportBounds;
use crate::collision::{resolve_collisions, CollisionMode};
use crate::constants::{DEFAULT_PARTICLE_SIZE, SPAWN_HALF_EXTENT, SPAWN_MAX_SPEED};
use crate::integrator::{clamp_positions, integrate, resolve_boundaries};
use glam::Vec2;
use rand::Rng;

/// A square point mass in viewport pixel space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Edge length of the square footprint
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            size: DEFAULT_PARTICLE_SIZE,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.vel.length_squared()
    }
}

/// Owns the particle set and advances it one step at a time
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    collision_mode: CollisionMode,
}

impl ParticleSystem {
    pub fn new(collision_mode: CollisionMode) -> Self {
        Self {
            particles: Vec::new(),
            collision_mode,
        }
    }

    /// Build a system from explicit particles (fixtures, replays)
    pub fn from_particles(particles: Vec<Particle>, collision_mode: CollisionMode) -> Self {
        Self {
            particles,
            collision_mode,
        }
    }

    /// Replace the particle set with `count` particles scattered in a
    /// 200x200 square around the viewport center.
    ///
    /// Offsets are whole pixels in `[-100, 100)` and velocity components whole
    /// pixels/second in `[-5, 5)`, drawn from `rng` in the order x, y, vx, vy.
    pub fn initialize<R: Rng>(
        &mut self,
        count: usize,
        bounds: &ViewportBounds,
        rng: &mut R,
    ) {
        self.particles.clear();
        self.particles.reserve(count);

        let center = bounds.center();
        for _ in 0..count {
            let offset_x = rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT);
            let offset_y = rng.random_range(-SPAWN_HALF_EXTENT..SPAWN_HALF_EXTENT);
            let vx = rng.random_range(-SPAWN_MAX_SPEED..SPAWN_MAX_SPEED);
            let vy = rng.random_range(-SPAWN_MAX_SPEED..SPAWN_MAX_SPEED);

            self.particles.push(Particle::new(
                center + Vec2::new(offset_x as f32, offset_y as f32),
                Vec2::new(vx as f32, vy as f32),
            ));
        }

        log::debug!(
            "initialized {} particles around ({}, {})",
            count,
            center.x,
            center.y
        );
    }

    /// Advance every particle by `dt` seconds.
    ///
    /// Passes run in a fixed order over the whole set: integrate, then
    /// boundaries, then pairwise collisions. Separation can nudge a particle
    /// past an edge, so positions are clamped once more after any collision.
    /// A `dt` that is not a positive finite number leaves the state untouched.
    pub fn step(&mut self, dt: f32, bounds: &ViewportBounds) {
        if !dt.is_finite() || dt <= 0.0 {
            log::trace!("skipping step with dt = {}", dt);
            return;
        }

        integrate(&mut self.particles, dt);
        resolve_boundaries(&mut self.particles, bounds);
        if resolve_collisions(&mut self.particles, self.collision_mode) > 0 {
            clamp_positions(&mut self.particles, bounds);
        }
    }

    pub fn collision_mode(&self) -> CollisionMode {
        self.collision_mode
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access for hosts and tests that need to place particles by hand
    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Sum of per-particle kinetic energy (unit mass)
    pub fn kinetic_energy(&self) -> f32 {
        self.particles.iter().map(Particle::kinetic_energy).sum()
    }
}

impl<'a> IntoIterator for &'a ParticleSystem {
    type Item = &'a Particle;
    type IntoIter = std::slice::Iter<'a, Particle>;

    fn into_iter(self) -> Self::IntoIter {
        self.particles.iter()
    }
}
