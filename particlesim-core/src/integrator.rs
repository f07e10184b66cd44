use crate::bounds::ViewportBounds;
use crate::constants::{DAMPING, GRAVITY};
use crate::engine::Particle;
use glam::Vec2;

/// Explicit Euler step: gravity into velocity, then the new velocity into position
pub fn integrate(particles: &mut [Particle], dt: f32) {
    for particle in particles.iter_mut() {
        particle.vel.y += GRAVITY * dt;
        particle.pos += particle.vel * dt;
    }
}

/// Reflect and damp any particle that left the viewport, clamping it back
/// onto the edge it crossed. Each axis is handled on its own, so a corner
/// crossing bounces on both.
pub fn resolve_boundaries(particles: &mut [Particle], bounds: &ViewportBounds) {
    let extent = bounds.extent();
    for particle in particles.iter_mut() {
        let (x, vx) = reflect_axis(particle.pos.x, particle.vel.x, extent.x);
        let (y, vy) = reflect_axis(particle.pos.y, particle.vel.y, extent.y);
        particle.pos.x = x;
        particle.pos.y = y;
        particle.vel.x = vx;
        particle.vel.y = vy;
    }
}

/// Pull positions back inside the viewport without touching velocities
pub fn clamp_positions(particles: &mut [Particle], bounds: &ViewportBounds) {
    let extent = bounds.extent();
    for particle in particles.iter_mut() {
        particle.pos = particle.pos.clamp(Vec2::ZERO, extent);
    }
}

fn reflect_axis(pos: f32, vel: f32, max: f32) -> (f32, f32) {
    if pos < 0.0 {
        (0.0, -vel * DAMPING)
    } else if pos > max {
        (max, -vel * DAMPING)
    } else {
        (pos, vel)
    }
}
