//! Pairwise particle-particle collision resolution.
//!
//! Every pair is checked exhaustively. Overlapping pairs swap the velocity
//! components along their line of centers (equal-mass elastic collision) and
//! are pushed apart until they just touch.

use crate::engine::Particle;
use glam::Vec2;

/// Which pairs the collision pass visits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionMode {
    /// No particle-particle interaction
    Disabled,
    /// Every ordered pair `(i, j)` with `i != j`, row-major. An overlapping
    /// pair can be resolved once as `(i, j)` and again as `(j, i)`.
    #[default]
    OrderedPairs,
    /// Each unordered pair once (`i < j`)
    UniquePairs,
}

/// Run the collision pass over `particles`, returning how many pair
/// resolutions were applied.
pub fn resolve_collisions(particles: &mut [Particle], mode: CollisionMode) -> usize {
    let n = particles.len();
    let mut resolved = 0;

    match mode {
        CollisionMode::Disabled => {}
        CollisionMode::OrderedPairs => {
            for i in 0..n {
                for j in 0..n {
                    if i != j && resolve_at(particles, i, j) {
                        resolved += 1;
                    }
                }
            }
        }
        CollisionMode::UniquePairs => {
            for i in 0..n {
                for j in (i + 1)..n {
                    if resolve_at(particles, i, j) {
                        resolved += 1;
                    }
                }
            }
        }
    }

    resolved
}

fn resolve_at(particles: &mut [Particle], i: usize, j: usize) -> bool {
    let (mut a, mut b) = (particles[i], particles[j]);
    if !resolve_pair(&mut a, &mut b) {
        return false;
    }
    particles[i] = a;
    particles[j] = b;
    true
}

/// Resolve a single pair if their footprints overlap.
///
/// Overlap means the center distance is below the mean of the two sizes.
/// Returns `false` and leaves both untouched otherwise. Coincident centers
/// resolve along +x.
pub fn resolve_pair(a: &mut Particle, b: &mut Particle) -> bool {
    let offset = b.pos - a.pos;
    let min_distance = (a.size + b.size) / 2.0;
    let distance = offset.length();
    if distance >= min_distance {
        return false;
    }

    // atan2(0, 0) is 0, so this never divides by the distance
    let normal = Vec2::from_angle(offset.y.atan2(offset.x));
    let to_local = Vec2::new(normal.x, -normal.y);

    // x = normal component, y = tangential component
    let local_a = to_local.rotate(a.vel);
    let local_b = to_local.rotate(b.vel);

    a.vel = normal.rotate(Vec2::new(local_b.x, local_a.y));
    b.vel = normal.rotate(Vec2::new(local_a.x, local_b.y));

    let push = normal * ((min_distance - distance) / 2.0);
    a.pos -= push;
    b.pos += push;

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::test_helpers::{approx_eq_f32, approx_eq_vec2};

    fn pair(a: (f32, f32), b: (f32, f32), size: f32) -> [Particle; 2] {
        [
            Particle::new(Vec2::new(a.0, a.1), Vec2::ZERO).with_size(size),
            Particle::new(Vec2::new(b.0, b.1), Vec2::ZERO).with_size(size),
        ]
    }

    #[test]
    fn separated_particles_are_untouched() {
        let mut particles = pair((0.0, 0.0), (20.0, 0.0), 10.0);
        particles[0].vel = Vec2::new(1.0, 2.0);
        let before = particles;

        assert_eq!(resolve_collisions(&mut particles, CollisionMode::OrderedPairs), 0);
        assert_eq!(particles, before);
    }

    #[test]
    fn touching_particles_do_not_collide() {
        let mut particles = pair((0.0, 0.0), (10.0, 0.0), 10.0);
        assert_eq!(resolve_collisions(&mut particles, CollisionMode::UniquePairs), 0);
    }

    #[test]
    fn diagonal_overlap_swaps_only_normal_components() {
        let mut particles = pair((0.0, 0.0), (3.0, 4.0), 10.0);
        let normal = Vec2::new(0.6, 0.8);
        let tangent = Vec2::new(-0.8, 0.6);
        particles[0].vel = normal * 2.0 + tangent * 1.0;
        particles[1].vel = normal * -3.0 + tangent * 5.0;

        let [mut a, mut b] = particles;
        assert!(resolve_pair(&mut a, &mut b));

        assert!(approx_eq_vec2(a.vel, normal * -3.0 + tangent * 1.0, 1e-4));
        assert!(approx_eq_vec2(b.vel, normal * 2.0 + tangent * 5.0, 1e-4));
        assert!(approx_eq_f32(a.pos.distance(b.pos), 10.0, 1e-4));
    }

    #[test]
    fn coincident_centers_separate_along_x_without_nan() {
        let mut particles = pair((50.0, 50.0), (50.0, 50.0), 4.0);
        particles[0].vel = Vec2::new(1.0, 1.0);

        resolve_collisions(&mut particles, CollisionMode::UniquePairs);

        assert_eq!(particles[0].pos, Vec2::new(48.0, 50.0));
        assert_eq!(particles[1].pos, Vec2::new(52.0, 50.0));
        assert!(particles.iter().all(|p| p.pos.is_finite() && p.vel.is_finite()));
    }

    #[test]
    fn disabled_mode_skips_pass() {
        let mut particles = pair((0.0, 0.0), (1.0, 0.0), 10.0);
        let before = particles;
        assert_eq!(resolve_collisions(&mut particles, CollisionMode::Disabled), 0);
        assert_eq!(particles, before);
    }

    #[test]
    fn single_particle_never_collides_with_itself() {
        let mut particles = [Particle::new(Vec2::new(5.0, 5.0), Vec2::new(1.0, 0.0))];
        assert_eq!(resolve_collisions(&mut particles, CollisionMode::OrderedPairs), 0);
        assert_eq!(particles[0].vel, Vec2::new(1.0, 0.0));
    }
}
