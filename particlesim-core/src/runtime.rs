use crate::bounds::ViewportBounds;
use crate::clock::SimulationClock;
use crate::config::SimulationConfig;
use crate::engine::{Particle, ParticleSystem};
use crate::error::Result;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Read-only snapshot of a particle, handed to the host for drawing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleState {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl ParticleState {
    /// Screen rectangle `(left, top, width, height)` of the particle's
    /// square, truncated to whole pixels
    pub fn rect(&self) -> (i32, i32, i32, i32) {
        let half = self.size / 2.0;
        (
            (self.pos.x - half) as i32,
            (self.pos.y - half) as i32,
            self.size as i32,
            self.size as i32,
        )
    }
}

impl From<&Particle> for ParticleState {
    fn from(p: &Particle) -> Self {
        Self {
            pos: p.pos,
            vel: p.vel,
            size: p.size,
        }
    }
}

/// Everything a host needs to drive one simulation: the viewport, the
/// fixed-step clock, the particles and the random source used to seed them.
#[derive(Debug)]
pub struct SimulationContext {
    pub config: SimulationConfig,
    pub bounds: ViewportBounds,
    pub clock: SimulationClock,
    pub system: ParticleSystem,
    rng: StdRng,
    /// Simulated seconds since the last (re)initialization
    pub elapsed: f32,
    pub frame_count: u64,
    pub step_count: u64,
}

impl SimulationContext {
    /// Viewport changed on the host side. Takes effect on the next step;
    /// particles are not moved now.
    pub fn set_bounds(&mut self, width: u32, height: u32) -> Result<()> {
        self.bounds.resize(width, height)?;
        log::info!("Resized to Width: {}, Height: {}", width, height);
        Ok(())
    }

    /// Replace the particle set with `count` new particles, drawing from the
    /// context's random source
    pub fn initialize(&mut self, count: usize) {
        self.system.initialize(count, &self.bounds, &mut self.rng);
        self.clock.reset();
        self.elapsed = 0.0;
        self.step_count = 0;
    }

    /// Re-seed the random source from the config (when it has a seed) and
    /// respawn the configured number of particles
    pub fn reset(&mut self) {
        if let Some(seed) = self.config.seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self.frame_count = 0;
        self.initialize(self.config.particle_count);
    }

    pub fn particles(&self) -> &[Particle] {
        self.system.particles()
    }
}

/// Build a context from a config and spawn its particles
pub fn build_simulation_context(config: SimulationConfig) -> Result<SimulationContext> {
    let bounds = config.bounds()?;
    let clock = SimulationClock::with_policy(config.remainder_policy);
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    log::debug!(
        "building simulation: {} particles, {}x{}, {:?}, seed {}",
        config.particle_count,
        bounds.width(),
        bounds.height(),
        config.collision_mode,
        seed
    );

    let mut ctx = SimulationContext {
        system: ParticleSystem::new(config.collision_mode),
        config,
        bounds,
        clock,
        rng: StdRng::seed_from_u64(seed),
        elapsed: 0.0,
        frame_count: 0,
        step_count: 0,
    };
    ctx.initialize(ctx.config.particle_count);
    Ok(ctx)
}

/// Advance the simulation by exactly `dt` seconds in one step
pub fn step_simulation(ctx: &mut SimulationContext, dt: f32) {
    if !dt.is_finite() || dt <= 0.0 {
        return;
    }
    ctx.system.step(dt, &ctx.bounds);
    ctx.elapsed += dt;
    ctx.step_count += 1;
}

/// Consume one frame of wall-clock time, applying every step the clock
/// hands out. Returns the number of steps applied.
pub fn advance_frame(ctx: &mut SimulationContext, frame_dt: f32) -> usize {
    let steps = ctx.clock.advance(frame_dt);
    let count = steps.len();
    for dt in steps {
        step_simulation(ctx, dt);
    }
    ctx.frame_count += 1;
    count
}

/// Snapshot every particle for rendering
pub fn get_particle_states(ctx: &SimulationContext) -> Vec<ParticleState> {
    ctx.system.iter().map(ParticleState::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionMode;

    fn small_config() -> SimulationConfig {
        SimulationConfig {
            particle_count: 25,
            width: 640,
            height: 480,
            collision_mode: CollisionMode::UniquePairs,
            ..SimulationConfig::default()
        }
        .with_seed(99)
    }

    #[test]
    fn build_rejects_zero_viewport() {
        let config = SimulationConfig {
            width: 0,
            ..small_config()
        };
        assert!(build_simulation_context(config).is_err());
    }

    #[test]
    fn advance_frame_tracks_elapsed_time() {
        let mut ctx = build_simulation_context(small_config()).unwrap();
        let applied = advance_frame(&mut ctx, 0.05);

        assert_eq!(applied, 4);
        assert_eq!(ctx.step_count, 4);
        assert_eq!(ctx.frame_count, 1);
        assert!((ctx.elapsed - 0.05).abs() < 1e-6);
    }

    #[test]
    fn reset_with_seed_reproduces_spawn() {
        let mut ctx = build_simulation_context(small_config()).unwrap();
        let first = get_particle_states(&ctx);

        advance_frame(&mut ctx, 0.1);
        ctx.reset();

        assert_eq!(get_particle_states(&ctx), first);
        assert_eq!(ctx.elapsed, 0.0);
    }

    #[test]
    fn rect_is_centered_on_position() {
        let state = ParticleState {
            pos: Vec2::new(10.0, 20.0),
            vel: Vec2::ZERO,
            size: 5.0,
        };
        assert_eq!(state.rect(), (7, 17, 5, 5));
    }

    #[test]
    fn set_bounds_validates() {
        let mut ctx = build_simulation_context(small_config()).unwrap();
        assert!(ctx.set_bounds(0, 100).is_err());
        ctx.set_bounds(320, 240).unwrap();
        assert_eq!(ctx.bounds.width(), 320);
    }
}
