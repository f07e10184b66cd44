//! Tunable constants for the particle simulation.
//!
//! Screen space is used throughout: the origin is the top-left corner of the
//! viewport and +y points down, so gravity is positive.

/// Downward acceleration in pixels/s^2 (exaggerated for visibility)
pub const GRAVITY: f32 = 98.0;

/// Fraction of the reflected velocity kept after hitting a viewport edge
pub const DAMPING: f32 = 0.6;

/// Fixed physics step in seconds (16 ms, roughly 60 steps per second)
pub const FIXED_TIMESTEP: f32 = 0.016;

/// Edge length of a particle's square footprint in pixels
pub const DEFAULT_PARTICLE_SIZE: f32 = 5.0;

pub const DEFAULT_PARTICLE_COUNT: usize = 1000;

pub const DEFAULT_WIDTH: u32 = 1920;
pub const DEFAULT_HEIGHT: u32 = 960;

/// Half-extent of the spawn square around the viewport center.
/// Offsets are drawn from `[-SPAWN_HALF_EXTENT, SPAWN_HALF_EXTENT)`.
pub const SPAWN_HALF_EXTENT: i32 = 100;

/// Initial velocity components are drawn from `[-SPAWN_MAX_SPEED, SPAWN_MAX_SPEED)`.
pub const SPAWN_MAX_SPEED: i32 = 5;
