use crate::bounds::ViewportBounds;
use crate::clock::RemainderPolicy;
use crate::collision::CollisionMode;
use crate::constants::{DEFAULT_HEIGHT, DEFAULT_PARTICLE_COUNT, DEFAULT_WIDTH};
use crate::error::Result;

/// Initialization-time settings for one simulation run.
///
/// Physical constants stay compile-time; this only carries what a host
/// chooses per run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub particle_count: usize,
    pub width: u32,
    pub height: u32,
    pub collision_mode: CollisionMode,
    pub remainder_policy: RemainderPolicy,
    /// `None` draws a fresh seed from the thread RNG
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and return the viewport described by this config
    pub fn bounds(&self) -> Result<ViewportBounds> {
        ViewportBounds::new(self.width, self.height)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            collision_mode: CollisionMode::default(),
            remainder_policy: RemainderPolicy::default(),
            seed: None,
        }
    }
}
