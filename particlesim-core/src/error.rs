use thiserror::Error;

/// Result alias used across the simulation core
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors raised while configuring a simulation.
///
/// Stepping never fails; only construction and host-driven changes
/// (viewport resize, re-initialization) validate their inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("viewport must have positive extent, got {width}x{height}")]
    InvalidBounds { width: u32, height: u32 },

    #[error("fixed timestep must be finite and > 0, got {0}")]
    InvalidTimestep(f32),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SimError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
