pub mod bounds;
pub mod clock;
pub mod collision;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod runtime;

pub use bounds::ViewportBounds;
pub use clock::{FrameSteps, RemainderPolicy, SimulationClock};
pub use collision::CollisionMode;
pub use config::SimulationConfig;
pub use engine::{Particle, ParticleSystem};
pub use error::{Result, SimError};
pub use runtime::{
    advance_frame, build_simulation_context, get_particle_states, step_simulation,
    ParticleState, SimulationContext,
};
