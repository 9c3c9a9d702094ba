//! Shared types for the orrery workspace.
//!
//! # Invariants
//! - Transform builders are pure; the same arguments give bit-identical matrices.
//! - Simulated time only moves forward, one fixed step per frame.

pub mod clock;
pub mod transform;
pub mod types;

pub use clock::{
    ClockError, DEFAULT_DAYS_PER_FRAME, DEFAULT_PARTICLE_DT, SimulationClock, Tickable,
};
pub use types::BodyId;
