//! Solar corona particles.
//!
//! # Invariants
//! - The population size is fixed at initialization.
//! - Positions change only through explicit Euler integration; velocities
//!   are never clamped or renormalized.
//! - All randomness comes from a caller-supplied generator.

pub mod particle;
pub mod population;

pub use particle::Particle;
pub use population::{
    DEFAULT_PARTICLE_COUNT, DEFAULT_SHELL_RADIUS, DistanceStats, ParticlePopulation,
};
