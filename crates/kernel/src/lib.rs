//! Scene kernel: orbital bodies, configuration, and the per-frame driver.
//!
//! # Invariants
//! - A body's world transform is a pure function of its elements and the
//!   simulated time.
//! - Orbit and spin periods are never zero once a body exists.
//! - All per-frame state changes are reported through [`TickReport`].

pub mod body;
pub mod config;
pub mod orbits;
pub mod scene;

pub use body::{Body, ElementsError, OrbitalElements, derive_world_transform};
pub use config::{BodyConfig, ConfigError, ParticleConfig, SceneConfig};
pub use orbits::Orbits;
pub use scene::{Scene, TickReport};
