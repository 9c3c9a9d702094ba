//! Developer tooling: scene inspector and particle diagnostics.
//!
//! # Invariants
//! - Tools only read the scene.

mod inspector;

pub use inspector::{BodyInfo, ParticleStats, SceneInspector, SceneSummary};

pub fn crate_info() -> &'static str {
    "orrery-tools v0.1.0"
}
