//! Rendering boundary: what the simulation hands to a renderer each frame.
//!
//! # Invariants
//! - Backends never see the scene mutably; they only receive poses, particle
//!   buffers, the light position and elapsed time.
//! - Only what a [`TickReport`](orrery_kernel::TickReport) marks as changed is
//!   pushed.
//!
//! A GPU backend implements [`RenderBoundary`]; [`RecordingBoundary`] keeps the
//! latest frame in memory for headless runs.

mod boundary;
mod gpu_types;
mod lights;
mod recording;
mod renderer;

pub use boundary::{RenderBoundary, bind_scene, present};
pub use gpu_types::{ModelUniform, ParticleInstance, pack_particles};
pub use lights::{DirectionalLight, LightRig, PointLight};
pub use recording::RecordingBoundary;
pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "orrery-render v0.1.0"
}
