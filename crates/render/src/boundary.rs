use glam::{Mat4, Vec3};
use orrery_assets::{AssetStore, BodyAppearance};
use orrery_common::BodyId;
use orrery_kernel::{Scene, TickReport};
use orrery_particles::Particle;

use crate::lights::LightRig;

/// What the simulation pushes to a rendering backend.
///
/// Implementations never see the scene itself, so they cannot mutate it.
pub trait RenderBoundary {
    /// Replace the current pose of body `id`.
    fn set_body_pose(&mut self, id: BodyId, pose: Mat4);

    /// Particle buffers changed; upload before the next draw.
    fn mark_particles_dirty(&mut self, particles: &[Particle]);

    /// Simulated seconds since the first frame, for shader time uniforms.
    fn set_elapsed_time(&mut self, seconds: f32);

    fn update_point_light(&mut self, position: Vec3);

    /// Attach mesh, textures and material to a body. Called once at setup.
    fn bind_body(&mut self, _id: BodyId, _appearance: &BodyAppearance) {}

    /// Called once at setup.
    fn install_lights(&mut self, _rig: &LightRig) {}
}

/// Bind every body's appearance and install the lights.
///
/// The primary body gets the emissive material. Returns the number of bodies
/// bound.
pub fn bind_scene<B: RenderBoundary + ?Sized>(
    scene: &Scene,
    store: &AssetStore,
    rig: &LightRig,
    boundary: &mut B,
) -> usize {
    let primary = scene.orbits().primary().map(|b| b.id());
    let mut bound = 0;
    for body in scene.orbits().iter() {
        let emissive = Some(body.id()) == primary;
        let appearance = BodyAppearance::resolve(store, body.texture(), emissive);
        boundary.bind_body(body.id(), &appearance);
        bound += 1;
    }
    boundary.install_lights(rig);
    tracing::info!(bodies = bound, "scene bound to render boundary");
    bound
}

/// Push exactly what `report` marks as changed.
pub fn present<B: RenderBoundary + ?Sized>(
    scene: &Scene,
    report: &TickReport,
    elapsed_seconds: f32,
    boundary: &mut B,
) {
    for &id in &report.updated_bodies {
        match scene.orbits().get(id) {
            Some(body) => boundary.set_body_pose(id, body.world_transform()),
            None => tracing::warn!(%id, "report names unknown body"),
        }
    }
    if let Some(position) = report.light_position {
        boundary.update_point_light(position);
    }
    if report.particles_dirty() {
        boundary.mark_particles_dirty(scene.particles().particles());
    }
    boundary.set_elapsed_time(elapsed_seconds);
}
