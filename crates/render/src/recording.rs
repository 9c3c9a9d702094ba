use std::collections::BTreeMap;

use glam::{Mat4, Vec3};
use orrery_assets::BodyAppearance;
use orrery_common::BodyId;
use orrery_particles::Particle;

use crate::boundary::RenderBoundary;
use crate::gpu_types::{ModelUniform, pack_particles};
use crate::lights::LightRig;

/// In-memory render boundary for headless runs and tests.
///
/// Keeps only the latest value of everything pushed to it.
#[derive(Debug, Default)]
pub struct RecordingBoundary {
    poses: BTreeMap<BodyId, ModelUniform>,
    appearances: BTreeMap<BodyId, BodyAppearance>,
    lights: Option<LightRig>,
    light_position: Option<Vec3>,
    elapsed_seconds: f32,
    particle_uploads: u64,
    particle_bytes: Vec<u8>,
}

impl RecordingBoundary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pose(&self, id: BodyId) -> Option<Mat4> {
        self.poses
            .get(&id)
            .map(|u| Mat4::from_cols_array_2d(&u.model))
    }

    pub fn pose_count(&self) -> usize {
        self.poses.len()
    }

    pub fn appearance(&self, id: BodyId) -> Option<&BodyAppearance> {
        self.appearances.get(&id)
    }

    pub fn lights(&self) -> Option<&LightRig> {
        self.lights.as_ref()
    }

    /// Last point-light position pushed.
    pub fn light_position(&self) -> Option<Vec3> {
        self.light_position
    }

    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed_seconds
    }

    /// Number of particle uploads requested so far.
    pub fn particle_uploads(&self) -> u64 {
        self.particle_uploads
    }

    /// Packed instance buffer from the latest upload.
    pub fn particle_bytes(&self) -> &[u8] {
        &self.particle_bytes
    }
}

impl RenderBoundary for RecordingBoundary {
    fn set_body_pose(&mut self, id: BodyId, pose: Mat4) {
        self.poses.insert(id, ModelUniform::from(pose));
    }

    fn mark_particles_dirty(&mut self, particles: &[Particle]) {
        self.particle_bytes = pack_particles(particles);
        self.particle_uploads += 1;
    }

    fn set_elapsed_time(&mut self, seconds: f32) {
        self.elapsed_seconds = seconds;
    }

    fn update_point_light(&mut self, position: Vec3) {
        self.light_position = Some(position);
        if let Some(rig) = self.lights.as_mut() {
            rig.sun.position = position;
        }
    }

    fn bind_body(&mut self, id: BodyId, appearance: &BodyAppearance) {
        self.appearances.insert(id, appearance.clone());
    }

    fn install_lights(&mut self, rig: &LightRig) {
        self.lights = Some(*rig);
    }
}
