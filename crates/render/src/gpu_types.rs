use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use orrery_particles::Particle;

/// One corona particle as laid out in the instance buffer.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: f32,
    pub _pad: [f32; 3],
}

impl From<&Particle> for ParticleInstance {
    fn from(p: &Particle) -> Self {
        Self {
            position: p.position.to_array(),
            radius: p.radius,
            color: p.color,
            _pad: [0.0; 3],
        }
    }
}

/// Per-body model matrix uniform, column-major.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl From<Mat4> for ModelUniform {
    fn from(m: Mat4) -> Self {
        Self {
            model: m.to_cols_array_2d(),
        }
    }
}

/// Pack a particle slice into instance-buffer bytes.
pub fn pack_particles(particles: &[Particle]) -> Vec<u8> {
    let instances: Vec<ParticleInstance> = particles.iter().map(ParticleInstance::from).collect();
    bytemuck::cast_slice(&instances).to_vec()
}
