use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// Point light that follows the primary body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec4,
    pub diffuse: Vec4,
    pub specular: f32,
    /// Constant, linear, quadratic, unused.
    pub attenuation: Vec4,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub diffuse: Vec4,
    pub specular: f32,
}

/// Scene lighting, installed once at setup.
///
/// Only the point-light position changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightRig {
    pub ambient: Vec4,
    pub sun: PointLight,
    pub fill: DirectionalLight,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: Vec4::new(0.04, 0.04, 0.05, 1.0),
            sun: PointLight {
                position: Vec3::ZERO,
                ambient: Vec4::new(0.05, 0.04, 0.03, 1.0),
                diffuse: Vec4::new(1.0, 0.9, 0.7, 1.0),
                specular: 0.5,
                attenuation: Vec4::new(1.0, 0.02, 0.0, 0.0),
            },
            fill: DirectionalLight {
                direction: Vec3::new(-0.5, -0.2, -1.0),
                diffuse: Vec4::new(0.25, 0.28, 0.32, 1.0),
                specular: 0.2,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rig_sits_at_origin() {
        let rig = LightRig::default();
        assert_eq!(rig.sun.position, Vec3::ZERO);
        assert_eq!(rig.sun.specular, 0.5);
        assert_eq!(rig.fill.direction, Vec3::new(-0.5, -0.2, -1.0));
        assert_eq!(rig.sun.attenuation, Vec4::new(1.0, 0.02, 0.0, 0.0));
    }
}
