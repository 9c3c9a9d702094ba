use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Spawn distance band as a fraction of the shell radius.
pub const SHELL_INNER_FRACTION: f32 = 0.95;
/// Outward speed range.
pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
/// Peak-to-peak magnitude of the tangential swirl.
pub const SWIRL_STRENGTH: f32 = 0.2;
/// Sprite radius range.
pub const MIN_RADIUS: f32 = 0.02;
pub const MAX_RADIUS: f32 = 0.05;

/// A single point mass of the corona.
///
/// Velocity is fixed at spawn; only the position changes afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color: f32,
    pub radius: f32,
}

impl Particle {
    /// Spawn a particle just inside a sphere of `shell_radius` around the
    /// origin, moving outward with a small swirl around the Z axis.
    pub fn spawn_on_shell<R: Rng + ?Sized>(shell_radius: f32, rng: &mut R) -> Self {
        let dir = random_unit_direction(rng);

        let u: f32 = rng.random();
        let dist = shell_radius * (SHELL_INNER_FRACTION + (1.0 - SHELL_INNER_FRACTION) * u);
        let position = dir * dist;

        let speed = MIN_SPEED + (MAX_SPEED - MIN_SPEED) * rng.random::<f32>();
        let tangent = swirl_tangent(dir);
        let swirl = SWIRL_STRENGTH * (rng.random::<f32>() - 0.5);
        let velocity = dir * speed + tangent * swirl;

        let radius = MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * rng.random::<f32>();

        Self {
            position,
            velocity,
            color: 1.0,
            radius,
        }
    }

    /// One explicit Euler step. No damping, no acceleration.
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }

    /// Distance from the origin.
    pub fn distance(&self) -> f32 {
        self.position.length()
    }
}

/// Unit tangent around the Z axis at `dir`. Zero at the poles, where
/// `(-y, x, 0)` vanishes.
pub fn swirl_tangent(dir: Vec3) -> Vec3 {
    Vec3::new(-dir.y, dir.x, 0.0).normalize_or_zero()
}

/// Uniform direction on the unit sphere: `z` uniform in [-1, 1], `phi`
/// uniform in [0, 2pi).
pub fn random_unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let z = 2.0 * (rng.random::<f32>() - 0.5);
    let phi = std::f32::consts::TAU * rng.random::<f32>();
    let r_xy = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(r_xy * phi.cos(), r_xy * phi.sin(), z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    /// Always yields zero, so every uniform draw is 0.0.
    struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }
        fn next_u64(&mut self) -> u64 {
            0
        }
        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }

    #[test]
    fn tangent_vanishes_at_both_poles() {
        assert_eq!(swirl_tangent(Vec3::Z), Vec3::ZERO);
        assert_eq!(swirl_tangent(Vec3::NEG_Z), Vec3::ZERO);
        assert_eq!(swirl_tangent(Vec3::X), Vec3::Y);
    }

    #[test]
    fn spawn_at_south_pole_is_purely_radial() {
        let p = Particle::spawn_on_shell(1.0, &mut ZeroRng);
        assert_eq!(p.position, Vec3::new(0.0, 0.0, -0.95));
        assert!(p.velocity.is_finite());
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.velocity.y, 0.0);
        assert_eq!(p.velocity.z, -MIN_SPEED);
        assert_eq!(p.radius, MIN_RADIUS);
    }

    #[test]
    fn integrate_single_step_is_exact() {
        let mut p = Particle {
            position: Vec3::new(1.0, 0.0, 0.0),
            velocity: Vec3::new(0.0, 1.0, 0.0),
            color: 1.0,
            radius: 0.03,
        };
        let dt = 1.0 / 60.0;
        p.integrate(dt);
        assert_eq!(p.position, Vec3::new(1.0, dt, 0.0));
        assert_eq!(p.velocity, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn directions_are_unit_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..1000 {
            let d = random_unit_direction(&mut rng);
            assert!((d.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn swirl_is_perpendicular_to_radial() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let p = Particle::spawn_on_shell(1.0, &mut rng);
            let dir = p.position.normalize();
            let radial = p.velocity.dot(dir);
            let tangential = (p.velocity - dir * radial).length();
            assert!(tangential <= SWIRL_STRENGTH * 0.5 + 1e-5);
        }
    }

    #[test]
    fn color_and_radius_ranges() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..500 {
            let p = Particle::spawn_on_shell(1.0, &mut rng);
            assert_eq!(p.color, 1.0);
            assert!(p.radius >= MIN_RADIUS && p.radius <= MAX_RADIUS);
        }
    }
}
