use orrery_common::{SimulationClock, Tickable};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::particle::Particle;

/// Default corona size.
pub const DEFAULT_PARTICLE_COUNT: usize = 800;
/// Default spawn shell radius (the sun's scene radius).
pub const DEFAULT_SHELL_RADIUS: f32 = 1.0;

/// Fixed-size particle population.
///
/// Allocated once; particles are never added or removed afterwards. Each
/// particle is independent of the others, so iteration order does not affect
/// the result of [`ParticlePopulation::advance`].
#[derive(Debug, Clone, Default)]
pub struct ParticlePopulation {
    particles: Vec<Particle>,
}

/// Distance-from-origin diagnostics over a population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceStats {
    pub min: f32,
    pub mean: f32,
    pub max: f32,
}

impl ParticlePopulation {
    /// Spawn `count` particles on a shell of `shell_radius`, drawing all
    /// randomness from `rng`.
    pub fn initialize<R: Rng + ?Sized>(count: usize, shell_radius: f32, rng: &mut R) -> Self {
        let particles: Vec<Particle> = (0..count)
            .map(|_| Particle::spawn_on_shell(shell_radius, rng))
            .collect();
        tracing::debug!(count, shell_radius, "particle population initialized");
        Self { particles }
    }

    /// Same as [`initialize`](Self::initialize) with a seeded ChaCha8 stream,
    /// or OS entropy when `seed` is `None`.
    pub fn with_seed(count: usize, shell_radius: f32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self::initialize(count, shell_radius, &mut rng)
    }

    /// Build a population from explicit particles.
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Advance every particle by `dt` with an explicit Euler step.
    pub fn advance(&mut self, dt: f32) {
        for p in &mut self.particles {
            p.integrate(dt);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Distance of each particle from the origin, in population order.
    pub fn distances(&self) -> impl Iterator<Item = f32> + '_ {
        self.particles.iter().map(Particle::distance)
    }

    /// Min/mean/max distance from the origin, `None` for an empty population.
    pub fn distance_stats(&self) -> Option<DistanceStats> {
        if self.particles.is_empty() {
            return None;
        }
        let mut min = f32::INFINITY;
        let mut max = 0.0_f32;
        let mut sum = 0.0_f64;
        for d in self.distances() {
            min = min.min(d);
            max = max.max(d);
            sum += d as f64;
        }
        Some(DistanceStats {
            min,
            mean: (sum / self.particles.len() as f64) as f32,
            max,
        })
    }
}

impl Tickable for ParticlePopulation {
    /// Number of particles advanced.
    type Changes = usize;

    fn tick(&mut self, clock: &SimulationClock) -> usize {
        self.advance(clock.particle_dt());
        self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::{MAX_SPEED, MIN_SPEED};
    use glam::Vec3;

    #[test]
    fn initialize_exact_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let pop = ParticlePopulation::initialize(800, 1.0, &mut rng);
        assert_eq!(pop.len(), 800);
    }

    #[test]
    fn initial_positions_on_shell() {
        let r = 1.0;
        let pop = ParticlePopulation::with_seed(800, r, Some(42));
        for d in pop.distances() {
            assert!(d >= 0.95 * r - 1e-5, "particle below shell: {d}");
            assert!(d <= r + 1e-5, "particle above shell: {d}");
        }
    }

    #[test]
    fn initial_radial_speed_in_range() {
        let pop = ParticlePopulation::with_seed(800, 1.0, Some(42));
        for p in pop.particles() {
            let radial = p.velocity.dot(p.position.normalize());
            assert!(radial >= MIN_SPEED - 1e-4, "radial speed {radial}");
            assert!(radial <= MAX_SPEED + 1e-4, "radial speed {radial}");
        }
    }

    #[test]
    fn same_seed_same_population() {
        let a = ParticlePopulation::with_seed(64, 1.0, Some(9));
        let b = ParticlePopulation::with_seed(64, 1.0, Some(9));
        assert_eq!(a.particles(), b.particles());

        let c = ParticlePopulation::with_seed(64, 1.0, Some(10));
        assert_ne!(a.particles(), c.particles());
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut pop = ParticlePopulation::from_particles(vec![Particle {
            position: Vec3::new(1.0, 0.0, 0.0),
            velocity: Vec3::new(0.0, 1.0, 0.0),
            color: 1.0,
            radius: 0.02,
        }]);
        pop.advance(1.0 / 60.0);
        assert_eq!(pop.particles()[0].position, Vec3::new(1.0, 1.0 / 60.0, 0.0));
    }

    #[test]
    fn advance_keeps_velocity() {
        let mut pop = ParticlePopulation::with_seed(100, 1.0, Some(1));
        let before: Vec<Vec3> = pop.particles().iter().map(|p| p.velocity).collect();
        for _ in 0..10 {
            pop.advance(1.0 / 60.0);
        }
        let after: Vec<Vec3> = pop.particles().iter().map(|p| p.velocity).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn particles_drift_outward() {
        let mut pop = ParticlePopulation::with_seed(200, 1.0, Some(2));
        let start = pop.distance_stats().unwrap();
        for _ in 0..60 {
            pop.advance(1.0 / 60.0);
        }
        let end = pop.distance_stats().unwrap();
        assert!(end.mean > start.mean);
        assert!(end.min > start.min);
    }

    #[test]
    fn tick_uses_clock_dt() {
        let mut a = ParticlePopulation::with_seed(16, 1.0, Some(4));
        let mut b = a.clone();
        let clock = SimulationClock::default();
        assert_eq!(a.tick(&clock), 16);
        b.advance(clock.particle_dt());
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn empty_population_has_no_stats() {
        let pop = ParticlePopulation::default();
        assert!(pop.is_empty());
        assert!(pop.distance_stats().is_none());
    }
}
