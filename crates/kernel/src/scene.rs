use glam::Vec3;
use orrery_common::{BodyId, SimulationClock, Tickable};
use orrery_particles::ParticlePopulation;

use crate::body::Body;
use crate::config::{ConfigError, SceneConfig};
use crate::orbits::Orbits;

/// What changed during one [`Scene::tick`].
///
/// This is the only signal the rendering side gets; nothing is flagged on
/// shared objects.
#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    /// Frame number after the tick.
    pub frame: u64,
    /// Simulated days after the tick.
    pub time_days: f64,
    /// Bodies whose pose was replaced, in creation order.
    pub updated_bodies: Vec<BodyId>,
    /// New position of the primary body's point light.
    pub light_position: Option<Vec3>,
    /// Number of particles integrated this frame.
    pub particles_advanced: usize,
}

impl TickReport {
    /// Whether the particle buffers must be re-uploaded.
    pub fn particles_dirty(&self) -> bool {
        self.particles_advanced > 0
    }
}

/// The frame driver: one clock, the bodies, and the particle corona.
///
/// Each [`tick`](Scene::tick) is atomic from the outside, so a driver loop
/// may stop between any two ticks.
#[derive(Debug, Clone)]
pub struct Scene {
    clock: SimulationClock,
    orbits: Orbits,
    particles: ParticlePopulation,
}

impl Scene {
    pub fn new(clock: SimulationClock, orbits: Orbits, particles: ParticlePopulation) -> Self {
        Self {
            clock,
            orbits,
            particles,
        }
    }

    /// Validate `config` and build the scene it describes, posed at t = 0.
    pub fn from_config(config: &SceneConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let clock = config.clock()?;

        let mut orbits = Orbits::new();
        for body in &config.bodies {
            let created = Body::new(&body.name, &body.texture, body.elements).map_err(
                |source| ConfigError::InvalidBody {
                    name: body.name.clone(),
                    source,
                },
            )?;
            orbits.add(created);
        }

        let particles = ParticlePopulation::with_seed(
            config.particles.count,
            config.particles.shell_radius,
            config.particles.seed,
        );

        tracing::info!(
            bodies = orbits.len(),
            particles = particles.len(),
            days_per_frame = clock.days_per_frame(),
            particle_dt = clock.particle_dt(),
            "scene created"
        );

        Ok(Self::new(clock, orbits, particles))
    }

    /// The default solar system with a seeded corona.
    pub fn solar_system(seed: u64) -> Result<Self, ConfigError> {
        let mut config = SceneConfig::default();
        config.particles.seed = Some(seed);
        Self::from_config(&config)
    }

    /// Advance one frame.
    ///
    /// Order: clock, body poses, light position, particles.
    pub fn tick(&mut self) -> TickReport {
        let _span = tracing::info_span!("scene_tick", frame = self.clock.frame() + 1).entered();

        self.clock.advance();
        let updated_bodies = self.orbits.tick(&self.clock);
        let light_position = self.orbits.light_position();
        let particles_advanced = self.particles.tick(&self.clock);

        tracing::trace!(
            time_days = self.clock.global_time_days(),
            bodies = updated_bodies.len(),
            particles = particles_advanced,
            "tick complete"
        );

        TickReport {
            frame: self.clock.frame(),
            time_days: self.clock.global_time_days(),
            updated_bodies,
            light_position,
            particles_advanced,
        }
    }

    /// Run `n` ticks and return the last report, if any.
    pub fn run(&mut self, n: u64) -> Option<TickReport> {
        let mut last = None;
        for _ in 0..n {
            last = Some(self.tick());
        }
        last
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn orbits(&self) -> &Orbits {
        &self.orbits
    }

    pub fn particles(&self) -> &ParticlePopulation {
        &self.particles
    }
}
