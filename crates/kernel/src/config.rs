//! Scene configuration: bodies, particle corona, and time steps.
//!
//! Loaded once at setup; nothing here is reloaded while a scene runs.

use std::collections::HashSet;
use std::path::Path;

use orrery_common::{ClockError, DEFAULT_DAYS_PER_FRAME, DEFAULT_PARTICLE_DT, SimulationClock};
use orrery_particles::{DEFAULT_PARTICLE_COUNT, DEFAULT_SHELL_RADIUS};
use serde::{Deserialize, Serialize};

use crate::body::{ElementsError, OrbitalElements};

/// Errors from loading or validating a scene configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("scene has no bodies")]
    NoBodies,
    #[error("duplicate body name: {0}")]
    DuplicateBody(String),
    #[error("body {name}: {source}")]
    InvalidBody {
        name: String,
        #[source]
        source: ElementsError,
    },
    #[error("shell radius must be positive and finite, got {0}")]
    InvalidShellRadius(f32),
    #[error(transparent)]
    Clock(#[from] ClockError),
}

/// One body as written in the configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyConfig {
    pub name: String,
    /// Logical name of the color texture.
    pub texture: String,
    #[serde(flatten)]
    pub elements: OrbitalElements,
}

/// Particle corona settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    pub shell_radius: f32,
    /// Fixed seed for reproducible spawning; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            shell_radius: DEFAULT_SHELL_RADIUS,
            seed: None,
        }
    }
}

/// Complete scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Bodies in creation order; the first one is the light source.
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub particles: ParticleConfig,
    #[serde(default = "default_days_per_frame")]
    pub days_per_frame: f64,
    #[serde(default = "default_particle_dt")]
    pub particle_dt: f32,
}

fn default_days_per_frame() -> f64 {
    DEFAULT_DAYS_PER_FRAME
}

fn default_particle_dt() -> f32 {
    DEFAULT_PARTICLE_DT
}

impl SceneConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&data)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Build the clock described by this config.
    pub fn clock(&self) -> Result<SimulationClock, ConfigError> {
        Ok(SimulationClock::new(self.days_per_frame, self.particle_dt)?)
    }

    /// Check every precondition the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bodies.is_empty() {
            return Err(ConfigError::NoBodies);
        }
        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.name.as_str()) {
                return Err(ConfigError::DuplicateBody(body.name.clone()));
            }
            body.elements
                .validate()
                .map_err(|source| ConfigError::InvalidBody {
                    name: body.name.clone(),
                    source,
                })?;
        }
        let r = self.particles.shell_radius;
        if !(r.is_finite() && r > 0.0) {
            return Err(ConfigError::InvalidShellRadius(r));
        }
        self.clock()?;
        Ok(())
    }
}

impl Default for SceneConfig {
    /// The sun and eight planets.
    fn default() -> Self {
        Self {
            bodies: solar_system_bodies(),
            particles: ParticleConfig::default(),
            days_per_frame: DEFAULT_DAYS_PER_FRAME,
            particle_dt: DEFAULT_PARTICLE_DT,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn body(
    name: &str,
    size: f32,
    semi_major_axis: f32,
    inclination: f32,
    ascending_node_longitude: f32,
    start_anomaly: f32,
    orbit_period_days: f32,
    axial_tilt: f32,
    axial_period_days: f32,
) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        texture: format!("{name}_color"),
        elements: OrbitalElements {
            size,
            semi_major_axis,
            inclination,
            ascending_node_longitude,
            start_anomaly,
            orbit_period_days,
            axial_tilt,
            axial_period_days,
        },
    }
}

/// Scene-scaled elements for the sun and the eight planets.
pub fn solar_system_bodies() -> Vec<BodyConfig> {
    vec![
        body("sun", 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 25.67),
        body("mercury", 0.15, 3.87, 7.0, 48.33, 172.75, 88.0, 0.01, 58.65),
        body("venus", 0.28, 7.23, 3.39, 76.68, 49.31, 224.7, 177.4, -243.0),
        body("earth", 0.3, 10.0, 0.0, 163.97, 358.19, 365.2, 23.4, 1.0),
        body("mars", 0.20, 15.2, 1.85, 49.56, 19.1, 687.0, 25.2, 1.03),
        body("jupiter", 0.8, 52.0, 1.3, 100.49, 18.72, 4331.0, 3.1, 0.41),
        body("saturn", 0.7, 95.8, 2.48, 113.69, 320.38, 10747.0, 26.7, 0.45),
        body("uranus", 0.5, 192.0, 0.77, 73.96, 142.9, 30589.0, 97.8, -0.72),
        body("neptune", 0.5, 300.5, 1.77, 131.77, 266.6, 59800.0, 28.3, 0.67),
    ]
}
