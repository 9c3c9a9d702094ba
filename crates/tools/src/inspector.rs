use orrery_common::BodyId;
use orrery_kernel::Scene;
use orrery_particles::DistanceStats;

/// Read-only queries against a running scene.
pub struct SceneInspector;

impl SceneInspector {
    /// Produce a summary of the scene state.
    pub fn summary(scene: &Scene) -> SceneSummary {
        let clock = scene.clock();
        SceneSummary {
            frame: clock.frame(),
            time_days: clock.global_time_days(),
            body_count: scene.orbits().len(),
            particle_count: scene.particles().len(),
        }
    }

    /// Pose details for the body called `name`.
    pub fn inspect_body(scene: &Scene, name: &str) -> Option<BodyInfo> {
        let t = scene.clock().global_time_days();
        scene.orbits().by_name(name).map(|body| {
            let elements = body.elements();
            BodyInfo {
                id: body.id(),
                name: body.name().to_string(),
                position: body.world_position().to_array(),
                orbit_position_deg: elements.orbit_position_deg(t).rem_euclid(360.0),
                spin_deg: elements.spin_angle_deg(t).rem_euclid(360.0),
            }
        })
    }

    /// Distance of the corona particles from the origin.
    pub fn particle_stats(scene: &Scene) -> ParticleStats {
        ParticleStats {
            count: scene.particles().len(),
            distance: scene.particles().distance_stats(),
        }
    }

    /// Body names in creation order.
    pub fn list_bodies(scene: &Scene) -> Vec<String> {
        scene.orbits().iter().map(|b| b.name().to_string()).collect()
    }
}

/// Summary of scene state for the inspector.
#[derive(Debug, Clone)]
pub struct SceneSummary {
    pub frame: u64,
    pub time_days: f64,
    pub body_count: usize,
    pub particle_count: usize,
}

impl std::fmt::Display for SceneSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Scene: frame={} t={:.4}d bodies={} particles={}",
            self.frame, self.time_days, self.body_count, self.particle_count
        )
    }
}

/// Detailed info about a single body.
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub id: BodyId,
    pub name: String,
    pub position: [f32; 3],
    /// Wrapped into [0, 360).
    pub orbit_position_deg: f64,
    /// Wrapped into [0, 360).
    pub spin_deg: f64,
}

impl std::fmt::Display for BodyInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Body [{}] {} pos=({:.2}, {:.2}, {:.2}) orbit={:.2}deg spin={:.2}deg",
            self.id.short(),
            self.name,
            self.position[0],
            self.position[1],
            self.position[2],
            self.orbit_position_deg,
            self.spin_deg,
        )
    }
}

#[derive(Debug, Clone)]
pub struct ParticleStats {
    pub count: usize,
    pub distance: Option<DistanceStats>,
}

impl std::fmt::Display for ParticleStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.distance {
            Some(d) => write!(
                f,
                "Particles: {} dist min={:.3} mean={:.3} max={:.3}",
                self.count, d.min, d.mean, d.max
            ),
            None => write!(f, "Particles: none"),
        }
    }
}
