use glam::Vec3;
use orrery_common::{BodyId, SimulationClock, Tickable};

use crate::body::Body;

/// All bodies of a scene, in creation order.
///
/// The first body added is the primary: the light source whose position is
/// published to the lighting boundary every frame.
#[derive(Debug, Clone, Default)]
pub struct Orbits {
    bodies: Vec<Body>,
}

impl Orbits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body. Returns its id.
    pub fn add(&mut self, body: Body) -> BodyId {
        let id = body.id();
        tracing::debug!(name = body.name(), %id, "body added");
        self.bodies.push(body);
        id
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// The first-created body, if any.
    pub fn primary(&self) -> Option<&Body> {
        self.bodies.first()
    }

    /// World position of the primary body.
    pub fn light_position(&self) -> Option<Vec3> {
        self.primary().map(Body::world_position)
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id() == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Recompute every pose for `time_days`.
    pub fn update_all(&mut self, time_days: f64) -> Vec<BodyId> {
        self.bodies
            .iter_mut()
            .map(|body| {
                body.update(time_days);
                body.id()
            })
            .collect()
    }
}

impl Tickable for Orbits {
    /// Ids of every body whose pose was replaced.
    type Changes = Vec<BodyId>;

    fn tick(&mut self, clock: &SimulationClock) -> Vec<BodyId> {
        self.update_all(clock.global_time_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::OrbitalElements;

    fn planet(sma: f32, period: f32) -> OrbitalElements {
        OrbitalElements {
            size: 0.3,
            semi_major_axis: sma,
            inclination: 1.0,
            ascending_node_longitude: 20.0,
            start_anomaly: 45.0,
            orbit_period_days: period,
            axial_tilt: 10.0,
            axial_period_days: 1.0,
        }
    }

    fn sample() -> Orbits {
        let mut orbits = Orbits::new();
        let sun = OrbitalElements::stationary(1.0, 0.0, 25.67);
        orbits.add(Body::new("sun", "sun_color", sun).unwrap());
        orbits.add(Body::new("inner", "inner_color", planet(4.0, 50.0)).unwrap());
        orbits.add(Body::new("outer", "outer_color", planet(40.0, 500.0)).unwrap());
        orbits
    }

    #[test]
    fn primary_is_first_added() {
        let orbits = sample();
        assert_eq!(orbits.primary().unwrap().name(), "sun");
        assert_eq!(orbits.light_position(), Some(Vec3::ZERO));
    }

    #[test]
    fn empty_has_no_light() {
        let orbits = Orbits::new();
        assert!(orbits.is_empty());
        assert!(orbits.light_position().is_none());
    }

    #[test]
    fn lookup_by_id_and_name() {
        let orbits = sample();
        let inner = orbits.by_name("inner").unwrap();
        assert_eq!(orbits.get(inner.id()).unwrap().name(), "inner");
        assert!(orbits.by_name("pluto").is_none());
    }

    #[test]
    fn tick_updates_every_body_in_order() {
        let mut orbits = sample();
        let mut clock = SimulationClock::default();
        clock.advance();
        let updated = orbits.tick(&clock);
        let ids: Vec<BodyId> = orbits.iter().map(Body::id).collect();
        assert_eq!(updated, ids);

        let t = clock.global_time_days();
        for body in orbits.iter() {
            assert_eq!(body.world_transform(), body.elements().world_transform(t));
        }
    }

    #[test]
    fn update_order_does_not_matter() {
        let mut a = sample();
        let mut b = a.clone();
        a.update_all(12.5);
        for body in b.bodies.iter_mut().rev() {
            body.update(12.5);
        }
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.world_transform(), y.world_transform());
        }
    }
}
