use glam::Mat4;
use orrery_common::BodyId;
use orrery_common::transform::{rotate_y, rotate_z, scale, translate_x};
use serde::{Deserialize, Serialize};

/// Scene calibration: body radius = `size / SIZE_DIVISOR`.
pub const SIZE_DIVISOR: f32 = 2.5;
/// Scene calibration: orbit radius = `semi_major_axis / ORBIT_RADIUS_DIVISOR`.
pub const ORBIT_RADIUS_DIVISOR: f32 = 4.0;
/// Orbit period used for bodies that sit at the origin.
pub const STATIONARY_ORBIT_PERIOD_DAYS: f32 = 1.0;

/// Fixed orbital parameters of one body. Angles are degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Radius relative to the sun.
    pub size: f32,
    /// Orbit radius in scene units; 0 for the central body.
    pub semi_major_axis: f32,
    /// Tilt of the orbital plane.
    pub inclination: f32,
    /// Swivel of the orbital plane about the polar axis.
    pub ascending_node_longitude: f32,
    /// Position on the orbit at t = 0.
    pub start_anomaly: f32,
    /// Days per revolution. Never zero.
    pub orbit_period_days: f32,
    pub axial_tilt: f32,
    /// Days per spin; negative spins retrograde. Never zero.
    pub axial_period_days: f32,
}

/// Errors from validating orbital elements.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ElementsError {
    #[error("orbit period must be non-zero and finite, got {0}")]
    InvalidOrbitPeriod(f32),
    #[error("axial period must be non-zero and finite, got {0}")]
    InvalidAxialPeriod(f32),
    #[error("size must be positive and finite, got {0}")]
    InvalidSize(f32),
    #[error("semi-major axis must be non-negative and finite, got {0}")]
    InvalidSemiMajorAxis(f32),
    #[error("{field} must be finite, got {value}")]
    NonFiniteAngle { field: &'static str, value: f32 },
}

impl OrbitalElements {
    /// A body fixed at the origin that only spins.
    pub fn stationary(size: f32, axial_tilt: f32, axial_period_days: f32) -> Self {
        Self {
            size,
            semi_major_axis: 0.0,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            start_anomaly: 0.0,
            orbit_period_days: STATIONARY_ORBIT_PERIOD_DAYS,
            axial_tilt,
            axial_period_days,
        }
    }

    pub fn is_stationary(&self) -> bool {
        self.semi_major_axis == 0.0
    }

    /// Reject anything that would divide by zero or feed non-finite values
    /// into the transform builders.
    pub fn validate(&self) -> Result<(), ElementsError> {
        if self.orbit_period_days == 0.0 || !self.orbit_period_days.is_finite() {
            return Err(ElementsError::InvalidOrbitPeriod(self.orbit_period_days));
        }
        if self.axial_period_days == 0.0 || !self.axial_period_days.is_finite() {
            return Err(ElementsError::InvalidAxialPeriod(self.axial_period_days));
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ElementsError::InvalidSize(self.size));
        }
        if !(self.semi_major_axis.is_finite() && self.semi_major_axis >= 0.0) {
            return Err(ElementsError::InvalidSemiMajorAxis(self.semi_major_axis));
        }
        for (field, value) in [
            ("inclination", self.inclination),
            ("ascending_node_longitude", self.ascending_node_longitude),
            ("start_anomaly", self.start_anomaly),
            ("axial_tilt", self.axial_tilt),
        ] {
            if !value.is_finite() {
                return Err(ElementsError::NonFiniteAngle { field, value });
            }
        }
        Ok(())
    }

    /// Unwrapped angle travelled along the orbit since t = 0.
    pub fn orbit_angle_deg(&self, time_days: f64) -> f64 {
        time_days / self.orbit_period_days as f64 * 360.0
    }

    /// Unwrapped spin angle since t = 0.
    pub fn spin_angle_deg(&self, time_days: f64) -> f64 {
        time_days / self.axial_period_days as f64 * 360.0
    }

    /// Position on the orbit: start anomaly plus the orbit angle.
    pub fn orbit_position_deg(&self, time_days: f64) -> f64 {
        self.start_anomaly as f64 + self.orbit_angle_deg(time_days)
    }

    /// World transform of the body at `time_days`.
    ///
    /// Applied right to left to the body's local geometry:
    /// `node * inclination * orbit_position * orbit_radius * tilt * spin * scale`.
    pub fn world_transform(&self, time_days: f64) -> Mat4 {
        let orbit_position = wrap_degrees(self.orbit_position_deg(time_days));
        let spin = wrap_degrees(self.spin_angle_deg(time_days));

        let m_node = rotate_y(self.ascending_node_longitude);
        let m_inclination = rotate_z(self.inclination);
        let m_orbit = rotate_y(orbit_position);
        let m_radius = translate_x(self.semi_major_axis / ORBIT_RADIUS_DIVISOR);
        let m_tilt = rotate_z(self.axial_tilt);
        let m_spin = rotate_y(spin);
        let m_scale = scale(self.size / SIZE_DIVISOR);

        m_node * m_inclination * m_orbit * m_radius * m_tilt * m_spin * m_scale
    }
}

/// Reduce an angle into [0, 360) before it is narrowed to `f32`.
pub fn wrap_degrees(deg: f64) -> f32 {
    deg.rem_euclid(360.0) as f32
}

/// Free-function form of [`OrbitalElements::world_transform`].
pub fn derive_world_transform(elements: &OrbitalElements, time_days: f64) -> Mat4 {
    elements.world_transform(time_days)
}

/// A celestial body: its elements plus the pose derived for the current time.
///
/// Only [`Body::new`] builds one, so the elements are always validated.
#[derive(Debug, Clone)]
pub struct Body {
    id: BodyId,
    name: String,
    texture: String,
    elements: OrbitalElements,
    world_transform: Mat4,
}

impl Body {
    /// Create a body posed at t = 0. Fails on invalid elements.
    pub fn new(
        name: impl Into<String>,
        texture: impl Into<String>,
        elements: OrbitalElements,
    ) -> Result<Self, ElementsError> {
        elements.validate()?;
        Ok(Self {
            id: BodyId::new(),
            name: name.into(),
            texture: texture.into(),
            world_transform: elements.world_transform(0.0),
            elements,
        })
    }

    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Logical name of the color texture.
    pub fn texture(&self) -> &str {
        &self.texture
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn world_transform(&self) -> Mat4 {
        self.world_transform
    }

    /// Translation column of the current pose.
    pub fn world_position(&self) -> glam::Vec3 {
        orrery_common::transform::translation_of(&self.world_transform)
    }

    /// Recompute the pose for `time_days`.
    pub fn update(&mut self, time_days: f64) {
        self.world_transform = self.elements.world_transform(time_days);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn earth() -> OrbitalElements {
        OrbitalElements {
            size: 0.3,
            semi_major_axis: 10.0,
            inclination: 0.0,
            ascending_node_longitude: 163.97,
            start_anomaly: 358.19,
            orbit_period_days: 365.2,
            axial_tilt: 23.4,
            axial_period_days: 1.0,
        }
    }

    fn mercury() -> OrbitalElements {
        OrbitalElements {
            size: 0.15,
            semi_major_axis: 3.87,
            inclination: 7.0,
            ascending_node_longitude: 48.33,
            start_anomaly: 172.75,
            orbit_period_days: 88.0,
            axial_tilt: 0.01,
            axial_period_days: 58.65,
        }
    }

    #[test]
    fn derivation_is_deterministic() {
        for t in [0.0, 1.5, 365.2, 12_345.678] {
            let a = derive_world_transform(&mercury(), t);
            let b = derive_world_transform(&mercury(), t);
            assert_eq!(a.to_cols_array(), b.to_cols_array());
        }
    }

    #[test]
    fn stationary_body_stays_at_origin() {
        let sun = OrbitalElements::stationary(1.0, 0.0, 25.67);
        assert!(sun.is_stationary());
        for t in [0.0, 0.3, 10.0, 1000.0, 1.0e6] {
            let m = sun.world_transform(t);
            assert_eq!(m.w_axis.truncate(), Vec3::ZERO, "t={t}");
        }
    }

    #[test]
    fn orbit_position_is_periodic() {
        let e = earth();
        let start = e.orbit_position_deg(0.0).rem_euclid(360.0);
        let after = e.orbit_position_deg(e.orbit_period_days as f64).rem_euclid(360.0);
        assert!((start - after).abs() < 1e-6, "{start} vs {after}");
    }

    #[test]
    fn one_period_returns_to_same_place() {
        let e = earth();
        let p0 = e.world_transform(0.0).w_axis.truncate();
        let p1 = e.world_transform(e.orbit_period_days as f64).w_axis.truncate();
        assert!((p0 - p1).length() < 1e-3);
    }

    #[test]
    fn orbit_radius_is_scaled() {
        let e = earth();
        for t in [0.0, 50.0, 200.0] {
            let r = e.world_transform(t).w_axis.truncate().length();
            assert!((r - 10.0 / ORBIT_RADIUS_DIVISOR).abs() < 1e-4);
        }
    }

    #[test]
    fn size_is_scaled() {
        let e = earth();
        let m = e.world_transform(3.25);
        let radius = m.transform_vector3(Vec3::X).length();
        assert!((radius - 0.3 / SIZE_DIVISOR).abs() < 1e-6);
    }

    #[test]
    fn composition_order() {
        // No tilts or node swivel: the body sits on +X rotated by the start anomaly.
        let e = OrbitalElements {
            size: 2.5,
            semi_major_axis: 4.0,
            inclination: 0.0,
            ascending_node_longitude: 0.0,
            start_anomaly: 90.0,
            orbit_period_days: 100.0,
            axial_tilt: 0.0,
            axial_period_days: 1.0,
        };
        let p = e.world_transform(0.0).w_axis.truncate();
        assert!((p - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);

        // Inclination tilts the orbit plane about Z.
        let tilted = OrbitalElements {
            inclination: 90.0,
            start_anomaly: 0.0,
            ..e
        };
        let p = tilted.world_transform(0.0).w_axis.truncate();
        assert!((p - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn retrograde_spin_reverses_angle() {
        let venus = OrbitalElements {
            axial_period_days: -243.0,
            ..earth()
        };
        assert!(venus.spin_angle_deg(10.0) < 0.0);
        assert!(earth().spin_angle_deg(10.0) > 0.0);
    }

    #[test]
    fn wrap_degrees_range() {
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
    }

    #[test]
    fn rejects_zero_periods() {
        let bad = OrbitalElements {
            orbit_period_days: 0.0,
            ..earth()
        };
        assert_eq!(bad.validate(), Err(ElementsError::InvalidOrbitPeriod(0.0)));

        let bad = OrbitalElements {
            axial_period_days: 0.0,
            ..earth()
        };
        assert_eq!(bad.validate(), Err(ElementsError::InvalidAxialPeriod(0.0)));
        assert!(Body::new("bad", "bad_color", bad).is_err());
    }

    #[test]
    fn rejects_bad_geometry() {
        let bad = OrbitalElements { size: 0.0, ..earth() };
        assert!(matches!(bad.validate(), Err(ElementsError::InvalidSize(_))));

        let bad = OrbitalElements {
            semi_major_axis: -1.0,
            ..earth()
        };
        assert!(matches!(
            bad.validate(),
            Err(ElementsError::InvalidSemiMajorAxis(_))
        ));

        let bad = OrbitalElements {
            axial_tilt: f32::NAN,
            ..earth()
        };
        assert!(matches!(
            bad.validate(),
            Err(ElementsError::NonFiniteAngle {
                field: "axial_tilt",
                ..
            })
        ));
    }

    #[test]
    fn new_body_is_posed_at_time_zero() {
        let body = Body::new("earth", "earth_color", earth()).unwrap();
        assert_eq!(body.world_transform(), earth().world_transform(0.0));
        assert_eq!(body.name(), "earth");
        assert_eq!(body.texture(), "earth_color");
    }

    #[test]
    fn update_replaces_pose() {
        let mut body = Body::new("earth", "earth_color", earth()).unwrap();
        let before = body.world_position();
        body.update(30.0);
        assert_ne!(body.world_position(), before);
        assert_eq!(body.world_transform(), earth().world_transform(30.0));
    }
}
