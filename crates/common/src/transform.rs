//! Primitive 4x4 homogeneous transforms.
//!
//! Every builder is a pure function of its arguments. Angles are degrees.
//! Inputs are not sanitized: a NaN or infinite argument yields a matrix with
//! non-finite entries.

use glam::{Mat4, Vec3};

/// Degrees to radians using the plain pi/180 factor.
#[inline]
pub fn to_radians(deg: f32) -> f32 {
    deg * (std::f32::consts::PI / 180.0)
}

/// Uniform scale by `s` on all three axes.
pub fn scale(s: f32) -> Mat4 {
    Mat4::from_scale(Vec3::splat(s))
}

/// Translation by `d` along the X axis.
pub fn translate_x(d: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(d, 0.0, 0.0))
}

/// Rotation about the X axis.
pub fn rotate_x(deg: f32) -> Mat4 {
    Mat4::from_rotation_x(to_radians(deg))
}

/// Rotation about the Y axis.
pub fn rotate_y(deg: f32) -> Mat4 {
    Mat4::from_rotation_y(to_radians(deg))
}

/// Rotation about the Z axis.
pub fn rotate_z(deg: f32) -> Mat4 {
    Mat4::from_rotation_z(to_radians(deg))
}

/// Translation column of a homogeneous transform.
pub fn translation_of(m: &Mat4) -> Vec3 {
    m.w_axis.truncate()
}
