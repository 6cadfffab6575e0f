//! Angle wrapping and frame-rate independent smoothing helpers

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Wrap an angle difference into (-PI, PI]
pub fn wrap_angle(delta: f32) -> f32 {
    PI - (PI - delta).rem_euclid(TAU)
}

/// Fraction of the remaining distance covered in `dt` seconds at `rate` per second.
///
/// Always in [0, 1), so repeated application never overshoots.
pub fn smoothing_fraction(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Turn `current` toward `target` along the shorter arc by `fraction` of the gap.
pub fn smooth_angle(current: f32, target: f32, fraction: f32) -> f32 {
    let delta = wrap_angle(target - current);
    wrap_angle(current + delta * fraction)
}

/// Scalar exponential ease
pub fn ease(current: f32, target: f32, fraction: f32) -> f32 {
    current + (target - current) * fraction
}

/// Heading on the XZ plane for a direction, measured from +Z toward +X
pub fn heading(x: f32, z: f32) -> f32 {
    x.atan2(z)
}

/// Unit normal an object with the given yaw faces along
pub fn facing_normal(yaw: f32) -> Vec3 {
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Unit vector to the right of an object with the given yaw
pub fn right_vector(yaw: f32) -> Vec3 {
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}
