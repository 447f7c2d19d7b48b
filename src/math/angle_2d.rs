//! 2D angle and direction utilities.
use std::f64::consts::{PI, TAU};

use super::{Vector2, TOLERANCE};

/// Normalizes an angle into the half-open range `(-π, π]`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let mut a = angle % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Signed turning angle from direction `v_in` to direction `v_out`, in `(-π, π]`.
///
/// Positive for a counter-clockwise turn (in a y-up frame).
#[must_use]
pub fn turn_angle(v_in: &Vector2, v_out: &Vector2) -> f64 {
    normalize_angle(v_out.y.atan2(v_out.x) - v_in.y.atan2(v_in.x))
}

/// Z component of the 3D cross product of two XY vectors.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Cosine of the angle between two vectors.
///
/// Returns `None` when either vector is zero-length.
#[must_use]
pub fn cos_between(a: &Vector2, b: &Vector2) -> Option<f64> {
    let denom = a.norm() * b.norm();
    if denom < TOLERANCE {
        return None;
    }
    Some((a.dot(b) / denom).clamp(-1.0, 1.0))
}
