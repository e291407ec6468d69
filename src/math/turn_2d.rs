//! 2D turn math: angle of a radius vector and turn handedness.

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Returns the geometric angle, in degrees, of the vector from `center`
/// to `start`, measured counter-clockwise from the positive x-axis.
///
/// Uses the two-argument arctangent so the quadrant is resolved from the
/// signs of both components: a bare `atan(dy/dx)` is undefined for
/// `dx = 0` and cannot tell θ from θ+180°. Result is in `(-180, 180]`.
///
/// # Errors
///
/// Returns an error if `start` coincides with `center`, where the angle
/// is undefined.
pub fn radius_angle_deg(center: Point2, start: Point2) -> Result<f64> {
    let delta = start - center;
    if delta.norm() < TOLERANCE {
        return Err(GeometryError::StartAtCenter.into());
    }
    Ok(delta.y.atan2(delta.x).to_degrees())
}

/// Returns the signed 2D cross-product determinant between the incoming
/// and outgoing leg direction vectors of a transition.
///
/// Only the sign is meaningful to callers: negative for one handedness,
/// positive for the other, zero for collinear legs. The magnitude depends
/// on the vector lengths and is ignored downstream.
#[must_use]
pub fn turn_determinant(incoming: &Vector2, outgoing: &Vector2) -> f64 {
    incoming.perp(outgoing)
}
