use crate::error::{GeometryError, Result};
use crate::math::turn_2d::turn_determinant;
use crate::math::{Point2, Vector2, TOLERANCE};

/// A straight route segment between two points of the flight plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub from: Point2,
    pub to: Point2,
}

impl Leg {
    /// Creates a new leg.
    #[must_use]
    pub fn new(from: Point2, to: Point2) -> Self {
        Self { from, to }
    }

    /// Returns the leg length in scene units.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.to - self.from).norm()
    }

    /// Returns the unit direction vector from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-length leg.
    pub fn direction(&self) -> Result<Vector2> {
        let d = self.to - self.from;
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    /// Returns the signed determinant of the transition from this leg
    /// onto `next`, suitable as a turn's `direction_sign`.
    ///
    /// # Errors
    ///
    /// Returns an error if either leg has zero length.
    pub fn turn_determinant_onto(&self, next: &Leg) -> Result<f64> {
        Ok(turn_determinant(&self.direction()?, &next.direction()?))
    }
}
