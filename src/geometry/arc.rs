//! Turn arc resolution.
//!
//! Converts a turn description (start point, center, included angle, turn
//! direction) into the parameters a generic "arc within a bounding box"
//! drawing primitive consumes: bounding box, start angle, and signed sweep
//! in the renderer's fixed-point angle units.

use crate::error::{GeometryError, Result};
use crate::math::turn_2d::radius_angle_deg;
use crate::math::Point2;

/// Margin added around the turn radius so the stroked arc stays inside
/// its own bounding box for stroke widths up to twice this value.
pub const ARC_SEMI_WIDTH: f64 = 0.3;

/// Renderer fixed-point angle scale: 16 units per degree, so a full
/// revolution is 5760 units.
pub const UNITS_PER_DEGREE: f64 = 16.0;

/// A single turn joining two straight legs.
///
/// `direction_sign` is the raw cross-product determinant between the
/// incoming and outgoing leg directions ([`turn_determinant`]); only its
/// sign is used. Created fresh per rendered turn and never mutated.
///
/// [`turn_determinant`]: crate::math::turn_2d::turn_determinant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnSpec {
    /// Point where the aircraft enters the turn, on the turn circle.
    pub start: Point2,
    /// Center of the turn circle.
    pub center: Point2,
    /// Included angle of the turn, in degrees.
    pub included_angle_deg: f64,
    /// Turn radius in scene units. Must be positive.
    pub turn_radius: f64,
    /// Signed determinant encoding the turn handedness.
    pub direction_sign: f64,
}

/// Axis-aligned bounding rectangle in scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Returns the center of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// Drawable arc parameters produced by [`ArcResolver::resolve`].
///
/// `sweep_angle_units` keeps the sign of the included angle; the
/// draw-direction sign is applied at draw time via
/// [`signed_sweep_units`](Self::signed_sweep_units), never baked in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedArc {
    /// Square box of side `2 * (turn_radius + pad)` centered on the turn center.
    pub bounding_box: BoundingBox,
    /// Start angle in renderer units, negated per the clockwise-negative
    /// screen convention.
    pub start_angle_units: f64,
    /// Included angle scaled into renderer units, sign untouched.
    pub sweep_angle_units: f64,
    /// `+1.0` or `-1.0`, from the turn's direction sign.
    pub draw_sweep_sign: f64,
}

impl ResolvedArc {
    /// Returns the sweep to pass to the draw primitive, with the
    /// draw-direction sign applied.
    #[must_use]
    pub fn signed_sweep_units(&self) -> f64 {
        self.draw_sweep_sign * self.sweep_angle_units
    }
}

/// Resolves [`TurnSpec`]s into drawable arcs.
///
/// Stateless apart from two constants, so a single resolver can be shared
/// freely across threads and repaint cycles.
#[derive(Debug, Clone, Copy)]
pub struct ArcResolver {
    pad: f64,
    units_per_degree: f64,
}

impl Default for ArcResolver {
    fn default() -> Self {
        Self {
            pad: ARC_SEMI_WIDTH,
            units_per_degree: UNITS_PER_DEGREE,
        }
    }
}

impl ArcResolver {
    /// Creates a resolver with an explicit bounding-box pad and angular
    /// unit scale. Both must agree with the consuming renderer.
    #[must_use]
    pub fn new(pad: f64, units_per_degree: f64) -> Self {
        Self {
            pad,
            units_per_degree,
        }
    }

    /// Returns the bounding-box pad.
    #[must_use]
    pub fn pad(&self) -> f64 {
        self.pad
    }

    /// Resolves a turn into drawable arc parameters.
    ///
    /// The start angle is derived with the two-argument arctangent of the
    /// center→start vector, so every quadrant (including a vertical
    /// radius) is handled, then negated: the renderer counts angles
    /// clockwise-negative in screen coordinates where y grows downward.
    ///
    /// A negative `direction_sign` draws the sweep positive; zero or
    /// positive draws it negated. Zero (collinear legs) deliberately
    /// shares the positive branch.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonPositiveRadius`] if `turn_radius <= 0`
    /// and [`GeometryError::StartAtCenter`] if the start point coincides
    /// with the center, where the start angle is undefined.
    pub fn resolve(&self, spec: &TurnSpec) -> Result<ResolvedArc> {
        if spec.turn_radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius {
                radius: spec.turn_radius,
            }
            .into());
        }

        let reach = spec.turn_radius + self.pad;
        let bounding_box = BoundingBox {
            x: spec.center.x - reach,
            y: spec.center.y - reach,
            width: 2.0 * reach,
            height: 2.0 * reach,
        };

        let start_angle_units =
            -radius_angle_deg(spec.center, spec.start)? * self.units_per_degree;
        let sweep_angle_units = spec.included_angle_deg * self.units_per_degree;

        let draw_sweep_sign = if spec.direction_sign < 0.0 { 1.0 } else { -1.0 };

        Ok(ResolvedArc {
            bounding_box,
            start_angle_units,
            sweep_angle_units,
            draw_sweep_sign,
        })
    }
}
