//! Immutable display styling.
//!
//! One [`DisplayStyle`] value holds every pen, brush, and marker size the
//! renderer needs. It is plain configuration: build it once (or take the
//! defaults) and share it read-only with the draw cycle.

use rgb::RGBA8;

use crate::geometry::ARC_SEMI_WIDTH;

/// Stroke color and width for outline drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub color: RGBA8,
    pub width: f64,
}

/// Fill color for solid shapes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    pub color: RGBA8,
}

/// Complete styling for the navigation display scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayStyle {
    /// Side of the square waypoint marker, in device units.
    pub waypoint_width: f64,
    /// Side of the square transition-point marker, in device units.
    pub transition_width: f64,
    /// Diameter of the aircraft disc, in scene units.
    pub aircraft_width: f64,
    /// Half the trajectory stroke width; also the arc bounding-box pad.
    pub arc_semi_width: f64,
    pub trajectory_pen: Pen,
    pub leg_pen: Pen,
    pub waypoint_brush: Brush,
    pub transition_brush: Brush,
    pub aircraft_brush: Brush,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        let asw = ARC_SEMI_WIDTH;
        Self {
            waypoint_width: 15.0,
            transition_width: 10.0,
            aircraft_width: 100.0,
            arc_semi_width: asw,
            trajectory_pen: Pen {
                color: RGBA8::new(255, 255, 0, 255),
                width: asw * 2.0,
            },
            leg_pen: Pen {
                // Light grey.
                color: RGBA8::new(211, 211, 211, 255),
                width: asw,
            },
            waypoint_brush: Brush {
                color: RGBA8::new(255, 0, 0, 255),
            },
            transition_brush: Brush {
                color: RGBA8::new(128, 128, 128, 255),
            },
            aircraft_brush: Brush {
                color: RGBA8::new(255, 255, 255, 255),
            },
        }
    }
}
