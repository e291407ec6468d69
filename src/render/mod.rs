//! Scene rendering seam.
//!
//! The crate never draws pixels itself. [`DrawBackend`] is the boundary:
//! a backend owns the actual 2D primitives (Qt, skia, a plotter, a test
//! recorder) and [`render_scene`] walks the scene once per repaint,
//! resolving turn arcs and handing every shape to the backend in painting
//! order.

use log::warn;

use crate::geometry::{ArcResolver, BoundingBox};
use crate::math::Point2;
use crate::scene::SceneStore;
use crate::style::{Brush, DisplayStyle, Pen};

/// Drawing primitives the display backend must provide.
///
/// The arc convention is the usual "bounding box + start angle + signed
/// sweep" primitive, with angles in the resolver's fixed-point units
/// (16 per degree by default, counter-clockwise positive).
pub trait DrawBackend {
    /// Strokes a circular arc inside `bounds` from `start_angle_units`
    /// through `sweep_angle_units`.
    fn draw_arc(
        &mut self,
        bounds: &BoundingBox,
        start_angle_units: f64,
        sweep_angle_units: f64,
        pen: &Pen,
    );

    /// Strokes a straight segment.
    fn draw_line(&mut self, from: Point2, to: Point2, pen: &Pen);

    /// Fills a square of side `side` centered on `center`. Marker squares
    /// keep a fixed on-screen size; any zoom compensation is the
    /// backend's business.
    fn fill_square(&mut self, center: Point2, side: f64, brush: &Brush);

    /// Fills a disc of diameter `diameter` centered on `center`.
    fn fill_disc(&mut self, center: Point2, diameter: f64, brush: &Brush);
}

/// Draws the whole scene onto `backend` in painting order: legs, turn
/// arcs, transition points, waypoints, then the aircraft on top.
///
/// A turn whose geometry cannot be resolved is skipped with a warning;
/// one bad transition must not blank the display.
pub fn render_scene<B: DrawBackend>(
    store: &SceneStore,
    style: &DisplayStyle,
    resolver: &ArcResolver,
    backend: &mut B,
) {
    for (_, leg) in store.legs() {
        backend.draw_line(leg.leg.from, leg.leg.to, &style.leg_pen);
    }

    for (id, turn) in store.turns() {
        match resolver.resolve(&turn.spec) {
            Ok(arc) => backend.draw_arc(
                &arc.bounding_box,
                arc.start_angle_units,
                arc.signed_sweep_units(),
                &style.trajectory_pen,
            ),
            Err(err) => warn!("skipping turn {id:?}: {err}"),
        }
    }

    for (_, tp) in store.transition_points() {
        backend.fill_square(tp.position, style.transition_width, &style.transition_brush);
    }

    for (_, wp) in store.waypoints() {
        backend.fill_square(wp.position, style.waypoint_width, &style.waypoint_brush);
    }

    if let Some(position) = store.aircraft_position() {
        backend.fill_disc(position, style.aircraft_width, &style.aircraft_brush);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{Leg, TurnSpec, UNITS_PER_DEGREE};
    use crate::scene::{LegData, TransitionPointData, TurnData, WaypointData};

    #[derive(Debug, PartialEq)]
    enum Op {
        Arc {
            start: f64,
            sweep: f64,
        },
        Line {
            from: Point2,
            to: Point2,
        },
        Square {
            center: Point2,
            side: f64,
        },
        Disc {
            center: Point2,
            diameter: f64,
        },
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DrawBackend for Recorder {
        fn draw_arc(&mut self, _bounds: &BoundingBox, start: f64, sweep: f64, _pen: &Pen) {
            self.ops.push(Op::Arc { start, sweep });
        }

        fn draw_line(&mut self, from: Point2, to: Point2, _pen: &Pen) {
            self.ops.push(Op::Line { from, to });
        }

        fn fill_square(&mut self, center: Point2, side: f64, _brush: &Brush) {
            self.ops.push(Op::Square { center, side });
        }

        fn fill_disc(&mut self, center: Point2, diameter: f64, _brush: &Brush) {
            self.ops.push(Op::Disc { center, diameter });
        }
    }

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    fn quarter_turn(direction_sign: f64) -> TurnSpec {
        TurnSpec {
            start: p(100.0, 0.0),
            center: p(0.0, 0.0),
            included_angle_deg: 90.0,
            turn_radius: 100.0,
            direction_sign,
        }
    }

    #[test]
    fn draws_every_entity_in_painting_order() {
        let mut store = SceneStore::new();
        store.add_leg(LegData {
            leg: Leg::new(p(0.0, 0.0), p(100.0, 0.0)),
        });
        store.add_turn(TurnData {
            spec: quarter_turn(-1.0),
        });
        store.add_transition_point(TransitionPointData {
            position: p(100.0, 0.0),
        });
        store.add_waypoint(WaypointData {
            position: p(0.0, 100.0),
            name: None,
        });
        store.set_aircraft_position(p(50.0, 50.0));

        let mut rec = Recorder::default();
        render_scene(
            &store,
            &DisplayStyle::default(),
            &ArcResolver::default(),
            &mut rec,
        );

        assert_eq!(rec.ops.len(), 5);
        assert!(matches!(rec.ops[0], Op::Line { .. }));
        assert!(matches!(rec.ops[1], Op::Arc { .. }));
        assert!(matches!(rec.ops[2], Op::Square { .. }));
        assert!(matches!(rec.ops[3], Op::Square { .. }));
        assert!(matches!(rec.ops[4], Op::Disc { .. }));
    }

    #[test]
    fn arc_sweep_sign_follows_turn_handedness() {
        for (det, expected) in [(-1.0, 90.0 * UNITS_PER_DEGREE), (1.0, -90.0 * UNITS_PER_DEGREE)] {
            let mut store = SceneStore::new();
            store.add_turn(TurnData {
                spec: quarter_turn(det),
            });

            let mut rec = Recorder::default();
            render_scene(
                &store,
                &DisplayStyle::default(),
                &ArcResolver::default(),
                &mut rec,
            );

            match rec.ops.as_slice() {
                [Op::Arc { sweep, .. }] => {
                    assert!((sweep - expected).abs() < 1e-10, "det={det}: sweep={sweep}");
                }
                other => panic!("expected a single arc, got {other:?}"),
            }
        }
    }

    #[test]
    fn degenerate_turn_is_skipped_not_fatal() {
        let mut store = SceneStore::new();
        store.add_turn(TurnData {
            spec: TurnSpec {
                start: p(0.0, 0.0),
                center: p(0.0, 0.0),
                included_angle_deg: 90.0,
                turn_radius: 100.0,
                direction_sign: -1.0,
            },
        });
        store.add_turn(TurnData {
            spec: quarter_turn(-1.0),
        });

        let mut rec = Recorder::default();
        render_scene(
            &store,
            &DisplayStyle::default(),
            &ArcResolver::default(),
            &mut rec,
        );

        // Only the valid turn reaches the backend.
        assert_eq!(rec.ops.len(), 1);
        assert!(matches!(rec.ops[0], Op::Arc { .. }));
    }

    #[test]
    fn markers_are_centered_with_style_sizes() {
        let mut store = SceneStore::new();
        store.add_waypoint(WaypointData {
            position: p(-40.0, 60.0),
            name: None,
        });

        let style = DisplayStyle::default();
        let mut rec = Recorder::default();
        render_scene(&store, &style, &ArcResolver::default(), &mut rec);

        match rec.ops.as_slice() {
            [Op::Square { center, side }] => {
                assert!((center.x + 40.0).abs() < f64::EPSILON);
                assert!((center.y - 60.0).abs() < f64::EPSILON);
                assert!((side - style.waypoint_width).abs() < f64::EPSILON);
            }
            other => panic!("expected a single square, got {other:?}"),
        }
    }

    #[test]
    fn empty_scene_draws_nothing() {
        let store = SceneStore::new();
        let mut rec = Recorder::default();
        render_scene(
            &store,
            &DisplayStyle::default(),
            &ArcResolver::default(),
            &mut rec,
        );
        assert!(rec.ops.is_empty());
    }
}
