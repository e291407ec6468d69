pub mod arc;
pub mod leg;

pub use arc::{ArcResolver, BoundingBox, ResolvedArc, TurnSpec, ARC_SEMI_WIDTH, UNITS_PER_DEGREE};
pub use leg::Leg;
