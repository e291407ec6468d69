pub mod error;
pub mod geometry;
pub mod math;
pub mod render;
pub mod scene;
pub mod style;

pub use error::{Result, TrajviewError};
