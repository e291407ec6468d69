use thiserror::Error;

/// Top-level error type for the trajview geometry kernel.
#[derive(Debug, Error)]
pub enum TrajviewError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

/// Errors related to geometric computations.
///
/// Every variant describes degenerate input; the computations themselves
/// are pure and never fail for valid geometry.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("turn radius {radius} is not positive")]
    NonPositiveRadius { radius: f64 },

    #[error("turn start point coincides with the turn center")]
    StartAtCenter,

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to scene store lookups.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),
}

/// Convenience type alias for results using [`TrajviewError`].
pub type Result<T> = std::result::Result<T, TrajviewError>;
