//! Error types for placement geometry

use thiserror::Error;

/// Geometry construction errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A closed footprint needs at least three control points
    #[error("Footprint needs at least 3 points, got {0}")]
    TooFewPoints(usize),

    /// A control point was NaN or infinite
    #[error("Footprint point {index} is not finite")]
    NonFinitePoint { index: usize },
}

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;
