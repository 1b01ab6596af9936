//! Errors raised when constructing or mutating collider shapes.

use crate::shapes::ShapeKind;
use thiserror::Error;

/// Rejected shape geometry. Shapes are never clamped into a usable form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("polygon vertex {index} is not finite")]
    NonFiniteVertex { index: usize },

    #[error("polygon has zero area or a zero-length edge")]
    DegeneratePolygon,

    #[error("polygon is not convex")]
    NotConvex,

    #[error("circle radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("rectangle dimensions must be positive and finite, got {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("operation requires a {expected} collider, found {found}")]
    ShapeMismatch { expected: ShapeKind, found: ShapeKind },
}
