use thiserror::Error;

use crate::shape::ShapeKind;

/// Top-level error type for shapekit.
#[derive(Debug, Error)]
pub enum ShapekitError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// Errors raised by the point arena.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("point not found in store")]
    PointNotFound,
}

/// Errors raised while constructing or classifying a shape.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    #[error("a {kind} has exactly {expected} vertices and {expected} edges, got {vertices} vertices and {edges} edges")]
    CountMismatch {
        kind: ShapeKind,
        expected: usize,
        vertices: usize,
        edges: usize,
    },

    #[error("all edges must be equal in a {kind}")]
    RegularityViolation { kind: ShapeKind },

    #[error("not an isosceles triangle: side lengths {a}, {b}, {c}")]
    UnclassifiableTriangle { a: f64, b: f64, c: f64 },

    #[error("unsupported shape type: {0}")]
    UnknownShapeType(String),
}

/// Convenience type alias for results using [`ShapekitError`].
pub type Result<T> = std::result::Result<T, ShapekitError>;
