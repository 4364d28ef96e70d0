// Copyright 2025 Lars Brubaker
// Error type shared by the clipper and the polygon facade.

use thiserror::Error;

use crate::classify::VertexType;

/// Errors returned by clipping and polygon construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// The contour list and the hole-flag list have different lengths.
    #[error("mismatched input: {contours} contours but {flags} hole flags")]
    MismatchedLengths { contours: usize, flags: usize },

    /// A coordinate is NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// The sweep reached a vertex whose output action needs a contour that
    /// is not there. Caused by self-intersecting or inconsistently wound
    /// input that slipped past validation.
    #[error("internal consistency error: {vertex_type:?} at ({x}, {y}) has no contour to extend")]
    MissingContour { vertex_type: VertexType, x: f64, y: f64 },

    /// JSON export failed.
    #[cfg(feature = "serde")]
    #[error("json export failed: {0}")]
    Json(String),
}
