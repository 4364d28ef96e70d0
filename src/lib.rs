// gpc-rust: polygon clipping (union, intersection, difference, xor) by scanbeam sweep
// Copyright 2025 Lars Brubaker
// License: MIT

pub mod aet;
pub mod classify;
pub mod clip;
pub mod edge;
pub mod error;
pub mod geom;
pub mod intersect;
pub mod lmt;
pub mod output;
pub mod polygon;
pub mod scanbeam;

pub use clip::{clip, ClipOption, Clipper, Operation};
pub use error::ClipError;
pub use geom::{Position, Rect, Vertex, EPSILON};
pub use polygon::conditioning::Winding;
pub use polygon::{Contour, Polygon, PolygonVertices};

/// `a ∪ b`
pub fn union(a: &Polygon, b: &Polygon) -> Result<Polygon, ClipError> {
    clip(Operation::Union, a, b)
}

/// `a ∩ b`
pub fn intersection(a: &Polygon, b: &Polygon) -> Result<Polygon, ClipError> {
    clip(Operation::Intersection, a, b)
}

/// `a \ b`
pub fn difference(a: &Polygon, b: &Polygon) -> Result<Polygon, ClipError> {
    clip(Operation::Difference, a, b)
}

/// Symmetric difference of `a` and `b`.
pub fn xor(a: &Polygon, b: &Polygon) -> Result<Polygon, ClipError> {
    clip(Operation::Xor, a, b)
}
