// Copyright 2025 Lars Brubaker
// License: MIT
//
// Pure geometric helpers on (x, y) vertices: the fixed comparison tolerance,
// bounding rectangles, shoelace area and the winding-number containment test.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used for every near-equality decision in the sweep
/// (coincident edges, parallel intersection denominators).
pub const EPSILON: f64 = 2.220_446_049_250_313_1e-16;

/// A polygon vertex.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Equality within [`EPSILON`] on both axes.
    #[inline]
    pub fn approx_eq(&self, other: &Vertex) -> bool {
        (self.x - other.x).abs() < EPSILON && (self.y - other.y).abs() < EPSILON
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Vertex { x, y }
    }
}

impl From<[f64; 2]> for Vertex {
    fn from([x, y]: [f64; 2]) -> Self {
        Vertex { x, y }
    }
}

/// `|a - b| <= EPSILON`.
#[inline]
pub fn eq_eps(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// Axis-aligned bounding rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    /// Bounds of a vertex slice, `None` when it is empty.
    pub fn of(points: &[Vertex]) -> Option<Rect> {
        let first = points.first()?;
        let mut r = Rect { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        for p in &points[1..] {
            r.min_x = r.min_x.min(p.x);
            r.max_x = r.max_x.max(p.x);
            r.min_y = r.min_y.min(p.y);
            r.max_y = r.max_y.max(p.y);
        }
        Some(r)
    }

    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Closed-interval overlap on both axes (touching rectangles overlap).
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.max_x < other.min_x || self.min_x > other.max_x)
            && !(self.max_y < other.min_y || self.min_y > other.max_y)
    }
}

/// Signed area of a closed ring; counter-clockwise rings are positive.
pub fn signed_area(points: &[Vertex]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut a = 0.0;
    let mut j = n - 1;
    for i in 0..n {
        a += points[j].x * points[i].y - points[i].x * points[j].y;
        j = i;
    }
    a * 0.5
}

/// Which side of the infinite line `p0 -> p1` the point `p2` lies on:
/// `1` left, `-1` right, `0` on the line (within [`EPSILON`]).
pub fn side_of_line(p0: Vertex, p1: Vertex, p2: Vertex) -> i32 {
    let res = (p1.x - p0.x) * (p2.y - p0.y) - (p2.x - p0.x) * (p1.y - p0.y);
    if res.abs() < EPSILON {
        0
    } else if res > 0.0 {
        1
    } else {
        -1
    }
}

/// Result of a containment query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Position {
    Inside = 1,
    Boundary = 0,
    Outside = -1,
}

/// Winding-number point-in-ring test. The ring is implicitly closed.
/// A point on an upward or downward crossing edge reports `Boundary`.
pub fn winding_position(p: Vertex, ring: &[Vertex]) -> Position {
    let n = ring.len();
    if n < 3 {
        return Position::Outside;
    }
    let mut wn = 0i32;
    for i in 0..n {
        let a = ring[i];
        let b = ring[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y {
                match side_of_line(a, b, p) {
                    0 => return Position::Boundary,
                    s if s > 0 => wn += 1,
                    _ => {}
                }
            }
        } else if b.y <= p.y {
            match side_of_line(a, b, p) {
                0 => return Position::Boundary,
                s if s < 0 => wn -= 1,
                _ => {}
            }
        }
    }
    if wn == 0 {
        Position::Outside
    } else {
        Position::Inside
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vertex> {
        vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(4.0, 0.0),
            Vertex::new(4.0, 4.0),
            Vertex::new(0.0, 4.0),
        ]
    }

    #[test]
    fn ccw_area_is_positive() {
        let mut sq = square();
        assert_eq!(signed_area(&sq), 16.0);
        sq.reverse();
        assert_eq!(signed_area(&sq), -16.0);
    }

    #[test]
    fn degenerate_area_is_zero() {
        assert_eq!(signed_area(&[Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)]), 0.0);
    }

    #[test]
    fn winding_inside_outside_boundary() {
        let sq = square();
        assert_eq!(winding_position(Vertex::new(2.0, 2.0), &sq), Position::Inside);
        assert_eq!(winding_position(Vertex::new(5.0, 2.0), &sq), Position::Outside);
        assert_eq!(winding_position(Vertex::new(4.0, 2.0), &sq), Position::Boundary);
        // Closing edge (0,4)->(0,0) is part of the ring.
        assert_eq!(winding_position(Vertex::new(0.0, 2.0), &sq), Position::Boundary);
    }

    #[test]
    fn winding_ignores_orientation() {
        let mut sq = square();
        sq.reverse();
        assert_eq!(winding_position(Vertex::new(1.0, 3.0), &sq), Position::Inside);
    }

    #[test]
    fn rect_overlap_is_closed() {
        let a = Rect::of(&square()).unwrap();
        let b = Rect { min_x: 4.0, min_y: 4.0, max_x: 6.0, max_y: 6.0 };
        let c = Rect { min_x: 4.5, min_y: 0.0, max_x: 6.0, max_y: 6.0 };
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(Rect::of(&[]).is_none());
    }

    #[test]
    fn eq_eps_tolerates_rounding() {
        assert!(eq_eps(0.1 + 0.2, 0.3 + 1e-17));
        assert!(!eq_eps(1.0, 1.0 + 1e-9));
    }
}
