// Copyright 2025 Lars Brubaker
// License: MIT
//
// Public polygon facade.
//
// A Polygon is a list of contours, each a closed vertex ring flagged as an
// outer boundary or a hole. Zero contours is the empty polygon. Set operations
// run the scanbeam clipper; n-ary forms fold it pairwise from the left.

pub mod conditioning;
pub mod hull;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clip::{clip, Operation};
use crate::error::ClipError;
use crate::geom::{signed_area, winding_position, Position, Rect, Vertex};
use self::conditioning::{force_winding, is_convex, rotate_bottom_left, Winding};

// ─────────────────────────────── Contour ───────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Contour {
    pub vertices: Vec<Vertex>,
    pub hole: bool,
    /// Whether the contour enters a sweep. Callers normally leave this
    /// `true`; a `false` contour is ignored by the clipper. The clipper
    /// copies the flag into its own per-call mask and never clears it here,
    /// so the contour stays excluded from every later clip as well.
    #[cfg_attr(feature = "serde", serde(skip, default = "contributing_default"))]
    pub contributing: bool,
}

#[cfg(feature = "serde")]
fn contributing_default() -> bool {
    true
}

impl Contour {
    pub fn new(vertices: Vec<Vertex>, hole: bool) -> Self {
        Contour { vertices, hole, contributing: true }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::of(&self.vertices)
    }

    /// Shoelace area, positive for counter-clockwise rings.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Same ring up to starting vertex and direction, within EPSILON.
    pub fn same_ring(&self, other: &Contour) -> bool {
        let (a, b) = (&self.vertices, &other.vertices);
        if self.hole != other.hole || a.len() != b.len() {
            return false;
        }
        let n = a.len();
        if n == 0 {
            return true;
        }
        (0..n).any(|shift| {
            let forward = (0..n).all(|i| a[i].approx_eq(&b[(i + shift) % n]));
            let backward = || (0..n).all(|i| a[i].approx_eq(&b[(shift + n - i) % n]));
            forward || backward()
        })
    }
}

// ─────────────────────────────── Polygon ───────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    contours: Vec<Contour>,
}

/// Contours split by role, as exported to JSON.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonVertices {
    pub bounds: Vec<Vec<Vertex>>,
    pub holes: Vec<Vec<Vertex>>,
}

fn collect_finite<I, P>(points: I) -> Result<Vec<Vertex>, ClipError>
where
    I: IntoIterator<Item = P>,
    P: Into<Vertex>,
{
    points
        .into_iter()
        .map(|p| {
            let v: Vertex = p.into();
            if v.is_finite() {
                Ok(v)
            } else {
                Err(ClipError::NonFiniteCoordinate { x: v.x, y: v.y })
            }
        })
        .collect()
}

/// Contours ordered by their first vertex, lowest y then lowest x. Empty
/// contours go last.
fn sort_contours(contours: &mut [Contour]) {
    contours.sort_by(|a, b| match (a.vertices.first(), b.vertices.first()) {
        (Some(p), Some(q)) => p.y.total_cmp(&q.y).then(p.x.total_cmp(&q.x)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

impl Polygon {
    pub fn empty() -> Self {
        Polygon::default()
    }

    fn single(points: Vec<Vertex>, hole: bool) -> Self {
        if points.is_empty() {
            return Polygon::empty();
        }
        let mut ring = rotate_bottom_left(&points);
        let w = if hole { Winding::Clockwise } else { Winding::CounterClockwise };
        force_winding(w, &mut ring);
        Polygon { contours: vec![Contour::new(ring, hole)] }
    }

    /// Outer boundary from a point ring, wound counter-clockwise.
    pub fn from_points<I, P>(points: I) -> Result<Self, ClipError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vertex>,
    {
        Ok(Self::single(collect_finite(points)?, false))
    }

    /// Hole from a point ring, wound clockwise.
    pub fn hole_from_points<I, P>(points: I) -> Result<Self, ClipError>
    where
        I: IntoIterator<Item = P>,
        P: Into<Vertex>,
    {
        Ok(Self::single(collect_finite(points)?, true))
    }

    /// Union of all `bounds` rings minus the union of all `holes` rings.
    pub fn from_vertices(bounds: &[Vec<Vertex>], holes: &[Vec<Vertex>]) -> Result<Self, ClipError> {
        let outer = bounds.iter().map(|b| Self::from_points(b.iter().copied())).collect::<Result<Vec<_>, _>>()?;
        let inner = holes.iter().map(|h| Self::from_points(h.iter().copied())).collect::<Result<Vec<_>, _>>()?;
        let outer = Self::union_all(&outer)?;
        if inner.is_empty() {
            return Ok(outer);
        }
        outer.difference(&Self::union_all(&inner)?)
    }

    /// Raw contours with one hole flag each. Rings are kept exactly as given.
    pub fn from_parts(contours: Vec<Vec<Vertex>>, hole_flags: &[bool]) -> Result<Self, ClipError> {
        if contours.len() != hole_flags.len() {
            return Err(ClipError::MismatchedLengths { contours: contours.len(), flags: hole_flags.len() });
        }
        let contours = contours.into_iter().zip(hole_flags).map(|(v, &h)| Contour::new(v, h)).collect();
        Self::from_contours(contours)
    }

    pub fn from_contours(contours: Vec<Contour>) -> Result<Self, ClipError> {
        let mut polygon = Polygon { contours };
        polygon.validate()?;
        sort_contours(&mut polygon.contours);
        Ok(polygon)
    }

    /// Contours straight out of the sweep: finite and already rotated.
    pub(crate) fn from_sweep(mut contours: Vec<Contour>) -> Self {
        sort_contours(&mut contours);
        Polygon { contours }
    }

    pub(crate) fn validate(&self) -> Result<(), ClipError> {
        match self.iter_vertices().find(|v| !v.is_finite()) {
            Some(v) => Err(ClipError::NonFiniteCoordinate { x: v.x, y: v.y }),
            None => Ok(()),
        }
    }

    /// Vertex rings in contour order, as the sweep consumes them.
    pub(crate) fn rings(&self) -> impl Iterator<Item = &[Vertex]> + '_ {
        self.contours.iter().map(|c| c.vertices.as_slice())
    }

    // ─────── Set operations ─────────────────────────────────────────────────

    fn fold(op: Operation, polys: &[Polygon]) -> Result<Polygon, ClipError> {
        let Some((first, rest)) = polys.split_first() else {
            return Ok(Polygon::empty());
        };
        rest.iter().try_fold(first.clone(), |acc, p| clip(op, &acc, p))
    }

    pub fn union_all(polys: &[Polygon]) -> Result<Polygon, ClipError> {
        Self::fold(Operation::Union, polys)
    }

    pub fn intersection_all(polys: &[Polygon]) -> Result<Polygon, ClipError> {
        Self::fold(Operation::Intersection, polys)
    }

    pub fn xor_all(polys: &[Polygon]) -> Result<Polygon, ClipError> {
        Self::fold(Operation::Xor, polys)
    }

    /// `first` minus every polygon in `rest`.
    pub fn difference_all(first: &Polygon, rest: &[Polygon]) -> Result<Polygon, ClipError> {
        match rest {
            [] => Ok(first.clone()),
            [only] => clip(Operation::Difference, first, only),
            _ => clip(Operation::Difference, first, &Self::union_all(rest)?),
        }
    }

    pub fn union(&self, other: &Polygon) -> Result<Polygon, ClipError> {
        clip(Operation::Union, self, other)
    }

    pub fn intersection(&self, other: &Polygon) -> Result<Polygon, ClipError> {
        clip(Operation::Intersection, self, other)
    }

    pub fn xor(&self, other: &Polygon) -> Result<Polygon, ClipError> {
        clip(Operation::Xor, self, other)
    }

    pub fn difference(&self, other: &Polygon) -> Result<Polygon, ClipError> {
        clip(Operation::Difference, self, other)
    }

    // ─────── Queries ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// A single contour flagged as a hole.
    pub fn is_hole(&self) -> bool {
        self.contours.len() == 1 && self.contours[0].hole
    }

    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn num_points(&self) -> usize {
        self.contours.iter().map(Contour::len).sum()
    }

    /// Vertex `index` counting across contours in order.
    pub fn get(&self, mut index: usize) -> Option<Vertex> {
        for c in &self.contours {
            if index < c.len() {
                return Some(c.vertices[index]);
            }
            index -= c.len();
        }
        None
    }

    pub fn iter_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.contours.iter().flat_map(|c| c.vertices.iter().copied())
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.contours.iter().filter_map(Contour::bounds).reduce(|a, b| a.union(&b))
    }

    /// Enclosed area: outer contours add, holes subtract, whatever their
    /// winding.
    pub fn area(&self) -> f64 {
        self.contours.iter().fold(0.0, |total, c| {
            let a = c.signed_area().abs();
            if c.hole {
                total - a
            } else {
                total + a
            }
        })
    }

    /// Where `p` lies. A point on any contour is on the boundary; otherwise
    /// it is inside when an odd number of contours enclose it.
    pub fn contains_point(&self, p: Vertex) -> Position {
        let mut enclosing = 0;
        for c in &self.contours {
            match winding_position(p, &c.vertices) {
                Position::Boundary => return Position::Boundary,
                Position::Inside => enclosing += 1,
                Position::Outside => {}
            }
        }
        if enclosing % 2 == 1 {
            Position::Inside
        } else {
            Position::Outside
        }
    }

    /// Where `other` lies. Its vertices on this polygon's boundary do not
    /// count either way.
    pub fn contains(&self, other: &Polygon) -> Position {
        let (mut inside, mut outside) = (0usize, 0usize);
        for v in other.iter_vertices() {
            match self.contains_point(v) {
                Position::Inside => inside += 1,
                Position::Outside => outside += 1,
                Position::Boundary => {}
            }
        }
        match (inside, outside) {
            (i, 0) if i > 0 => Position::Inside,
            (0, o) if o > 0 => Position::Outside,
            _ => Position::Boundary,
        }
    }

    /// One polygon per outer contour, each with the holes whose first vertex
    /// lies inside it. A polygon with at most one outer contour explodes into
    /// itself.
    pub fn explode(&self) -> Vec<Polygon> {
        if self.is_empty() {
            return Vec::new();
        }
        let (outer, mut holes): (Vec<&Contour>, Vec<&Contour>) = self.contours.iter().partition(|c| !c.hole);
        if outer.len() <= 1 {
            return vec![self.clone()];
        }

        let mut parts = Vec::with_capacity(outer.len());
        for b in outer {
            let mut contours = vec![b.clone()];
            holes.retain(|h| {
                let inside = h
                    .vertices
                    .first()
                    .map_or(false, |&v| winding_position(v, &b.vertices) == Position::Inside);
                if inside {
                    contours.push((*h).clone());
                }
                !inside
            });
            parts.push(Polygon::from_sweep(contours));
        }
        parts
    }

    /// Same contours, each matched once, up to start vertex and direction.
    pub fn equals(&self, other: &Polygon) -> bool {
        if self.contours.len() != other.contours.len() {
            return false;
        }
        let mut used = vec![false; other.contours.len()];
        self.contours.iter().all(|c| {
            let found = other.contours.iter().enumerate().find(|(j, d)| !used[*j] && c.same_ring(d));
            match found {
                Some((j, _)) => {
                    used[j] = true;
                    true
                }
                None => false,
            }
        })
    }

    /// Convex hull of the outer contours.
    pub fn hull(&self) -> Polygon {
        if let [only] = self.contours.as_slice() {
            if !only.hole && is_convex(&only.vertices) {
                return self.clone();
            }
        }
        let candidates: Vec<Vertex> =
            self.contours.iter().filter(|c| !c.hole).flat_map(|c| c.vertices.iter().copied()).collect();
        if candidates.is_empty() {
            return Polygon::empty();
        }
        Polygon { contours: vec![Contour::new(hull::convex_hull(&candidates), false)] }
    }

    pub fn to_vertices(&self) -> PolygonVertices {
        let mut out = PolygonVertices::default();
        for c in &self.contours {
            if c.hole {
                out.holes.push(c.vertices.clone());
            } else {
                out.bounds.push(c.vertices.clone());
            }
        }
        out
    }

    /// `{"bounds": [[{x, y}, ...]], "holes": [...]}`
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ClipError> {
        serde_json::to_string(&self.to_vertices()).map_err(|e| ClipError::Json(e.to_string()))
    }
}
