// Copyright 2025 Lars Brubaker
// Graham scan convex hull.

use std::cmp::Ordering;

use super::conditioning::bottom_left_index;
use crate::geom::Vertex;

#[inline]
fn cross(o: Vertex, a: Vertex, b: Vertex) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[inline]
fn dist2(a: Vertex, b: Vertex) -> f64 {
    (a.x - b.x) * (a.x - b.x) + (a.y - b.y) * (a.y - b.y)
}

/// Counter-clockwise hull starting at the bottom-left point. Collinear
/// points on the hull boundary are dropped.
pub fn convex_hull(points: &[Vertex]) -> Vec<Vertex> {
    if points.len() <= 3 {
        return points.to_vec();
    }

    let mut pts = points.to_vec();
    let pivot_idx = bottom_left_index(&pts);
    let pivot = pts.swap_remove(pivot_idx);

    pts.sort_by(|&a, &b| match cross(pivot, a, b).partial_cmp(&0.0) {
        Some(Ordering::Greater) => Ordering::Less,
        Some(Ordering::Less) => Ordering::Greater,
        _ => dist2(pivot, a).partial_cmp(&dist2(pivot, b)).unwrap_or(Ordering::Equal),
    });

    let mut hull = vec![pivot];
    for p in pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }
    hull
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::signed_area;

    fn pts(v: &[(f64, f64)]) -> Vec<Vertex> {
        v.iter().map(|&p| Vertex::from(p)).collect()
    }

    #[test]
    fn square_with_interior_points() {
        let input = pts(&[(1.0, 1.0), (0.0, 0.0), (4.0, 4.0), (2.0, 3.0), (4.0, 0.0), (0.0, 4.0), (3.0, 1.0)]);
        let hull = convex_hull(&input);
        assert_eq!(hull, pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]));
        assert!(signed_area(&hull) > 0.0);
    }

    #[test]
    fn collinear_boundary_points_are_dropped() {
        let input = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 2.0)]);
        let hull = convex_hull(&input);
        assert_eq!(hull.len(), 4);
    }

    #[test]
    fn pivot_left_of_higher_points() {
        // The lowest point is not the leftmost one.
        let input = pts(&[(-3.0, 5.0), (0.0, 0.0), (3.0, 5.0), (0.0, 2.0)]);
        let hull = convex_hull(&input);
        assert_eq!(hull, pts(&[(0.0, 0.0), (3.0, 5.0), (-3.0, 5.0)]));
    }

    #[test]
    fn tiny_inputs_are_returned_as_is() {
        let tri = pts(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]);
        assert_eq!(convex_hull(&tri), tri);
    }
}
