// Copyright 2025 Lars Brubaker
// Shared test utilities for gpc-rust tests.

#![allow(dead_code)]

use gpc_rust::{Polygon, Position, Vertex};

/// Triangle pointing up, apex at (3, 6).
pub fn up() -> Polygon {
    Polygon::from_points([(0.0, 0.0), (6.0, 0.0), (3.0, 6.0)]).unwrap()
}

/// Triangle pointing down, apex at (3, -2). Overlaps `up` in a hexagon.
pub fn down() -> Polygon {
    Polygon::from_points([(0.0, 4.0), (6.0, 4.0), (3.0, -2.0)]).unwrap()
}

/// Triangle strictly inside `up`.
pub fn small() -> Polygon {
    Polygon::from_points([(2.0, 1.0), (4.0, 1.0), (3.0, 3.0)]).unwrap()
}

/// Axis-aligned square with its lower-left corner at (x, y).
pub fn square(x: f64, y: f64, s: f64) -> Polygon {
    Polygon::from_points([(x, y), (x + s, y), (x + s, y + s), (x, y + s)]).unwrap()
}

pub fn square_ring(x: f64, y: f64, s: f64) -> Vec<Vertex> {
    vec![Vertex::new(x, y), Vertex::new(x + s, y), Vertex::new(x + s, y + s), Vertex::new(x, y + s)]
}

pub fn assert_area_approx(actual: f64, expected: f64, label: &str) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "{}: expected area ~{}, got {} (diff={})",
        label,
        expected,
        actual,
        (actual - expected).abs()
    );
}

/// Probe points on a grid offset so that none lands on a fixture edge.
fn probes() -> impl Iterator<Item = Vertex> {
    (-6..=26).flat_map(|i| (-6..=26).map(move |j| Vertex::new(i as f64 * 0.5 + 0.137, j as f64 * 0.5 + 0.291)))
}

/// Two polygons cover the same region: equal area and the same answer for
/// every probe point.
pub fn assert_same_region(a: &Polygon, b: &Polygon, label: &str) {
    assert_area_approx(a.area(), b.area(), label);
    for p in probes() {
        let (pa, pb) = (a.contains_point(p), b.contains_point(p));
        if pa == Position::Boundary || pb == Position::Boundary {
            continue;
        }
        assert_eq!(pa, pb, "{}: disagreement at ({}, {})", label, p.x, p.y);
    }
}

/// Every contour of `p` is a closed ring of at least three finite vertices.
pub fn verify_valid_output(p: &Polygon) {
    for (i, c) in p.contours().iter().enumerate() {
        assert!(c.len() >= 3, "contour {} has only {} vertices", i, c.len());
        for v in &c.vertices {
            assert!(v.is_finite(), "contour {} has non-finite vertex ({}, {})", i, v.x, v.y);
        }
    }
}

/// Axis-aligned rectangle from its corners.
pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon {
    Polygon::from_points([(x0, y0), (x1, y0), (x1, y1), (x0, y1)]).unwrap()
}
