// Copyright 2025 Lars Brubaker
// Contour conditioning: canonical start vertex, winding direction, convexity.

use std::f64::consts::PI;

use crate::geom::{signed_area, Vertex};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
}

/// Index of the lowest vertex, leftmost among equals.
pub fn bottom_left_index(points: &[Vertex]) -> usize {
    let mut min = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let m = points[min];
        if p.y < m.y || (p.y == m.y && p.x < m.x) {
            min = i;
        }
    }
    min
}

/// Copy of the ring starting at its bottom-left vertex.
pub fn rotate_bottom_left(points: &[Vertex]) -> Vec<Vertex> {
    let mut out = points.to_vec();
    if !out.is_empty() {
        out.rotate_left(bottom_left_index(points));
    }
    out
}

/// Reverse the ring in place if it does not already wind in direction `w`.
/// The first vertex stays first. Returns the unsigned area.
pub fn force_winding(w: Winding, points: &mut [Vertex]) -> f64 {
    let a = signed_area(points);
    let wrong = match w {
        Winding::CounterClockwise => a < 0.0,
        Winding::Clockwise => a > 0.0,
    };
    if wrong && points.len() > 2 {
        points[1..].reverse();
    }
    a.abs()
}

/// True when every turn along the ring has the same sign and the turns add
/// up to exactly one revolution. Repeated consecutive vertices are ignored;
/// rings with fewer than three distinct corners count as convex.
pub fn is_convex(points: &[Vertex]) -> bool {
    let mut ring: Vec<Vertex> = Vec::with_capacity(points.len());
    for &p in points {
        if ring.last() != Some(&p) {
            ring.push(p);
        }
    }
    while ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }

    let n = ring.len();
    if n < 3 {
        return true;
    }

    let mut prev = ring[n - 1];
    let mut dir = (prev.y - ring[n - 2].y).atan2(prev.x - ring[n - 2].x);
    let mut orientation = 0.0;
    let mut angle_sum = 0.0;

    for &p in &ring {
        let ndir = (p.y - prev.y).atan2(p.x - prev.x);
        let mut angle = ndir - dir;
        if angle <= -PI {
            angle += 2.0 * PI;
        } else if angle > PI {
            angle -= 2.0 * PI;
        }

        if orientation == 0.0 {
            orientation = angle;
        } else if orientation * angle < 0.0 {
            return false;
        }
        angle_sum += angle;
        prev = p;
        dir = ndir;
    }

    (angle_sum / (2.0 * PI)).round().abs() == 1.0
}
