// Copyright 2025 Lars Brubaker
// Difference tests.

mod helpers;

use gpc_rust::{Polygon, Position, Vertex};
use helpers::*;

#[test]
fn triangles_leave_three_corners() {
    let p1 = up().difference(&down()).unwrap();
    verify_valid_output(&p1);
    assert_eq!(p1.contours().len(), 3);
    assert!(p1.contours().iter().all(|c| !c.hole));
    assert_eq!(p1.num_points(), 9);
    assert_area_approx(p1.area(), 6.0, "up minus down");
    assert_eq!(p1.contains_point(Vertex::new(3.0, 5.0)), Position::Inside);
    assert_eq!(p1.contains_point(Vertex::new(3.0, 2.0)), Position::Outside);

    let p2 = down().difference(&up()).unwrap();
    assert_eq!(p2.contours().len(), 3);
    assert_eq!(p2.num_points(), 9);
    assert_area_approx(p2.area(), 6.0, "down minus up");
    assert_eq!(p2.contains_point(Vertex::new(3.0, -1.0)), Position::Inside);

    let p3 = gpc_rust::difference(&up(), &down()).unwrap();
    assert!(p1.equals(&p3), "free function differs from method");
    let p4 = Polygon::difference_all(&up(), &[down()]).unwrap();
    assert!(p1.equals(&p4), "n-ary form differs from method");
}

#[test]
fn inner_triangle_becomes_a_hole() {
    let p = up().difference(&small()).unwrap();
    verify_valid_output(&p);
    assert_eq!(p.contours().len(), 2);
    assert_eq!(p.num_points(), 6);
    assert_eq!(p.contours().iter().filter(|c| c.hole).count(), 1);
    assert_area_approx(p.area(), 16.0, "up minus small");
    assert_eq!(p.contains_point(Vertex::new(3.0, 2.0)), Position::Outside);
    assert_eq!(p.contains_point(Vertex::new(3.0, 4.0)), Position::Inside);
    assert_eq!(p.explode().len(), 1);
}

#[test]
fn subtracting_a_superset_leaves_nothing() {
    assert!(small().difference(&up()).unwrap().is_empty());
}

#[test]
fn several_subtrahends_are_unioned_first() {
    let base = square(0.0, 0.0, 6.0);
    let bites = [square(-1.0, -1.0, 2.0), square(5.0, 5.0, 2.0), square(2.0, 2.0, 1.0)];
    let r = Polygon::difference_all(&base, &bites).unwrap();
    verify_valid_output(&r);
    assert_area_approx(r.area(), 36.0 - 1.0 - 1.0 - 1.0, "bitten square");
    assert_eq!(r.contains_point(Vertex::new(2.5, 2.5)), Position::Outside);
    assert_eq!(r.contains_point(Vertex::new(0.5, 0.5)), Position::Outside);
    assert_eq!(r.contains_point(Vertex::new(1.5, 0.5)), Position::Inside);

    assert_eq!(Polygon::difference_all(&base, &[]).unwrap(), base);
}

#[test]
fn empty_subtrahend_returns_subject() {
    assert_eq!(up().difference(&Polygon::empty()).unwrap(), up());
    assert!(Polygon::empty().difference(&up()).unwrap().is_empty());
}
