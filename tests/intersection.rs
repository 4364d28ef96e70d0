// Copyright 2025 Lars Brubaker
// Intersection tests on the triangle fixtures.

mod helpers;

use gpc_rust::{Operation, Polygon, Position, Vertex};
use helpers::*;

#[test]
fn overlapping_triangles_give_a_hexagon() {
    let p1 = up().intersection(&down()).unwrap();
    verify_valid_output(&p1);
    assert_eq!(p1.contours().len(), 1);
    assert_eq!(p1.num_points(), 6);
    assert_area_approx(p1.area(), 12.0, "hexagon");

    let p2 = down().intersection(&up()).unwrap();
    assert_same_region(&p1, &p2, "commutative");

    let p3 = gpc_rust::intersection(&up(), &down()).unwrap();
    assert!(p1.equals(&p3), "free function differs from method");

    let p4 = Polygon::intersection_all(&[up(), down()]).unwrap();
    assert!(p1.equals(&p4), "n-ary form differs from method");
}

#[test]
fn hexagon_is_its_own_hull() {
    let p1 = up().intersection(&down()).unwrap();
    let hull = p1.hull();
    assert_eq!(hull.num_points(), 6);
    assert_same_region(&p1, &hull, "hull");
}

#[test]
fn subset_is_returned_as_is() {
    let p1 = up().intersection(&small()).unwrap();
    assert_eq!(p1.num_points(), 3);
    assert!(p1.equals(&small()));
    assert!(!p1.equals(&up()));
}

#[test]
fn hexagon_vertices() {
    let p = gpc_rust::clip(Operation::Intersection, &up(), &down()).unwrap();
    let expected = [(2.0, 0.0), (4.0, 0.0), (5.0, 2.0), (4.0, 4.0), (2.0, 4.0), (1.0, 2.0)];
    for (x, y) in expected {
        let found = p.iter_vertices().any(|v| (v.x - x).abs() < 1e-9 && (v.y - y).abs() < 1e-9);
        assert!(found, "missing hexagon corner ({}, {})", x, y);
    }
    assert_eq!(p.contains_point(Vertex::new(3.0, 2.0)), Position::Inside);
    assert_eq!(p.contains_point(Vertex::new(3.0, 5.0)), Position::Outside);
}

#[test]
fn three_way_intersection_folds_left() {
    let r = Polygon::intersection_all(&[square(0.0, 0.0, 4.0), square(1.0, 1.0, 4.0), square(2.0, 0.0, 4.0)]).unwrap();
    assert_area_approx(r.area(), 6.0, "three squares");
    assert_eq!(r.contains_point(Vertex::new(3.0, 2.0)), Position::Inside);
    assert_eq!(r.contains_point(Vertex::new(1.5, 2.0)), Position::Outside);
}

#[test]
fn empty_operand_yields_empty() {
    assert!(up().intersection(&Polygon::empty()).unwrap().is_empty());
    assert!(Polygon::empty().intersection(&up()).unwrap().is_empty());
    assert!(Polygon::intersection_all(&[]).unwrap().is_empty());
}
