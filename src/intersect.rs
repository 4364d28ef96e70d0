// Copyright 2025 Lars Brubaker
// License: MIT
//
// Intersection table for the interior of one scanbeam.
//
// The bundle heads of the active edge table are insertion-sorted by their x at
// the top of the beam. Whenever an edge has to move left past an edge already
// in the sorted list, the two cross inside the beam and the crossing is
// recorded. The result lists the crossings in ascending y; crossings at the
// same height keep discovery order.

use crate::aet::ActiveEdgeTable;
use crate::edge::{BundleState, EdgeIdx, EdgeTable};
use crate::geom::{Vertex, EPSILON};

/// One crossing. `e0` is the edge that is left of `e1` at the bottom of the
/// beam. `point.y` is measured from the beam bottom.
#[derive(Clone, Debug)]
pub struct Intersection {
    pub e0: EdgeIdx,
    pub e1: EdgeIdx,
    pub point: Vertex,
}

#[derive(Clone, Debug)]
struct SortedEdge {
    edge: EdgeIdx,
    xb: f64,
    xt: f64,
    dx: f64,
}

#[derive(Default)]
pub struct IntersectionTable {
    pub nodes: Vec<Intersection>,
}

impl IntersectionTable {
    /// Find every crossing between contributing bundle heads in a beam of
    /// height `dy`. Edges must already carry `xt` for the beam top.
    pub fn build(aet: &ActiveEdgeTable, edges: &EdgeTable, dy: f64) -> Self {
        let mut table = IntersectionTable::default();
        let mut sorted: Vec<SortedEdge> = Vec::new();

        for e in aet.iter(edges) {
            let edge = &edges[e];
            if edge.bstate_above == BundleState::Head || edge.contributes_above() {
                table.add_sorted_edge(&mut sorted, e, edge.xb, edge.xt, edge.dx, dy);
            }
        }
        table
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Intersection> {
        self.nodes.iter()
    }

    /// Slide the new edge leftwards from the right end of `sorted`, recording
    /// a crossing with every edge it passes.
    fn add_sorted_edge(&mut self, sorted: &mut Vec<SortedEdge>, edge: EdgeIdx, xb: f64, xt: f64, dx: f64, dy: f64) {
        let mut pos = sorted.len();
        while pos > 0 {
            let s = &sorted[pos - 1];
            let den = (s.xt - s.xb) - (xt - xb);
            if xt >= s.xt || dx == s.dx || den.abs() <= EPSILON {
                break;
            }

            let r = (xb - s.xb) / den;
            let x = s.xb + r * (s.xt - s.xb);
            let y = r * dy;
            self.add_intersection(s.edge, edge, x, y);
            pos -= 1;
        }
        sorted.insert(pos, SortedEdge { edge, xb, xt, dx });
    }

    fn add_intersection(&mut self, e0: EdgeIdx, e1: EdgeIdx, x: f64, y: f64) {
        let pos = self.nodes.partition_point(|n| n.point.y <= y);
        self.nodes.insert(pos, Intersection { e0, e1, point: Vertex::new(x, y) });
    }
}
