// Copyright 2025 Lars Brubaker
// License: MIT
//
// Local minimum table.
//
// Each contributing contour is first optimised (vertices inside a horizontal
// run are dropped), then walked twice: forward to collect the upward bounds
// that start at forward local minima, and backward for the mirrored bounds.
// Every bound becomes a contiguous batch of edges chained through pred/succ,
// and its first edge is filed under the y of its local minimum. Bounds that
// share a minimum are kept sorted by (bot.x, dx) through next_bound.

use crate::clip::Operation;
use crate::edge::{Edge, EdgeIdx, EdgeTable, Source, INVALID, LEFT, RIGHT};
use crate::geom::Vertex;
use crate::scanbeam::ScanbeamTree;

/// All bounds starting at one local minimum height.
#[derive(Clone, Debug)]
pub struct LmtNode {
    pub y: f64,
    /// First bound in (bot.x, dx) order; later bounds follow `next_bound`.
    pub first_bound: EdgeIdx,
}

/// Local minima in ascending y.
#[derive(Default)]
pub struct LocalMinTable {
    pub nodes: Vec<LmtNode>,
}

impl LocalMinTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Add every contour of one input polygon.
    ///
    /// `contributing[i]` gates contour `i`. A `false` entry skips the contour
    /// and is reset to `true` on the way through, so a mask produced by the
    /// bounding-box pre-filter is consumed exactly once.
    pub fn add_polygon<'a, I>(
        &mut self,
        edges: &mut EdgeTable,
        sbt: &mut ScanbeamTree,
        contours: I,
        contributing: &mut [bool],
        source: Source,
        op: Operation,
    ) where
        I: IntoIterator<Item = &'a [Vertex]>,
    {
        for (ring, flag) in contours.into_iter().zip(contributing.iter_mut()) {
            if !*flag {
                *flag = true;
                continue;
            }
            if ring.len() < 3 {
                continue;
            }

            let verts = optimize_contour(ring);
            for v in &verts {
                sbt.add(v.y);
            }

            self.contour_pass(edges, &verts, source, op, true);
            self.contour_pass(edges, &verts, source, op, false);
        }
    }

    /// Walk the optimised ring once in one direction, emitting one bound per
    /// local minimum found in that direction.
    fn contour_pass(&mut self, edges: &mut EdgeTable, verts: &[Vertex], source: Source, op: Operation, fwd: bool) {
        let n = verts.len();
        if n == 0 {
            return;
        }
        let step = |i: usize| if fwd { next_index(i, n) } else { prev_index(i, n) };
        let is_min = |i: usize| {
            let (p, c, nx) = (verts[prev_index(i, n)].y, verts[i].y, verts[next_index(i, n)].y);
            if fwd {
                p >= c && nx > c
            } else {
                p > c && nx >= c
            }
        };
        let not_max = |i: usize| verts[step(i)].y > verts[i].y;

        // Clip edges start on the right-hand side for difference so that the
        // clip polygon is treated as inverted.
        let clip_side = if op == Operation::Difference { RIGHT } else { LEFT };
        let bside = [clip_side, LEFT];

        for min in 0..n {
            if !is_min(min) {
                continue;
            }

            let mut edge_count = 1;
            let mut max = step(min);
            while not_max(max) {
                edge_count += 1;
                max = step(max);
            }

            let first = edges.len() as EdgeIdx;
            let mut v = min;
            for i in 0..edge_count {
                let bot = verts[v];
                v = step(v);
                let top = verts[v];

                let mut e = Edge::new(bot, top, source, bside);
                if i > 0 {
                    e.pred = first + i as u32 - 1;
                }
                if i + 1 < edge_count {
                    e.succ = first + i as u32 + 1;
                }
                edges.push(e);
            }

            let node = self.bound_list(verts[min].y);
            self.insert_bound(edges, node, first);
        }
    }

    /// Index of the node for height `y`, inserting one if needed.
    fn bound_list(&mut self, y: f64) -> usize {
        let pos = self.nodes.partition_point(|n| n.y < y);
        if pos == self.nodes.len() || self.nodes[pos].y != y {
            self.nodes.insert(pos, LmtNode { y, first_bound: INVALID });
        }
        pos
    }

    /// Link bound `e` into node `node`, keeping (bot.x, dx) order. Ties keep
    /// insertion order.
    fn insert_bound(&mut self, edges: &mut EdgeTable, node: usize, e: EdgeIdx) {
        let lmt = &mut self.nodes[node];
        if lmt.first_bound == INVALID {
            lmt.first_bound = e;
            return;
        }

        let (ex, edx) = (edges[e].bot.x, edges[e].dx);
        let mut prev = INVALID;
        let mut cur = lmt.first_bound;
        while cur != INVALID {
            let c = &edges[cur];
            if ex < c.bot.x || (ex == c.bot.x && edx < c.dx) {
                break;
            }
            prev = cur;
            cur = c.next_bound;
        }

        edges[e].next_bound = cur;
        if prev == INVALID {
            lmt.first_bound = e;
        } else {
            edges[prev].next_bound = e;
        }
    }
}

#[inline]
fn prev_index(i: usize, n: usize) -> usize {
    (i + n - 1) % n
}

#[inline]
fn next_index(i: usize, n: usize) -> usize {
    (i + 1) % n
}

/// A vertex is kept when at least one ring neighbour has a different y.
#[inline]
fn is_optimal(ring: &[Vertex], i: usize) -> bool {
    let n = ring.len();
    let y = ring[i].y;
    ring[prev_index(i, n)].y != y || ring[next_index(i, n)].y != y
}

/// Drop vertices lying strictly inside horizontal runs.
pub fn optimize_contour(ring: &[Vertex]) -> Vec<Vertex> {
    (0..ring.len())
        .filter(|&i| is_optimal(ring, i))
        .map(|i| ring[i])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(x, y)
    }

    fn bounds_at(lmt: &LocalMinTable, edges: &EdgeTable, node: usize) -> Vec<EdgeIdx> {
        let mut out = Vec::new();
        let mut e = lmt.nodes[node].first_bound;
        while e != INVALID {
            out.push(e);
            e = edges[e].next_bound;
        }
        out
    }

    fn chain_len(edges: &EdgeTable, mut e: EdgeIdx) -> usize {
        let mut n = 0;
        while e != INVALID {
            n += 1;
            e = edges[e].succ;
        }
        n
    }

    #[test]
    fn optimise_drops_horizontal_interior() {
        let ring = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)];
        let opt = optimize_contour(&ring);
        assert_eq!(opt, vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)]);
    }

    #[test]
    fn optimise_is_idempotent() {
        let ring = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0), v(3.0, 1.0), v(2.0, 2.0), v(1.0, 2.0), v(0.0, 2.0)];
        let once = optimize_contour(&ring);
        let twice = optimize_contour(&once);
        assert_eq!(once.len(), twice.len());
        assert_eq!(once, twice);
    }

    #[test]
    fn triangle_has_one_minimum_two_bounds() {
        let tri = [v(0.0, 0.0), v(4.0, 0.0), v(2.0, 3.0)];
        let mut lmt = LocalMinTable::new();
        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut mask = [true];
        lmt.add_polygon(&mut edges, &mut sbt, [&tri[..]], &mut mask, Source::Subject, Operation::Union);

        // Horizontal base is not an edge; both bounds start at y = 0.
        assert_eq!(edges.len(), 2);
        assert_eq!(lmt.len(), 1);
        assert_eq!(lmt.nodes[0].y, 0.0);
        let b = bounds_at(&lmt, &edges, 0);
        assert_eq!(b.len(), 2);
        // Sorted by bottom x.
        assert_eq!(edges[b[0]].bot.x, 0.0);
        assert_eq!(edges[b[1]].bot.x, 4.0);
        assert_eq!(sbt.build(), vec![0.0, 3.0]);
    }

    #[test]
    fn bounds_chain_through_succ() {
        // Diamond with an extra vertex on the right flank: right bound has 2 edges.
        let ring = [v(0.0, 0.0), v(2.0, 1.0), v(1.0, 3.0), v(-1.0, 1.5)];
        let mut lmt = LocalMinTable::new();
        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut mask = [true];
        lmt.add_polygon(&mut edges, &mut sbt, [&ring[..]], &mut mask, Source::Clip, Operation::Union);

        assert_eq!(lmt.len(), 1);
        let b = bounds_at(&lmt, &edges, 0);
        assert_eq!(b.len(), 2);
        let lens: Vec<usize> = b.iter().map(|&e| chain_len(&edges, e)).collect();
        assert_eq!(lens.iter().sum::<usize>(), 4);
        for &e in &b {
            let mut cur = e;
            while edges[cur].succ != INVALID {
                let s = edges[cur].succ;
                assert_eq!(edges[s].pred, cur);
                assert_eq!(edges[s].bot, edges[cur].top);
                cur = s;
            }
        }
    }

    #[test]
    fn difference_starts_clip_edges_on_the_right() {
        let tri = [v(0.0, 0.0), v(4.0, 0.0), v(2.0, 3.0)];
        let mut lmt = LocalMinTable::new();
        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut mask = [true];
        lmt.add_polygon(&mut edges, &mut sbt, [&tri[..]], &mut mask, Source::Clip, Operation::Difference);
        assert!(edges.edges.iter().all(|e| e.bside == [RIGHT, LEFT]));

        let mut edges2 = EdgeTable::new();
        let mut mask = [true];
        LocalMinTable::new().add_polygon(&mut edges2, &mut sbt, [&tri[..]], &mut mask, Source::Clip, Operation::Intersection);
        assert!(edges2.edges.iter().all(|e| e.bside == [LEFT, LEFT]));
    }

    #[test]
    fn non_contributing_contour_is_skipped_and_flag_consumed() {
        let a = [v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0)];
        let b = [v(5.0, 5.0), v(6.0, 5.0), v(5.0, 6.0)];
        let mut lmt = LocalMinTable::new();
        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut mask = [false, true];
        lmt.add_polygon(&mut edges, &mut sbt, [&a[..], &b[..]], &mut mask, Source::Subject, Operation::Intersection);

        assert_eq!(mask, [true, true]);
        assert_eq!(lmt.len(), 1);
        assert_eq!(lmt.nodes[0].y, 5.0);
        assert_eq!(sbt.build(), vec![5.0, 6.0]);
    }

    #[test]
    fn degenerate_contours_add_nothing() {
        let line = [v(0.0, 0.0), v(1.0, 1.0)];
        let flat = [v(0.0, 0.0), v(1.0, 0.0), v(2.0, 0.0)];
        let mut lmt = LocalMinTable::new();
        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut mask = [true, true];
        lmt.add_polygon(&mut edges, &mut sbt, [&line[..], &flat[..]], &mut mask, Source::Subject, Operation::Union);
        assert!(lmt.is_empty());
        assert!(edges.is_empty());
        assert!(sbt.is_empty());
    }

    #[test]
    fn minima_are_sorted_by_y() {
        let hi = [v(0.0, 5.0), v(1.0, 5.0), v(0.0, 6.0)];
        let lo = [v(0.0, -1.0), v(1.0, -1.0), v(0.0, 0.0)];
        let mut lmt = LocalMinTable::new();
        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut mask = [true, true];
        lmt.add_polygon(&mut edges, &mut sbt, [&hi[..], &lo[..]], &mut mask, Source::Subject, Operation::Union);
        let ys: Vec<f64> = lmt.nodes.iter().map(|n| n.y).collect();
        assert_eq!(ys, vec![-1.0, 5.0]);
    }
}
