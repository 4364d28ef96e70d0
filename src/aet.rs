// Copyright 2025 Lars Brubaker
// License: MIT
//
// Active edge table.
//
// A doubly-linked list, ordered by (xb, dx), of the edges currently crossing
// the sweep line. The links live in the edges themselves (Edge::prev/next);
// the table only holds the head. INVALID terminates the list at both ends.
//
// Coincident edges (same xb and dx within EPSILON) are grouped into bundles:
// the rightmost edge of a run is the HEAD and carries the combined bundle
// flags, the edges before it are TAILs with cleared flags.

use crate::edge::{BundleState, EdgeIdx, EdgeTable, CLIP, INVALID, SUBJ};
use crate::geom::eq_eps;

#[derive(Clone, Debug)]
pub struct ActiveEdgeTable {
    pub head: EdgeIdx,
}

impl Default for ActiveEdgeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        ActiveEdgeTable { head: INVALID }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == INVALID
    }

    /// Iterate edge indices from left to right.
    pub fn iter<'a>(&self, edges: &'a EdgeTable) -> AetIter<'a> {
        AetIter { edges, cur: self.head }
    }

    /// Insert `e` before the first edge with a strictly greater (xb, dx) key.
    /// Edges with an equal key stay ahead of the new one.
    pub fn insert(&mut self, edges: &mut EdgeTable, e: EdgeIdx) {
        if self.head == INVALID {
            self.head = e;
            edges[e].prev = INVALID;
            edges[e].next = INVALID;
            return;
        }

        let (xb, dx) = (edges[e].xb, edges[e].dx);
        let mut prev = INVALID;
        let mut cur = self.head;
        while cur != INVALID {
            let c = &edges[cur];
            if xb < c.xb || (xb == c.xb && dx < c.dx) {
                break;
            }
            prev = cur;
            cur = c.next;
        }

        edges[e].prev = prev;
        edges[e].next = cur;
        if cur != INVALID {
            edges[cur].prev = e;
        }
        if prev == INVALID {
            self.head = e;
        } else {
            edges[prev].next = e;
        }
    }

    /// Recompute the above-boundary bundle flags for the beam starting at `yb`.
    ///
    /// An edge is present above the boundary unless it terminates at `yb`.
    /// Each surviving edge that coincides with the previous surviving edge
    /// absorbs that edge's flags (parity of its own source, copy of the other)
    /// and becomes the bundle HEAD; the absorbed edge becomes a TAIL.
    pub fn bundle_above(&mut self, edges: &mut EdgeTable, yb: f64) {
        let mut e0 = self.head;
        if e0 == INVALID {
            return;
        }
        reset_above(edges, e0, yb);

        let mut ne = edges[e0].next;
        while ne != INVALID {
            reset_above(edges, ne, yb);
            let t = edges[ne].source.index();
            let o = 1 - t;

            if edges[ne].bundle_above[t] {
                let (a, b) = (&edges[e0], &edges[ne]);
                if eq_eps(a.xb, b.xb) && eq_eps(a.dx, b.dx) && a.top.y != yb {
                    let (at, ao) = (a.bundle_above[t], a.bundle_above[o]);
                    let n = &mut edges[ne];
                    n.bundle_above[t] ^= at;
                    n.bundle_above[o] = ao;
                    n.bstate_above = BundleState::Head;
                    let p = &mut edges[e0];
                    p.bundle_above = [false; 2];
                    p.bstate_above = BundleState::Tail;
                }
                e0 = ne;
            }
            ne = edges[ne].next;
        }
    }

    /// Remove every edge ending at `yb`; give the rest their x at `yt`.
    ///
    /// When a removed edge was the HEAD of a bundle below the boundary, the
    /// TAIL edge preceding it inherits its output contour and becomes the new
    /// HEAD if another TAIL precedes it.
    pub fn prune(&mut self, edges: &mut EdgeTable, yb: f64, yt: f64) {
        let mut e = self.head;
        while e != INVALID {
            let next = edges[e].next;
            if edges[e].top.y == yb {
                let prev = edges[e].prev;
                if prev == INVALID {
                    self.head = next;
                } else {
                    edges[prev].next = next;
                }
                if next != INVALID {
                    edges[next].prev = prev;
                }

                if edges[e].bstate_below == BundleState::Head
                    && prev != INVALID
                    && edges[prev].bstate_below == BundleState::Tail
                {
                    let out = edges[e].out_below;
                    let pp = edges[prev].prev;
                    let p = &mut edges[prev];
                    p.out_below = out;
                    p.bstate_below = BundleState::Unbundled;
                    if pp != INVALID && edges[pp].bstate_below == BundleState::Tail {
                        edges[prev].bstate_below = BundleState::Head;
                    }
                }
            } else {
                let xt = edges[e].x_at(yt);
                edges[e].xt = xt;
            }
            e = next;
        }
    }

    /// Exchange the bundles headed by `e0` and `e1` after they cross inside
    /// the beam. `e0` is the left one at the bottom of the beam.
    ///
    /// Crossing an edge of source S flips the other edge's bundle side for S.
    pub fn swap(&mut self, edges: &mut EdgeTable, e0: EdgeIdx, e1: EdgeIdx) {
        let a0 = edges[e0].bundle_above;
        let a1 = edges[e1].bundle_above;
        for s in [CLIP, SUBJ] {
            if a0[s] {
                edges[e1].bside[s] = !edges[e1].bside[s];
            }
            if a1[s] {
                edges[e0].bside[s] = !edges[e0].bside[s];
            }
        }

        let mut prev = edges[e0].prev;
        let next = edges[e1].next;
        if next != INVALID {
            edges[next].prev = e0;
        }

        // Move the whole e0 bundle, tails included.
        if edges[e0].bstate_above == BundleState::Head {
            while prev != INVALID && edges[prev].bstate_above == BundleState::Tail {
                prev = edges[prev].prev;
            }
        }

        if prev == INVALID {
            let head = self.head;
            edges[head].prev = e1;
            edges[e1].next = head;
            self.head = edges[e0].next;
        } else {
            let first = edges[prev].next;
            edges[first].prev = e1;
            edges[e1].next = first;
            edges[prev].next = edges[e0].next;
        }

        let after = edges[e0].next;
        edges[after].prev = prev;
        let after = edges[e1].next;
        edges[after].prev = e1;
        edges[e0].next = next;
    }

    /// Move to the next beam, whose bottom is `yt`.
    ///
    /// An edge ending at `yt` with a successor is replaced in place by that
    /// successor; every other edge carries its above state down and moves its
    /// bottom x to `xt`. Above-output pointers are cleared on the way.
    pub fn advance(&mut self, edges: &mut EdgeTable, yt: f64) {
        let mut e = self.head;
        while e != INVALID {
            let next = edges[e].next;
            let succ = edges[e].succ;
            let (out, bstate, bundle) = {
                let c = &edges[e];
                (c.out_above, c.bstate_above, c.bundle_above)
            };

            if edges[e].top.y == yt && succ != INVALID {
                let prev = edges[e].prev;
                let s = &mut edges[succ];
                s.out_below = out;
                s.bstate_below = bstate;
                s.bundle_below = bundle;
                s.prev = prev;
                s.next = next;

                if prev == INVALID {
                    self.head = succ;
                } else {
                    edges[prev].next = succ;
                }
                if next != INVALID {
                    edges[next].prev = succ;
                }
            } else {
                let c = &mut edges[e];
                c.out_below = out;
                c.bstate_below = bstate;
                c.bundle_below = bundle;
                c.xb = c.xt;
            }

            edges[e].out_above = INVALID;
            e = next;
        }
    }
}

/// Start the above-boundary state of `e` from scratch for the beam at `yb`.
#[inline]
fn reset_above(edges: &mut EdgeTable, e: EdgeIdx, yb: f64) {
    let edge = &mut edges[e];
    let t = edge.source.index();
    edge.bundle_above[t] = edge.top.y != yb;
    edge.bundle_above[1 - t] = false;
    edge.bstate_above = BundleState::Unbundled;
}

pub struct AetIter<'a> {
    edges: &'a EdgeTable,
    cur: EdgeIdx,
}

impl<'a> Iterator for AetIter<'a> {
    type Item = EdgeIdx;

    fn next(&mut self) -> Option<EdgeIdx> {
        if self.cur == INVALID {
            return None;
        }
        let e = self.cur;
        self.cur = self.edges[e].next;
        Some(e)
    }
}
