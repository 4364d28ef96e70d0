// Copyright 2025 Lars Brubaker
// Scanbeam interior phase of the sweep.

use super::Sweep;
use crate::classify::{crossing_quadrants, inside_at_crossing, VertexType};
use crate::edge::{EdgeIdx, INVALID};
use crate::intersect::IntersectionTable;

impl Sweep {
    /// Process the crossings of one beam in ascending y. `yb` is the beam
    /// bottom; crossing heights in `table` are relative to it.
    pub(super) fn interior(&mut self, table: &IntersectionTable, yb: f64) {
        for node in table.iter() {
            let (e0, e1) = (node.e0, node.e1);
            if self.edges[e0].contributes_above() && self.edges[e1].contributes_above() {
                self.crossing_action(e0, e1, node.point.x, node.point.y + yb);
            }
            self.aet.swap(&mut self.edges, e0, e1);
        }
    }

    /// Output action at the crossing of `e0` (left below the crossing) and
    /// `e1`. Actions whose contours are missing are skipped.
    fn crossing_action(&mut self, e0: EdgeIdx, e1: EdgeIdx, x: f64, y: f64) {
        let (a0, a1) = (self.edges[e0].bundle_above, self.edges[e1].bundle_above);
        let inside = inside_at_crossing(a0, self.edges[e0].bside, a1, self.edges[e1].bside);
        let vt = VertexType::classify(crossing_quadrants(self.op, inside, a0, a1));

        let p = self.edges[e0].out_above;
        let q = self.edges[e1].out_above;
        let (has_p, has_q) = (p != INVALID, q != INVALID);

        match vt {
            VertexType::ExternalMin | VertexType::InternalMin => {
                let c = self.out.add_local_min(x, y);
                self.edges[e0].out_above = c;
                self.edges[e1].out_above = c;
            }
            VertexType::ExternalRightIntermediate if has_p => {
                self.out.add_right(p, x, y);
                self.edges[e1].out_above = p;
                self.edges[e0].out_above = INVALID;
            }
            VertexType::ExternalLeftIntermediate if has_q => {
                self.out.add_left(q, x, y);
                self.edges[e0].out_above = q;
                self.edges[e1].out_above = INVALID;
            }
            VertexType::ExternalMax if has_p && has_q => {
                self.out.add_left(p, x, y);
                self.out.merge_right(p, q);
                self.edges[e0].out_above = INVALID;
                self.edges[e1].out_above = INVALID;
            }
            VertexType::InternalLeftIntermediate if has_p => {
                self.out.add_left(p, x, y);
                self.edges[e1].out_above = p;
                self.edges[e0].out_above = INVALID;
            }
            VertexType::InternalRightIntermediate if has_q => {
                self.out.add_right(q, x, y);
                self.edges[e0].out_above = q;
                self.edges[e1].out_above = INVALID;
            }
            VertexType::InternalMax if has_p && has_q => {
                self.out.add_right(p, x, y);
                self.out.merge_left(p, q);
                self.edges[e0].out_above = INVALID;
                self.edges[e1].out_above = INVALID;
            }
            VertexType::InternalMaxMin if has_p && has_q => {
                self.out.add_right(p, x, y);
                self.out.merge_left(p, q);
                let c = self.out.add_local_min(x, y);
                self.edges[e0].out_above = c;
                self.edges[e1].out_above = c;
            }
            VertexType::ExternalMaxMin if has_p && has_q => {
                self.out.add_left(p, x, y);
                self.out.merge_right(p, q);
                let c = self.out.add_local_min(x, y);
                self.edges[e0].out_above = c;
                self.edges[e1].out_above = c;
            }
            _ => {}
        }
    }
}
