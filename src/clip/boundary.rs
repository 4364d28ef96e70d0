// Copyright 2025 Lars Brubaker
// Scanbeam boundary phase of the sweep.

use super::{require, Sweep};
use crate::classify::{exists, BoundaryState, VertexType};
use crate::edge::{EdgeIdx, INVALID};
use crate::error::ClipError;
use crate::output::ContourIdx;

/// Running output state of one boundary pass.
struct Cursor {
    /// Contour currently open to the left of the pass position.
    cf: ContourIdx,
    /// Last x emitted on this boundary.
    px: f64,
}

impl Sweep {
    /// Classify every edge meeting the boundary at `yb`, left to right, and
    /// apply its output action.
    pub(super) fn boundary(&mut self, yb: f64) -> Result<(), ClipError> {
        let op = self.op;
        let mut state = BoundaryState::new(op);
        let mut cur = Cursor { cf: INVALID, px: f64::MIN };

        let mut e = self.aet.head;
        while e != INVALID {
            let next = self.edges[e].next;
            let (above, below) = (self.edges[e].bundle_above, self.edges[e].bundle_below);
            let ex = exists(above, below);
            if ex == [0, 0] {
                e = next;
                continue;
            }

            self.edges[e].bside = state.parity;
            let contributing = state.contributing(op, ex);
            let quadrants = state.quadrants(op, above, below);
            state.pass(above, ex);

            if contributing {
                let vt = VertexType::classify(quadrants);
                self.boundary_action(e, vt, yb, &mut cur)?;
            }
            e = next;
        }
        Ok(())
    }

    fn boundary_action(&mut self, e: EdgeIdx, vt: VertexType, y: f64, cur: &mut Cursor) -> Result<(), ClipError> {
        let x = self.edges[e].xb;
        let below = self.edges[e].out_below;

        match vt {
            VertexType::ExternalMin | VertexType::InternalMin => {
                cur.cf = self.out.add_local_min(x, y);
                cur.px = x;
                self.edges[e].out_above = cur.cf;
            }
            VertexType::ExternalRightIntermediate => {
                let cf = require(cur.cf, vt, x, y)?;
                if x != cur.px {
                    self.out.add_right(cf, x, y);
                    cur.px = x;
                }
                self.edges[e].out_above = cf;
                cur.cf = INVALID;
            }
            VertexType::ExternalLeftIntermediate => {
                let cf = require(below, vt, x, y)?;
                self.out.add_left(cf, x, y);
                cur.px = x;
                cur.cf = cf;
            }
            VertexType::ExternalMax => {
                let cf = require(cur.cf, vt, x, y)?;
                let below = require(below, vt, x, y)?;
                if x != cur.px {
                    self.out.add_left(cf, x, y);
                    cur.px = x;
                }
                self.out.merge_right(cf, below);
                cur.cf = INVALID;
            }
            VertexType::InternalLeftIntermediate => {
                let cf = require(cur.cf, vt, x, y)?;
                if x != cur.px {
                    self.out.add_left(cf, x, y);
                    cur.px = x;
                }
                self.edges[e].out_above = cf;
                cur.cf = INVALID;
            }
            VertexType::InternalRightIntermediate => {
                let cf = require(below, vt, x, y)?;
                self.out.add_right(cf, x, y);
                cur.px = x;
                cur.cf = cf;
                self.edges[e].out_below = INVALID;
            }
            VertexType::InternalMax => {
                let cf = require(cur.cf, vt, x, y)?;
                let below = require(below, vt, x, y)?;
                if x != cur.px {
                    self.out.add_right(cf, x, y);
                    cur.px = x;
                }
                self.out.merge_left(cf, below);
                cur.cf = INVALID;
                self.edges[e].out_below = INVALID;
            }
            VertexType::InternalMaxMin => {
                let cf = require(cur.cf, vt, x, y)?;
                let below = require(below, vt, x, y)?;
                if x != cur.px {
                    self.out.add_right(cf, x, y);
                    cur.px = x;
                }
                self.out.merge_left(cf, below);
                self.edges[e].out_below = INVALID;
                cur.cf = self.out.add_local_min(x, y);
                self.edges[e].out_above = cur.cf;
            }
            VertexType::ExternalMaxMin => {
                let cf = require(cur.cf, vt, x, y)?;
                let below = require(below, vt, x, y)?;
                if x != cur.px {
                    self.out.add_left(cf, x, y);
                    cur.px = x;
                }
                self.out.merge_right(cf, below);
                self.edges[e].out_below = INVALID;
                cur.cf = self.out.add_local_min(x, y);
                self.edges[e].out_above = cur.cf;
            }
            VertexType::LeftEdge => {
                let below = require(below, vt, x, y)?;
                if self.edges[e].bot.y == y {
                    self.out.add_left(below, x, y);
                }
                self.edges[e].out_above = below;
                cur.px = x;
            }
            VertexType::RightEdge => {
                let below = require(below, vt, x, y)?;
                if self.edges[e].bot.y == y {
                    self.out.add_right(below, x, y);
                }
                self.edges[e].out_above = below;
                cur.px = x;
            }
            VertexType::Empty | VertexType::TopEdge | VertexType::BottomEdge | VertexType::Full => {}
        }
        Ok(())
    }
}
