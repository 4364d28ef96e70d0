// Copyright 2025 Lars Brubaker
// License: MIT
//
// Vertex classification.
//
// Around every sweep event the four quadrants (top/bottom x left/right) are
// either inside or outside the result. The four occupancy bits, packed as
// tr | tl << 1 | br << 2 | bl << 3, select one of sixteen vertex categories,
// and the category decides what the output assembler does. The bits are
// obtained by combining the per-source inside bits with the operator:
// AND for intersection and difference, XOR for xor, OR for union.

use crate::clip::Operation;
use crate::edge::{Side, CLIP, SUBJ};

/// The sixteen sweep-event categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VertexType {
    /// Empty non-intersection.
    Empty = 0,
    ExternalMax = 1,
    ExternalLeftIntermediate = 2,
    TopEdge = 3,
    ExternalRightIntermediate = 4,
    RightEdge = 5,
    InternalMaxMin = 6,
    InternalMin = 7,
    ExternalMin = 8,
    ExternalMaxMin = 9,
    LeftEdge = 10,
    InternalLeftIntermediate = 11,
    BottomEdge = 12,
    InternalRightIntermediate = 13,
    InternalMax = 14,
    /// Full non-intersection.
    Full = 15,
}

impl VertexType {
    /// Category for the given quadrant occupancy.
    pub fn classify(q: Quadrants) -> VertexType {
        let bits = q.tr as u8 | (q.tl as u8) << 1 | (q.br as u8) << 2 | (q.bl as u8) << 3;
        Self::from_bits(bits)
    }

    pub fn from_bits(bits: u8) -> VertexType {
        match bits & 0xf {
            0 => VertexType::Empty,
            1 => VertexType::ExternalMax,
            2 => VertexType::ExternalLeftIntermediate,
            3 => VertexType::TopEdge,
            4 => VertexType::ExternalRightIntermediate,
            5 => VertexType::RightEdge,
            6 => VertexType::InternalMaxMin,
            7 => VertexType::InternalMin,
            8 => VertexType::ExternalMin,
            9 => VertexType::ExternalMaxMin,
            10 => VertexType::LeftEdge,
            11 => VertexType::InternalLeftIntermediate,
            12 => VertexType::BottomEdge,
            13 => VertexType::InternalRightIntermediate,
            14 => VertexType::InternalMax,
            _ => VertexType::Full,
        }
    }
}

/// Quadrant occupancy around one event.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Quadrants {
    pub tr: bool,
    pub tl: bool,
    pub br: bool,
    pub bl: bool,
}

/// Horizontal edge state of one source along a scanbeam boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum HState {
    /// No horizontal edge.
    #[default]
    None,
    /// Bottom horizontal edge.
    Bottom,
    /// Top horizontal edge.
    Top,
}

impl HState {
    /// Transition after passing an edge whose bundle exists above only
    /// (`exists == 1`), below only (`2`) or on both sides (`3`), with the
    /// source parity already updated.
    pub fn next(self, exists: u8, parity: bool) -> HState {
        use HState::*;
        //            ABOVE        BELOW        CROSS
        //            L     R      L     R      L     R
        const TABLE: [[HState; 6]; 3] = [
            [Bottom, Top, Top, Bottom, None, None],
            [None, None, None, None, Top, Top],
            [None, None, None, None, Bottom, Bottom],
        ];
        debug_assert!((1..=3).contains(&exists));
        TABLE[self as usize][(((exists - 1) << 1) + parity as u8) as usize]
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        self != HState::None
    }
}

impl Operation {
    /// Combine the clip and subject inside bits for this operator.
    #[inline]
    pub fn combine(self, clip: bool, subj: bool) -> bool {
        match self {
            Operation::Intersection | Operation::Difference => clip & subj,
            Operation::Xor => clip ^ subj,
            Operation::Union => clip | subj,
        }
    }
}

/// Per-source sweep state at a scanbeam boundary, left of the current edge.
#[derive(Copy, Clone, Debug, Default)]
pub struct BoundaryState {
    pub parity: [bool; 2],
    pub horiz: [HState; 2],
}

impl BoundaryState {
    /// Start of a boundary pass. For difference the clip polygon starts
    /// inverted.
    pub fn new(op: Operation) -> Self {
        BoundaryState {
            parity: [op == Operation::Difference, false],
            horiz: [HState::None; 2],
        }
    }

    /// Does an edge with the given bundle existence flags (bit 0 above,
    /// bit 1 below, per source) add to the result boundary?
    pub fn contributing(&self, op: Operation, exists: [u8; 2]) -> bool {
        let (ec, es) = (exists[CLIP] != 0, exists[SUBJ] != 0);
        let (pc, ps) = (self.parity[CLIP], self.parity[SUBJ]);
        let (hc, hs) = (self.horiz[CLIP].is_horizontal(), self.horiz[SUBJ].is_horizontal());
        match op {
            Operation::Intersection | Operation::Difference => {
                (ec && (ps || hs)) || (es && (pc || hc)) || (ec && es && pc == ps)
            }
            Operation::Xor => ec || es,
            Operation::Union => (ec && (!ps || hs)) || (es && (!pc || hc)) || (ec && es && pc == ps),
        }
    }

    /// Quadrant occupancy at an edge with the given bundle flags.
    pub fn quadrants(&self, op: Operation, above: [bool; 2], below: [bool; 2]) -> Quadrants {
        let p = self.parity;
        let h = [self.horiz[CLIP].is_horizontal(), self.horiz[SUBJ].is_horizontal()];
        Quadrants {
            br: op.combine(p[CLIP], p[SUBJ]),
            bl: op.combine(p[CLIP] ^ above[CLIP], p[SUBJ] ^ above[SUBJ]),
            tr: op.combine(p[CLIP] ^ h[CLIP], p[SUBJ] ^ h[SUBJ]),
            tl: op.combine(p[CLIP] ^ h[CLIP] ^ below[CLIP], p[SUBJ] ^ h[SUBJ] ^ below[SUBJ]),
        }
    }

    /// Step past an edge: toggle parity by its above flags, then advance the
    /// horizontal state of each source the edge belongs to.
    pub fn pass(&mut self, above: [bool; 2], exists: [u8; 2]) {
        for s in [CLIP, SUBJ] {
            self.parity[s] ^= above[s];
        }
        for s in [CLIP, SUBJ] {
            if exists[s] != 0 {
                self.horiz[s] = self.horiz[s].next(exists[s], self.parity[s]);
            }
        }
    }
}

/// Per-source existence code: bit 0 above the boundary, bit 1 below.
#[inline]
pub fn exists(above: [bool; 2], below: [bool; 2]) -> [u8; 2] {
    [
        above[CLIP] as u8 | (below[CLIP] as u8) << 1,
        above[SUBJ] as u8 | (below[SUBJ] as u8) << 1,
    ]
}

/// Which sources are inside just right of the crossing, above it, derived
/// from the two crossing bundles' flags and sides.
pub fn inside_at_crossing(a0: [bool; 2], side0: [Side; 2], a1: [bool; 2], side1: [Side; 2]) -> [bool; 2] {
    let mut inside = [false; 2];
    for s in [CLIP, SUBJ] {
        inside[s] = (a0[s] && !side0[s]) || (a1[s] && side1[s]) || (!a0[s] && !a1[s] && side0[s] && side1[s]);
    }
    inside
}

/// Quadrant occupancy at the crossing of `e0` (left at the beam bottom,
/// flags `a0`) and `e1` (flags `a1`), given the inside bits from
/// [`inside_at_crossing`].
pub fn crossing_quadrants(op: Operation, inside: [bool; 2], a0: [bool; 2], a1: [bool; 2]) -> Quadrants {
    let (ic, is) = (inside[CLIP], inside[SUBJ]);
    Quadrants {
        tr: op.combine(ic, is),
        tl: op.combine(ic ^ a1[CLIP], is ^ a1[SUBJ]),
        br: op.combine(ic ^ a0[CLIP], is ^ a0[SUBJ]),
        bl: op.combine(ic ^ a1[CLIP] ^ a0[CLIP], is ^ a1[SUBJ] ^ a0[SUBJ]),
    }
}
