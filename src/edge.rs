// Copyright 2025 Lars Brubaker
// License: MIT
//
// Edge records for the scanbeam sweep.
//
// Every non-horizontal segment of an input contour becomes one Edge, directed
// upward (bot.y < top.y). Edges live in a single EdgeTable arena for the whole
// clip call and are addressed by u32 index; INVALID (u32::MAX) stands in for a
// null link. Nothing is freed individually: the arena is dropped with the call.
//
// Link ownership:
//   - prev / next   position in the active edge table (owned by aet.rs)
//   - pred / succ   neighbour in the same monotonic bound (fixed after build)
//   - next_bound    next bound starting at the same local minimum (lmt.rs)

use std::ops::{Index, IndexMut};

use crate::geom::Vertex;
use crate::output::ContourIdx;

pub const INVALID: u32 = u32::MAX;

/// Index into EdgeTable::edges
pub type EdgeIdx = u32;

/// Which input polygon an edge came from. Also indexes the per-source arrays.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Clip = 0,
    Subject = 1,
}

impl Source {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn other(self) -> Source {
        match self {
            Source::Clip => Source::Subject,
            Source::Subject => Source::Clip,
        }
    }
}

pub const CLIP: usize = Source::Clip as usize;
pub const SUBJ: usize = Source::Subject as usize;

/// Role of an edge within a run of coincident edges.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BundleState {
    #[default]
    Unbundled,
    Head,
    Tail,
}

/// Parity side an edge represents inside its bundle. `false` is LEFT.
pub type Side = bool;
pub const LEFT: Side = false;
pub const RIGHT: Side = true;

#[derive(Clone, Debug)]
pub struct Edge {
    /// Lower endpoint.
    pub bot: Vertex,
    /// Upper endpoint.
    pub top: Vertex,
    /// x at the bottom of the current scanbeam.
    pub xb: f64,
    /// x at the top of the current scanbeam.
    pub xt: f64,
    /// Change in x for a unit increase in y.
    pub dx: f64,
    pub source: Source,
    /// Bundle side per source, indexed by CLIP / SUBJ.
    pub bside: [Side; 2],
    /// Bundle membership per source above the current boundary.
    pub bundle_above: [bool; 2],
    /// Bundle membership per source below the current boundary.
    pub bundle_below: [bool; 2],
    pub bstate_above: BundleState,
    pub bstate_below: BundleState,
    /// Output contour this edge feeds above the boundary (INVALID if none).
    pub out_above: ContourIdx,
    /// Output contour this edge feeds below the boundary (INVALID if none).
    pub out_below: ContourIdx,
    pub prev: EdgeIdx,
    pub next: EdgeIdx,
    pub pred: EdgeIdx,
    pub succ: EdgeIdx,
    pub next_bound: EdgeIdx,
}

impl Edge {
    /// A fresh edge from `bot` to `top`; `bot.y` must be below `top.y`.
    pub fn new(bot: Vertex, top: Vertex, source: Source, bside: [Side; 2]) -> Self {
        Edge {
            bot,
            top,
            xb: bot.x,
            xt: bot.x,
            dx: (top.x - bot.x) / (top.y - bot.y),
            source,
            bside,
            bundle_above: [false; 2],
            bundle_below: [false; 2],
            bstate_above: BundleState::Unbundled,
            bstate_below: BundleState::Unbundled,
            out_above: INVALID,
            out_below: INVALID,
            prev: INVALID,
            next: INVALID,
            pred: INVALID,
            succ: INVALID,
            next_bound: INVALID,
        }
    }

    /// True when the edge takes part in the current beam for either source.
    #[inline]
    pub fn contributes_above(&self) -> bool {
        self.bundle_above[CLIP] || self.bundle_above[SUBJ]
    }

    /// x-coordinate of the edge at height `y` (`y` within the edge's span).
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        if y == self.top.y {
            self.top.x
        } else {
            self.bot.x + self.dx * (y - self.bot.y)
        }
    }
}

/// Arena owning every edge built during one clip call.
#[derive(Default)]
pub struct EdgeTable {
    pub edges: Vec<Edge>,
}

impl EdgeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge and return its index.
    pub fn push(&mut self, edge: Edge) -> EdgeIdx {
        let idx = self.edges.len() as EdgeIdx;
        self.edges.push(edge);
        idx
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Index<EdgeIdx> for EdgeTable {
    type Output = Edge;

    #[inline]
    fn index(&self, idx: EdgeIdx) -> &Edge {
        &self.edges[idx as usize]
    }
}

impl IndexMut<EdgeIdx> for EdgeTable {
    #[inline]
    fn index_mut(&mut self, idx: EdgeIdx) -> &mut Edge {
        &mut self.edges[idx as usize]
    }
}
