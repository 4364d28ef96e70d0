// Copyright 2025 Lars Brubaker
// License: MIT
//
// Boolean operations on two polygons by a scanbeam sweep.
//
// The y-coordinates of every input vertex cut the plane into horizontal
// scanbeams. Per beam the driver runs two phases:
//   BOUNDARY  new local minima join the active edge table, coincident edges
//             are bundled, and one left-to-right pass over the table
//             classifies every edge meeting the lower boundary (boundary.rs);
//   INTERIOR  crossings strictly inside the beam are found and processed in
//             ascending y, swapping each crossing pair (interior.rs).
// Then every edge advances to the next beam. The output assembler collects the
// result contours as the sweep goes.

mod boundary;
mod interior;

use log::{debug, trace, warn};

use crate::aet::ActiveEdgeTable;
use crate::classify::VertexType;
use crate::edge::{EdgeTable, Source, INVALID};
use crate::error::ClipError;
use crate::geom::Rect;
use crate::intersect::IntersectionTable;
use crate::lmt::LocalMinTable;
use crate::output::{ContourIdx, OutputBuilder};
use crate::polygon::conditioning::{force_winding, rotate_bottom_left, Winding};
use crate::polygon::{Contour, Polygon};
use crate::scanbeam::ScanbeamTree;

// ─────────────────────────────── Public types ──────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Union,
    Intersection,
    /// Subject minus clip.
    Difference,
    /// Symmetric difference.
    Xor,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipOption {
    /// Orient result contours: outer boundaries counter-clockwise, holes
    /// clockwise.
    OrientContours,
    /// Send every contour through the sweep, even those whose bounding box
    /// cannot touch the other polygon.
    SkipPrefilter,
}

// ─────────────────────────────── Clipper ───────────────────────────────────────

/// Configurable entry point for the sweep.
#[derive(Clone, Debug, Default)]
pub struct Clipper {
    orient_contours: bool,
    skip_prefilter: bool,
}

impl Clipper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_option(&mut self, option: ClipOption, value: bool) {
        match option {
            ClipOption::OrientContours => self.orient_contours = value,
            ClipOption::SkipPrefilter => self.skip_prefilter = value,
        }
    }

    /// Compute `subject op clip`.
    pub fn execute(&self, op: Operation, subject: &Polygon, clip: &Polygon) -> Result<Polygon, ClipError> {
        subject.validate()?;
        clip.validate()?;

        if let Some(result) = trivial_result(op, subject, clip) {
            debug!("{:?}: empty operand, returning {} contours without a sweep", op, result.contours().len());
            return Ok(result);
        }

        let mut subj_mask: Vec<bool> = subject.contours().iter().map(|c| c.contributing).collect();
        let mut clip_mask: Vec<bool> = clip.contours().iter().map(|c| c.contributing).collect();
        if !self.skip_prefilter && matches!(op, Operation::Intersection | Operation::Difference) {
            prefilter(op, subject, clip, &mut subj_mask, &mut clip_mask);
        }

        let mut edges = EdgeTable::new();
        let mut sbt = ScanbeamTree::new();
        let mut lmt = LocalMinTable::new();
        lmt.add_polygon(&mut edges, &mut sbt, subject.rings(), &mut subj_mask, Source::Subject, op);
        lmt.add_polygon(&mut edges, &mut sbt, clip.rings(), &mut clip_mask, Source::Clip, op);

        if lmt.is_empty() {
            debug!("{:?}: no contributing contours", op);
            return Ok(Polygon::empty());
        }

        let beams = sbt.build();
        debug!(
            "{:?}: {} subject / {} clip contours, {} edges, {} local minima, {} scanbeams",
            op,
            subject.contours().len(),
            clip.contours().len(),
            edges.len(),
            lmt.len(),
            beams.len()
        );

        let mut sweep = Sweep { op, edges, aet: ActiveEdgeTable::new(), out: OutputBuilder::new() };
        sweep.run(&lmt, &beams)?;

        let result = self.finish(sweep.out);
        debug!("{:?}: {} result contours", op, result.contours().len());
        Ok(result)
    }

    /// Turn the assembled contours into a polygon.
    fn finish(&self, out: OutputBuilder) -> Polygon {
        let contours = out
            .into_contours()
            .into_iter()
            .map(|c| {
                let mut vertices = rotate_bottom_left(&c.vertices);
                if self.orient_contours {
                    let w = if c.hole { Winding::Clockwise } else { Winding::CounterClockwise };
                    force_winding(w, &mut vertices);
                }
                Contour::new(vertices, c.hole)
            })
            .collect();
        Polygon::from_sweep(contours)
    }
}

/// `subject op clip` with default options.
pub fn clip(op: Operation, subject: &Polygon, clip: &Polygon) -> Result<Polygon, ClipError> {
    Clipper::new().execute(op, subject, clip)
}

/// Results that follow from an empty operand alone.
fn trivial_result(op: Operation, subject: &Polygon, clip: &Polygon) -> Option<Polygon> {
    let (s_empty, c_empty) = (subject.is_empty(), clip.is_empty());

    if (c_empty && op == Operation::Intersection)
        || (s_empty && (c_empty || matches!(op, Operation::Intersection | Operation::Difference)))
    {
        return Some(Polygon::empty());
    }
    if c_empty {
        return Some(subject.clone());
    }
    if s_empty {
        return Some(clip.clone());
    }
    None
}

/// Clear the mask entry of every clip contour whose bounding box overlaps no
/// subject contour; for intersection also the other way round.
fn prefilter(op: Operation, subject: &Polygon, clip: &Polygon, subj_mask: &mut [bool], clip_mask: &mut [bool]) {
    let s_boxes: Vec<Option<Rect>> = subject.contours().iter().map(|c| c.bounds()).collect();
    let c_boxes: Vec<Option<Rect>> = clip.contours().iter().map(|c| c.bounds()).collect();
    let overlaps = |a: &Option<Rect>, b: &Option<Rect>| match (a, b) {
        (Some(a), Some(b)) => a.overlaps(b),
        _ => false,
    };

    for (c, cb) in c_boxes.iter().enumerate() {
        if clip_mask[c] && !s_boxes.iter().any(|sb| overlaps(sb, cb)) {
            debug!("{:?}: clip contour {} is outside every subject contour", op, c);
            clip_mask[c] = false;
        }
    }

    if op == Operation::Intersection {
        for (s, sb) in s_boxes.iter().enumerate() {
            if subj_mask[s] && !c_boxes.iter().any(|cb| overlaps(sb, cb)) {
                debug!("{:?}: subject contour {} is outside every clip contour", op, s);
                subj_mask[s] = false;
            }
        }
    }
}

// ─────────────────────────────── Sweep ─────────────────────────────────────────

/// State of one clip call.
struct Sweep {
    op: Operation,
    edges: EdgeTable,
    aet: ActiveEdgeTable,
    out: OutputBuilder,
}

impl Sweep {
    fn run(&mut self, lmt: &LocalMinTable, beams: &[f64]) -> Result<(), ClipError> {
        let mut minima = lmt.nodes.iter().peekable();

        for (i, &yb) in beams.iter().enumerate() {
            let top = beams.get(i + 1).copied();
            let yt = top.unwrap_or(yb);

            if let Some(node) = minima.next_if(|n| n.y == yb) {
                let mut e = node.first_bound;
                while e != INVALID {
                    let next = self.edges[e].next_bound;
                    self.aet.insert(&mut self.edges, e);
                    e = next;
                }
            }

            self.aet.bundle_above(&mut self.edges, yb);
            self.boundary(yb)?;
            self.aet.prune(&mut self.edges, yb, yt);

            if top.is_none() {
                break;
            }

            let table = IntersectionTable::build(&self.aet, &self.edges, yt - yb);
            trace!("scanbeam {} [{}, {}]: {} crossings", i, yb, yt, table.len());
            self.interior(&table, yb);
            self.aet.advance(&mut self.edges, yt);
        }
        Ok(())
    }
}

/// Contour an output action depends on, or the consistency error if it is
/// not there.
fn require(c: ContourIdx, vertex_type: VertexType, x: f64, y: f64) -> Result<ContourIdx, ClipError> {
    if c == INVALID {
        warn!("{:?} at ({}, {}) has no contour to extend; input is probably self-intersecting", vertex_type, x, y);
        return Err(ClipError::MissingContour { vertex_type, x, y });
    }
    Ok(c)
}
