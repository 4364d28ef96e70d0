// Copyright 2025 Lars Brubaker
// Output assembler for the clipper.
//
// Result contours grow at both ends while the sweep runs: left-hand vertices
// are pushed on the front of a singly-linked vertex list, right-hand vertices
// are appended at the back. When two partial contours meet at a maximum their
// lists are spliced and every node that referred to the absorbed contour is
// redirected to the survivor (its proxy). Nodes and vertices live in two
// arenas owned by one clip call.

use crate::edge::INVALID;
use crate::geom::Vertex;

/// Index of a contour node in the assembler.
pub type ContourIdx = u32;

type VertexIdx = u32;

#[derive(Clone, Debug)]
struct VertexNode {
    v: Vertex,
    next: VertexIdx,
}

#[derive(Clone, Debug)]
struct ContourNode {
    active: bool,
    hole: bool,
    left: VertexIdx,
    right: VertexIdx,
    proxy: ContourIdx,
}

/// A finished contour as the sweep produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct OutputContour {
    pub vertices: Vec<Vertex>,
    pub hole: bool,
}

#[derive(Default)]
pub struct OutputBuilder {
    nodes: Vec<ContourNode>,
    verts: Vec<VertexNode>,
}

impl OutputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contour nodes ever created, merged ones included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn push_vertex(&mut self, x: f64, y: f64, next: VertexIdx) -> VertexIdx {
        let idx = self.verts.len() as VertexIdx;
        self.verts.push(VertexNode { v: Vertex::new(x, y), next });
        idx
    }

    #[inline]
    fn proxy(&self, c: ContourIdx) -> ContourIdx {
        self.nodes[c as usize].proxy
    }

    /// Start a new contour holding the single vertex (x, y).
    pub fn add_local_min(&mut self, x: f64, y: f64) -> ContourIdx {
        let v = self.push_vertex(x, y, INVALID);
        let idx = self.nodes.len() as ContourIdx;
        self.nodes.push(ContourNode { active: true, hole: false, left: v, right: v, proxy: idx });
        idx
    }

    pub fn add_left(&mut self, c: ContourIdx, x: f64, y: f64) {
        let p = self.proxy(c) as usize;
        let v = self.push_vertex(x, y, self.nodes[p].left);
        self.nodes[p].left = v;
    }

    pub fn add_right(&mut self, c: ContourIdx, x: f64, y: f64) {
        let p = self.proxy(c) as usize;
        let v = self.push_vertex(x, y, INVALID);
        let right = self.nodes[p].right;
        self.verts[right as usize].next = v;
        self.nodes[p].right = v;
    }

    /// Join `p` in front of `q`. The joined contour becomes a hole.
    pub fn merge_left(&mut self, p: ContourIdx, q: ContourIdx) {
        let (pp, qp) = (self.proxy(p), self.proxy(q));
        self.nodes[qp as usize].hole = true;

        if pp != qp {
            let p_right = self.nodes[pp as usize].right;
            self.verts[p_right as usize].next = self.nodes[qp as usize].left;
            self.nodes[qp as usize].left = self.nodes[pp as usize].left;
            self.redirect(pp, qp);
        }
    }

    /// Join `p` behind `q`. The joined contour becomes an outer boundary.
    pub fn merge_right(&mut self, p: ContourIdx, q: ContourIdx) {
        let (pp, qp) = (self.proxy(p), self.proxy(q));
        self.nodes[qp as usize].hole = false;

        if pp != qp {
            let q_right = self.nodes[qp as usize].right;
            self.verts[q_right as usize].next = self.nodes[pp as usize].left;
            self.nodes[qp as usize].right = self.nodes[pp as usize].right;
            self.redirect(pp, qp);
        }
    }

    /// Point every node proxied by `from` at `to` and retire it.
    fn redirect(&mut self, from: ContourIdx, to: ContourIdx) {
        for node in self.nodes.iter_mut() {
            if node.proxy == from {
                node.active = false;
                node.proxy = to;
            }
        }
    }

    /// Flatten every live contour with more than two vertices, newest first.
    /// Repeated coordinates inside a contour are kept as they are.
    pub fn into_contours(self) -> Vec<OutputContour> {
        let mut out = Vec::new();
        for node in self.nodes.iter().rev() {
            if !node.active {
                continue;
            }
            let proxy = &self.nodes[node.proxy as usize];

            let mut vertices = Vec::new();
            let mut v = proxy.left;
            while v != INVALID {
                let vn = &self.verts[v as usize];
                vertices.push(vn.v);
                v = vn.next;
            }

            if vertices.len() > 2 {
                out.push(OutputContour { vertices, hole: proxy.hole });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xy(c: &OutputContour) -> Vec<(f64, f64)> {
        c.vertices.iter().map(|v| (v.x, v.y)).collect()
    }

    #[test]
    fn grows_at_both_ends() {
        let mut out = OutputBuilder::new();
        let c = out.add_local_min(1.0, 0.0);
        out.add_left(c, 0.0, 1.0);
        out.add_right(c, 2.0, 1.0);
        out.add_left(c, 0.5, 2.0);

        let contours = out.into_contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(xy(&contours[0]), vec![(0.5, 2.0), (0.0, 1.0), (1.0, 0.0), (2.0, 1.0)]);
        assert!(!contours[0].hole);
    }

    #[test]
    fn two_vertex_contours_are_dropped() {
        let mut out = OutputBuilder::new();
        let c = out.add_local_min(0.0, 0.0);
        out.add_right(c, 1.0, 0.0);
        assert!(out.into_contours().is_empty());
    }

    #[test]
    fn merge_right_joins_and_retires_absorbed_contour() {
        // Two contours started at separate minima meet at a maximum.
        let mut out = OutputBuilder::new();
        let a = out.add_local_min(0.0, 0.0);
        out.add_left(a, -1.0, 1.0);
        let b = out.add_local_min(3.0, 0.0);
        out.add_right(b, 4.0, 1.0);

        out.add_left(b, 2.0, 2.0);
        out.merge_right(b, a);
        assert_eq!(out.node_count(), 2);

        let contours = out.into_contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(xy(&contours[0]), vec![(-1.0, 1.0), (0.0, 0.0), (2.0, 2.0), (3.0, 0.0), (4.0, 1.0)]);
        assert!(!contours[0].hole);
    }

    #[test]
    fn merge_left_marks_a_hole() {
        let mut out = OutputBuilder::new();
        let a = out.add_local_min(0.0, 0.0);
        out.add_right(a, 1.0, 1.0);
        let b = out.add_local_min(3.0, 0.0);
        out.add_left(b, 2.0, 1.0);
        out.add_right(a, 1.5, 2.0);
        out.merge_left(a, b);

        let contours = out.into_contours();
        assert_eq!(contours.len(), 1);
        assert!(contours[0].hole);
        assert_eq!(xy(&contours[0]), vec![(0.0, 0.0), (1.0, 1.0), (1.5, 2.0), (2.0, 1.0), (3.0, 0.0)]);
    }

    #[test]
    fn merged_node_forwards_through_proxy() {
        let mut out = OutputBuilder::new();
        let a = out.add_local_min(0.0, 0.0);
        let b = out.add_local_min(5.0, 0.0);
        out.merge_right(a, b);
        // `a` is now an alias of `b`.
        out.add_right(a, 6.0, 1.0);
        out.add_left(b, -1.0, 1.0);

        let contours = out.into_contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(xy(&contours[0]), vec![(-1.0, 1.0), (5.0, 0.0), (0.0, 0.0), (6.0, 1.0)]);
    }

    #[test]
    fn closing_a_contour_on_itself_keeps_it() {
        let mut out = OutputBuilder::new();
        let a = out.add_local_min(0.0, 0.0);
        out.add_left(a, -1.0, 1.0);
        out.add_right(a, 1.0, 1.0);
        out.add_left(a, 0.0, 2.0);
        out.merge_right(a, a);
        let contours = out.into_contours();
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].vertices.len(), 4);
    }
}
