// Copyright 2025 Lars Brubaker
// License: MIT
//
// Scanbeam table.
//
// Every vertex y of every contributing contour is recorded in an unbalanced
// binary search tree (arena-backed, u32 links). Once the local minimum table
// is complete the tree is flattened in order into the ascending list of
// scanbeam boundaries the sweep walks through. Both operations are iterative.

use crate::edge::INVALID;

#[derive(Clone, Debug)]
struct TreeNode {
    y: f64,
    less: u32,
    more: u32,
}

/// Set of distinct scanbeam boundary heights.
#[derive(Default)]
pub struct ScanbeamTree {
    nodes: Vec<TreeNode>,
}

impl ScanbeamTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `y`. Inserting a value already present is a no-op.
    pub fn add(&mut self, y: f64) {
        if self.nodes.is_empty() {
            self.nodes.push(TreeNode { y, less: INVALID, more: INVALID });
            return;
        }

        let mut node = 0usize;
        loop {
            let n = &self.nodes[node];
            if n.y == y {
                return;
            }
            let child = if n.y > y { n.less } else { n.more };
            if child == INVALID {
                let idx = self.nodes.len() as u32;
                self.nodes.push(TreeNode { y, less: INVALID, more: INVALID });
                let n = &mut self.nodes[node];
                if n.y > y {
                    n.less = idx;
                } else {
                    n.more = idx;
                }
                return;
            }
            node = child as usize;
        }
    }

    /// Number of distinct values recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// In-order flatten into an ascending list.
    pub fn build(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return out;
        }

        let mut stack: Vec<u32> = Vec::new();
        let mut node = 0u32;
        loop {
            while node != INVALID {
                stack.push(node);
                node = self.nodes[node as usize].less;
            }
            match stack.pop() {
                Some(n) => {
                    out.push(self.nodes[n as usize].y);
                    node = self.nodes[n as usize].more;
                }
                None => break,
            }
        }
        out
    }
}
