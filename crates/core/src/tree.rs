//! Huffman tree construction.
//!
//! Nodes live in an arena and refer to their children by [`NodeId`]. The tree
//! is built once by [`HuffmanTree::build`] and never mutated afterwards.
//!
//! # Tie-break
//!
//! Candidates are ordered by `(weight, order)` ascending, where `order` is a
//! creation counter: leaves get `0..n` in ascending symbol order, and every
//! merged node takes the next value. So for equal weights:
//! - a lower symbol beats a higher symbol
//! - a leaf beats any merged node
//! - an older merged node beats a newer one
//!
//! Each merge pops two candidates. The first popped becomes the left child
//! (bit `0`) and the second the right child (bit `1`). This ordering fixes the
//! code lengths and the exact codes for a given frequency table.

use crate::frequency::FrequencyTable;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Stable index of a node in the tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Leaf { symbol: u8 },
    Internal { left: NodeId, right: NodeId },
}

/// A tree node with its accumulated weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub weight: u64,
    pub kind: NodeKind,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }
}

/// An immutable Huffman tree.
///
/// # Invariants
/// - Every internal node weighs the sum of its two children
/// - Every leaf weighs its symbol's frequency
/// - There is one leaf per symbol present in the frequency table
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree by repeatedly merging the two lightest candidates.
    ///
    /// With a single distinct symbol the root is that symbol's leaf.
    pub fn build(freqs: &FrequencyTable) -> Self {
        let leaf_count = freqs.distinct_symbols();
        let mut nodes: Vec<Node> = Vec::with_capacity(2 * leaf_count - 1);
        let mut heap = BinaryHeap::with_capacity(leaf_count);

        // Arena index doubles as the tie-break order.
        for (symbol, count) in freqs.iter_present() {
            let id = nodes.len();
            nodes.push(Node {
                weight: count,
                kind: NodeKind::Leaf { symbol },
            });
            heap.push(Reverse((count, id)));
        }

        while heap.len() > 1 {
            let (Some(Reverse((w0, left))), Some(Reverse((w1, right)))) = (heap.pop(), heap.pop())
            else {
                break;
            };

            let id = nodes.len();
            nodes.push(Node {
                weight: w0 + w1,
                kind: NodeKind::Internal {
                    left: NodeId(left),
                    right: NodeId(right),
                },
            });
            heap.push(Reverse((w0 + w1, id)));
        }

        // The last node pushed is the root; for one leaf that is the leaf.
        let root = NodeId(nodes.len() - 1);

        log::debug!(
            "built huffman tree: {} leaves, {} nodes, root weight {}",
            leaf_count,
            nodes.len(),
            nodes[root.0].weight
        );

        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Total weight of the tree (the input length).
    pub fn weight(&self) -> u64 {
        self.node(self.root).weight
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Total number of nodes in the arena.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Depth of the leaf holding `symbol`, or `None` if absent.
    ///
    /// The root is at depth 0, so a single-leaf tree reports 0 even though
    /// its code is one bit long.
    pub fn depth_of(&self, symbol: u8) -> Option<usize> {
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.node(id).kind {
                NodeKind::Leaf { symbol: s } if s == symbol => return Some(depth),
                NodeKind::Leaf { .. } => {}
                NodeKind::Internal { left, right } => {
                    stack.push((right, depth + 1));
                    stack.push((left, depth + 1));
                }
            }
        }
        None
    }
}
