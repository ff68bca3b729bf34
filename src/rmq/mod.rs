//! Range minimum queries over a Cartesian tree
//!
//! Descent rule at node `i` for the inclusive range `[lo, hi]`:
//!   i > hi  -> everything right of `i` is out of range, go left
//!   i < lo  -> everything left of `i` is out of range, go right
//!   otherwise `i` is in range and, by heap order, is the minimum of its
//!   whole subtree, which contains every in-range index.
//!
//! Cost: O(height), so O(log n) expected and O(n) for sorted input.

use std::fmt;

use thiserror::Error;
use tracing::trace;

use crate::tree::{CartesianTree, NodeId};

/// How a query walks the tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub enum QueryMode {
    /// Stop at the first in-range node
    #[default]
    Pruned,

    /// Visit both subtrees of every in-range node and fold the minimum.
    /// Same answers as `Pruned`, O(k + height) for k in-range nodes.
    Exhaustive,
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Pruned => write!(f, "pruned"),
            QueryMode::Exhaustive => write!(f, "exhaustive"),
        }
    }
}

/// Reasons a checked query has no answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The tree was built from an empty sequence.
    #[error("query on an empty tree")]
    EmptyTree,

    /// `lo` is greater than `hi`.
    #[error("inverted range [{lo}, {hi}]")]
    InvertedRange {
        /// Requested lower bound.
        lo: usize,
        /// Requested upper bound.
        hi: usize,
    },

    /// No node was found for an in-bounds range; the tree is malformed.
    #[error("no element found in [{lo}, {hi}]")]
    NoElementInRange {
        /// Requested lower bound.
        lo: usize,
        /// Requested upper bound.
        hi: usize,
    },

    /// `hi` is not an index of the tree.
    #[error("range end {hi} out of bounds for {len} elements")]
    OutOfBounds {
        /// Requested upper bound.
        hi: usize,
        /// Number of elements in the tree.
        len: usize,
    },
}

impl<V: Ord> CartesianTree<V> {
    /// Minimum over original indices `lo..=hi`.
    ///
    /// `None` when the tree is empty, `lo > hi`, or no index in the range
    /// exists. A range reaching past the end is answered over its overlap.
    pub fn range_min(&self, lo: usize, hi: usize) -> Option<&V> {
        self.range_min_with(self.query_mode, lo, hi)
    }

    /// [`range_min`](Self::range_min) with an explicit strategy.
    pub fn range_min_with(&self, mode: QueryMode, lo: usize, hi: usize) -> Option<&V> {
        self.locate_min(mode, lo, hi)
            .map(|id| &self.nodes[id.index()].value)
    }

    /// Original index of the minimum over `lo..=hi`; the earliest one when
    /// the minimum repeats.
    pub fn range_min_index(&self, lo: usize, hi: usize) -> Option<usize> {
        self.locate_min(self.query_mode, lo, hi).map(NodeId::index)
    }

    /// Checked query: requires a non-empty tree and `lo <= hi < len`.
    pub fn try_range_min(&self, lo: usize, hi: usize) -> Result<&V, QueryError> {
        if self.is_empty() {
            return Err(QueryError::EmptyTree);
        }
        if lo > hi {
            return Err(QueryError::InvertedRange { lo, hi });
        }
        if hi >= self.len() {
            return Err(QueryError::OutOfBounds {
                hi,
                len: self.len(),
            });
        }

        self.range_min(lo, hi)
            .ok_or(QueryError::NoElementInRange { lo, hi })
    }

    fn locate_min(&self, mode: QueryMode, lo: usize, hi: usize) -> Option<NodeId> {
        if lo > hi {
            trace!(lo, hi, "inverted range");
            return None;
        }

        let found = match mode {
            QueryMode::Pruned => self.descend_pruned(lo, hi),
            QueryMode::Exhaustive => self.descend_exhaustive(lo, hi),
        };
        trace!(lo, hi, %mode, found = ?found.map(NodeId::index), "range min");
        found
    }

    fn descend_pruned(&self, lo: usize, hi: usize) -> Option<NodeId> {
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = &self.nodes[id.index()];
            cursor = if node.index > hi {
                node.left
            } else if node.index < lo {
                node.right
            } else {
                return Some(id);
            };
        }

        None
    }

    fn descend_exhaustive(&self, lo: usize, hi: usize) -> Option<NodeId> {
        let mut best: Option<NodeId> = None;
        let mut pending: Vec<NodeId> = self.root.into_iter().collect();

        while let Some(id) = pending.pop() {
            let node = &self.nodes[id.index()];

            if node.index > hi {
                pending.extend(node.left);
            } else if node.index < lo {
                pending.extend(node.right);
            } else {
                // Strict `<` keeps the shallowest, i.e. earliest, of equal minima
                let better = match best {
                    Some(current) => node.value < self.nodes[current.index()].value,
                    None => true,
                };
                if better {
                    best = Some(id);
                }
                pending.extend(node.right);
                pending.extend(node.left);
            }
        }

        best
    }
}
