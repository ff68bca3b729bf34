//! Structural verification
//!
//! A Cartesian tree is a min-heap on value and a BST on index at once.
//! Verification walks the tree iteratively with an index window per node
//! and marks each visited index in a bit vector: O(n) time, n bits.

use bitvec::prelude::*;
use thiserror::Error;

use super::{CartesianTree, NodeId};

/// Ways a tree can fail verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// A child holds a smaller value than its parent.
    #[error("heap property violated: node {child} is smaller than its parent {parent}")]
    HeapViolation {
        /// Index of the parent node.
        parent: usize,
        /// Index of the offending child.
        child: usize,
    },

    /// A node's index falls outside the window its ancestors allow.
    #[error("index order violated: node {index} outside allowed range [{low}, {high})")]
    OrderViolation {
        /// Index of the misplaced node.
        index: usize,
        /// Inclusive lower bound implied by ancestors.
        low: usize,
        /// Exclusive upper bound implied by ancestors.
        high: usize,
    },

    /// A node was reached twice (shared child or cycle).
    #[error("node {0} reached more than once")]
    DuplicateVisit(usize),

    /// An index in `0..len` is not reachable from the root.
    #[error("index {0} not reachable from the root")]
    MissingIndex(usize),

    /// The root is absent for a non-empty tree, or present for an empty one.
    #[error("root does not match node count {len}")]
    RootMismatch {
        /// Number of nodes in the arena.
        len: usize,
    },

    /// A child link points outside the arena.
    #[error("dangling link to node {0}")]
    DanglingLink(usize),
}

/// Check heap order, index order and full coverage.
pub(crate) fn verify<V: Ord>(tree: &CartesianTree<V>) -> Result<(), InvariantError> {
    let len = tree.len();
    let root = match (tree.root(), len) {
        (None, 0) => return Ok(()),
        (Some(root), n) if n > 0 => root,
        _ => return Err(InvariantError::RootMismatch { len }),
    };

    let mut seen = bitvec![0; len];
    // (node, parent, allowed index window [low, high))
    let mut pending: Vec<(NodeId, Option<NodeId>, usize, usize)> = vec![(root, None, 0, len)];

    while let Some((id, parent, low, high)) = pending.pop() {
        let node = tree
            .node(id)
            .ok_or(InvariantError::DanglingLink(id.index()))?;

        if seen[id.index()] {
            return Err(InvariantError::DuplicateVisit(id.index()));
        }
        seen.set(id.index(), true);

        if node.index != id.index() || node.index < low || node.index >= high {
            return Err(InvariantError::OrderViolation {
                index: node.index,
                low,
                high,
            });
        }

        if let Some(parent) = parent.and_then(|p| tree.node(p)) {
            if node.value < parent.value {
                return Err(InvariantError::HeapViolation {
                    parent: parent.index,
                    child: node.index,
                });
            }
        }

        if let Some(left) = node.left {
            pending.push((left, Some(id), low, node.index));
        }
        if let Some(right) = node.right {
            pending.push((right, Some(id), node.index + 1, high));
        }
    }

    match seen.first_zero() {
        Some(missing) => Err(InvariantError::MissingIndex(missing)),
        None => Ok(()),
    }
}
