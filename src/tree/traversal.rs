//! Iterative traversals
//!
//! Key property: in-order over a Cartesian tree = original index order.
//! Both walks keep an explicit stack, so a degenerate (sorted) input of
//! any length cannot overflow the call stack.

use std::iter::FusedIterator;

use super::{CartesianTree, NodeId};

/// Lazy in-order walk yielding `(value, index)` pairs
///
/// Stack depth: O(height)
#[derive(Debug, Clone)]
pub struct InOrder<'a, V> {
    tree: &'a CartesianTree<V>,

    /// Ancestors whose left subtree is being walked
    stack: Vec<NodeId>,

    /// Nodes not yet emitted
    remaining: usize,
}

impl<'a, V> InOrder<'a, V> {
    pub(crate) fn new(tree: &'a CartesianTree<V>) -> Self {
        let mut walk = Self {
            tree,
            stack: Vec::new(),
            remaining: tree.len(),
        };
        walk.descend_left(tree.root());
        walk
    }

    fn descend_left(&mut self, mut cursor: Option<NodeId>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.tree.nodes[id.0].left;
        }
    }
}

impl<'a, V> Iterator for InOrder<'a, V> {
    type Item = (&'a V, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let tree = self.tree;
        let node = &tree.nodes[id.0];
        self.descend_left(node.right);
        self.remaining -= 1;
        Some((&node.value, node.index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for InOrder<'_, V> {}

impl<V> FusedIterator for InOrder<'_, V> {}

/// Pre-order walk yielding `(node, depth)`; the root has depth 0
#[derive(Debug, Clone)]
pub struct DepthFirst<'a, V> {
    tree: &'a CartesianTree<V>,
    stack: Vec<(NodeId, usize)>,
}

impl<'a, V> DepthFirst<'a, V> {
    pub(crate) fn new(tree: &'a CartesianTree<V>) -> Self {
        Self {
            tree,
            stack: tree.root().map(|root| (root, 0)).into_iter().collect(),
        }
    }
}

impl<'a, V> Iterator for DepthFirst<'a, V> {
    type Item = (NodeId, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let (id, depth) = self.stack.pop()?;
        let node = &self.tree.nodes[id.0];

        // Right pushed first so the left subtree is emitted first
        if let Some(right) = node.right {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left {
            self.stack.push((left, depth + 1));
        }

        Some((id, depth))
    }
}

impl<V> FusedIterator for DepthFirst<'_, V> {}
