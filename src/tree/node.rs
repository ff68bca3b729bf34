//! Arena node representation
//!
//! Node = (value, original index, child links)
//! Links are arena ids, never references: the arena owns every node.

use std::fmt;

/// Arena handle for a node.
///
/// Nodes are allocated in input order, so `NodeId(i)` is the node built
/// from the element at original index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node's element in the original sequence.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One element of the input sequence placed in the tree
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct Node<V> {
    /// Element value
    pub(crate) value: V,

    /// Original position (0-based)
    pub(crate) index: usize,

    /// Left child (earlier indices, values >= this one)
    pub(crate) left: Option<NodeId>,

    /// Right child (later indices, values >= this one)
    pub(crate) right: Option<NodeId>,
}

impl<V> Node<V> {
    pub(crate) fn new(value: V, index: usize) -> Self {
        Self {
            value,
            index,
            left: None,
            right: None,
        }
    }

    /// Element value
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Original position of the element
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Left child, if any
    #[inline]
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, if any
    #[inline]
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<V: fmt::Display> fmt::Display for Node<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.value, self.index)
    }
}
