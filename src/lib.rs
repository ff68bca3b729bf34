//! # Cartesian Trees and Range Minimum Queries
//!
//! A Cartesian tree over a sequence is simultaneously
//!
//! 1. **a min-heap on value**: every node is ≤ both of its children, and
//! 2. **a binary search tree on index**: an in-order walk visits the
//!    elements in their original order.
//!
//! The tree is built in O(n) with a single stack pass, then answers
//! range-minimum queries by descending from the root: the first node whose
//! index falls inside the range is the minimum of that range.
//!
//! ## Usage Example
//!
//! ```
//! use cartree::{build, rmq, traverse};
//!
//! let tree = build(vec![9, 3, 7, 1, 8, 12, 10, 20, 15, 18, 5]);
//! assert_eq!(rmq(&tree, 2, 8), Some(&1));
//!
//! let pairs: Vec<_> = traverse(&tree).take(2).collect();
//! assert_eq!(pairs, vec![(&9, 0), (&3, 1)]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod rmq; // Range minimum evaluator
pub mod tree; // Arena, builder, traversals, verification

// Re-exports for convenience
pub use rmq::{QueryError, QueryMode};
pub use tree::{
    BuildStats, CartesianTree, DepthFirst, InOrder, InvariantError, Node, NodeId, TreeError,
};

/// Configuration applied by [`CartesianTree::with_config`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeConfig {
    /// Strategy used by `range_min`
    pub query_mode: QueryMode,

    /// Run [`CartesianTree::verify`] right after building
    pub verify_invariants: bool,
}

impl TreeConfig {
    /// Set the query strategy.
    pub fn with_query_mode(mut self, query_mode: QueryMode) -> Self {
        self.query_mode = query_mode;
        self
    }

    /// Enable post-build verification.
    pub fn with_verification(mut self, enabled: bool) -> Self {
        self.verify_invariants = enabled;
        self
    }
}

/// Build a Cartesian tree; an empty sequence gives an empty tree.
pub fn build<V: Ord, I: IntoIterator<Item = V>>(sequence: I) -> CartesianTree<V> {
    CartesianTree::build(sequence)
}

/// In-order `(value, index)` pairs in increasing index order.
pub fn traverse<V>(tree: &CartesianTree<V>) -> InOrder<'_, V> {
    tree.traverse()
}

/// Minimum over the inclusive index range `[lo, hi]`, or `None`.
pub fn rmq<V: Ord>(tree: &CartesianTree<V>, lo: usize, hi: usize) -> Option<&V> {
    tree.range_min(lo, hi)
}
