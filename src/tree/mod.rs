//! Arena-backed Cartesian tree
//!
//! Min-heap on value, binary search tree on original index.
//!
//! Representation: one `Vec<Node<V>>` in input order, child links are
//! `NodeId`s into it. Teardown is dropping the Vec: no recursion, no
//! per-node frees, no way to share or cycle a node through ownership.

mod builder;
mod invariants;
mod node;
mod traversal;

pub use builder::BuildStats;
pub use invariants::InvariantError;
pub use node::{Node, NodeId};
pub use traversal::{DepthFirst, InOrder};

use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::rmq::QueryMode;
use crate::TreeConfig;

/// Errors raised by [`CartesianTree::with_config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Post-build verification rejected the tree.
    #[error("invariant check failed: {0}")]
    Invariant(#[from] InvariantError),
}

/// Cartesian tree over a sequence, immutable once built
///
/// With the `visualize` feature a tree serializes as its arena and
/// deserializes only if the arena passes [`verify`](Self::verify).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "visualize",
    serde(
        try_from = "RawTree<V>",
        bound(deserialize = "V: Ord + serde::Deserialize<'de>")
    )
)]
pub struct CartesianTree<V> {
    /// Node `i` holds element `i`
    pub(crate) nodes: Vec<Node<V>>,

    /// Global minimum (earliest on ties); `None` iff empty
    pub(crate) root: Option<NodeId>,

    /// Counters from the build pass
    stats: BuildStats,

    /// Strategy used by `range_min`
    pub(crate) query_mode: QueryMode,
}

impl<V: Ord> CartesianTree<V> {
    /// Build in O(n) from a sequence; element positions become indices.
    pub fn build<I: IntoIterator<Item = V>>(values: I) -> Self {
        let built = builder::build_arena(values);
        Self {
            nodes: built.nodes,
            root: built.root,
            stats: built.stats,
            query_mode: QueryMode::default(),
        }
    }

    /// Build, apply `config`, and optionally verify the result.
    pub fn with_config<I: IntoIterator<Item = V>>(
        values: I,
        config: TreeConfig,
    ) -> Result<Self, TreeError> {
        let mut tree = Self::build(values);
        tree.query_mode = config.query_mode;

        if config.verify_invariants {
            tree.verify().map_err(|err| {
                warn!(error = %err, "cartesian tree failed verification");
                err
            })?;
        }

        Ok(tree)
    }

    /// Check heap order, index order and that every index is reachable once.
    pub fn verify(&self) -> Result<(), InvariantError> {
        invariants::verify(self)
    }
}

impl<V> CartesianTree<V> {
    /// Number of nodes (= input length)
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True for the tree of an empty sequence
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Root node: the minimum, earliest index among equal minima
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Look up a node by id
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(id.0)
    }

    /// Node built from original index `index`
    pub fn node_at(&self, index: usize) -> Option<(NodeId, &Node<V>)> {
        self.nodes.get(index).map(|node| (NodeId(index), node))
    }

    /// Value at original index `index`
    pub fn get(&self, index: usize) -> Option<&V> {
        self.nodes.get(index).map(|node| &node.value)
    }

    /// Values in original order (arena order, no tree walk)
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.nodes.iter().map(|node| &node.value)
    }

    /// Counters recorded while building
    pub fn build_stats(&self) -> BuildStats {
        self.stats
    }

    /// Strategy used by [`range_min`](Self::range_min)
    pub fn query_mode(&self) -> QueryMode {
        self.query_mode
    }

    /// Switch the default query strategy
    pub fn set_query_mode(&mut self, mode: QueryMode) {
        self.query_mode = mode;
    }

    /// In-order `(value, index)` pairs, i.e. increasing index
    pub fn traverse(&self) -> InOrder<'_, V> {
        InOrder::new(self)
    }

    /// Alias of [`traverse`](Self::traverse)
    pub fn iter(&self) -> InOrder<'_, V> {
        self.traverse()
    }

    /// Pre-order `(node, depth)` pairs
    pub fn depth_first(&self) -> DepthFirst<'_, V> {
        DepthFirst::new(self)
    }

    /// Nodes on the longest root-to-leaf path (0 when empty)
    ///
    /// O(log n) expected for random input, n for sorted input.
    pub fn height(&self) -> usize {
        self.depth_first()
            .map(|(_, depth)| depth + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Unchecked arena as read from a serialized tree
#[cfg(feature = "visualize")]
#[derive(serde::Deserialize)]
struct RawTree<V> {
    nodes: Vec<Node<V>>,
    root: Option<NodeId>,
    stats: BuildStats,
    query_mode: QueryMode,
}

#[cfg(feature = "visualize")]
impl<V: Ord> TryFrom<RawTree<V>> for CartesianTree<V> {
    type Error = InvariantError;

    fn try_from(raw: RawTree<V>) -> Result<Self, Self::Error> {
        let tree = Self {
            nodes: raw.nodes,
            root: raw.root,
            stats: raw.stats,
            query_mode: raw.query_mode,
        };
        tree.verify()?;
        Ok(tree)
    }
}

impl<V: Ord> FromIterator<V> for CartesianTree<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<'a, V> IntoIterator for &'a CartesianTree<V> {
    type Item = (&'a V, usize);
    type IntoIter = InOrder<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.traverse()
    }
}

impl<V: fmt::Display> fmt::Display for CartesianTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pos, (value, index)) in self.traverse().enumerate() {
            if pos > 0 {
                write!(f, " ")?;
            }
            write!(f, "({}, {})", value, index)?;
        }
        Ok(())
    }
}
