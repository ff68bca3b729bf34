//! Linear-time stack builder
//!
//! The working stack holds the rightmost path of the partial tree.
//! Each element is pushed once and popped at most once: O(n) time.
//!
//! Tie policy: pop only while `top > current`. Equal values stay on the
//! stack, so an earlier equal element becomes the ancestor of a later one.

use tracing::debug;

use super::{Node, NodeId};

/// Counters recorded during the single build pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildStats {
    /// Nodes allocated (= input length)
    pub nodes: usize,

    /// Total pops from the working stack
    pub pops: usize,

    /// Deepest the working stack got (= longest rightmost path seen)
    pub max_stack_depth: usize,
}

impl BuildStats {
    /// Every node is popped at most once
    pub fn is_linear(&self) -> bool {
        self.pops <= self.nodes
    }
}

/// Output of one build pass
#[derive(Debug)]
pub(crate) struct Built<V> {
    pub(crate) nodes: Vec<Node<V>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) stats: BuildStats,
}

/// Build the arena from `values`, left to right.
pub(crate) fn build_arena<V, I>(values: I) -> Built<V>
where
    V: Ord,
    I: IntoIterator<Item = V>,
{
    let values = values.into_iter();
    let mut nodes: Vec<Node<V>> = Vec::with_capacity(values.size_hint().0);
    let mut stack: Vec<NodeId> = Vec::new();
    let mut root = None;
    let mut stats = BuildStats::default();

    for (index, value) in values.enumerate() {
        let id = NodeId(index);

        // Demote everything strictly greater; remember the last one popped
        let mut detached = None;
        while let Some(&top) = stack.last() {
            if nodes[top.0].value > value {
                detached = stack.pop();
                stats.pops += 1;
            } else {
                break;
            }
        }

        match stack.last() {
            Some(&parent) => nodes[parent.0].right = Some(id),
            None => root = Some(id),
        }

        let mut node = Node::new(value, index);
        node.left = detached;
        nodes.push(node);

        stack.push(id);
        stats.max_stack_depth = stats.max_stack_depth.max(stack.len());
    }

    stats.nodes = nodes.len();
    debug!(
        nodes = stats.nodes,
        pops = stats.pops,
        max_stack_depth = stats.max_stack_depth,
        "built cartesian tree"
    );

    Built { nodes, root, stats }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(built: &Built<i32>) -> Vec<(Option<usize>, Option<usize>)> {
        built
            .nodes
            .iter()
            .map(|n| (n.left.map(NodeId::index), n.right.map(NodeId::index)))
            .collect()
    }

    #[test]
    fn test_empty_input_has_no_root() {
        let built = build_arena(Vec::<i32>::new());
        assert!(built.nodes.is_empty());
        assert_eq!(built.root, None);
        assert_eq!(built.stats, BuildStats::default());
    }

    #[test]
    fn test_sample_links() {
        let built = build_arena(vec![9, 3, 7, 1, 8, 12, 10, 20, 15, 18, 5]);

        assert_eq!(built.root, Some(NodeId(3)));
        assert_eq!(
            links(&built),
            vec![
                (None, None),        // 9
                (Some(0), Some(2)),  // 3
                (None, None),        // 7
                (Some(1), Some(10)), // 1
                (None, Some(6)),     // 8
                (None, None),        // 12
                (Some(5), Some(8)),  // 10
                (None, None),        // 20
                (Some(7), Some(9)),  // 15
                (None, None),        // 18
                (Some(4), None),     // 5
            ]
        );
        assert!(built.stats.is_linear());
    }

    #[test]
    fn test_equal_values_chain_right() {
        let built = build_arena(vec![4, 4, 4]);

        assert_eq!(built.root, Some(NodeId(0)));
        assert_eq!(
            links(&built),
            vec![(None, Some(1)), (None, Some(2)), (None, None)]
        );
        assert_eq!(built.stats.pops, 0);
        assert_eq!(built.stats.max_stack_depth, 3);
    }

    #[test]
    fn test_decreasing_input_chains_left() {
        let built = build_arena(vec![5, 4, 3, 2, 1]);

        assert_eq!(built.root, Some(NodeId(4)));
        for (i, node) in built.nodes.iter().enumerate() {
            let expected_left = if i == 0 { None } else { Some(NodeId(i - 1)) };
            assert_eq!(node.left, expected_left);
            assert_eq!(node.right, None);
        }
        assert_eq!(built.stats.pops, 4);
        assert_eq!(built.stats.max_stack_depth, 1);
    }
}
