use cartree::{CartesianTree, QueryMode};
use proptest::prelude::*;

mod common;
use common::naive_min;

fn sequences() -> impl Strategy<Value = Vec<i32>> {
    // Narrow value range so duplicates are common
    proptest::collection::vec(-8i32..8, 0..96)
}

proptest! {
    #[test]
    fn built_trees_satisfy_heap_and_index_order(values in sequences()) {
        let tree = CartesianTree::build(values.clone());
        prop_assert_eq!(tree.verify(), Ok(()));

        for (id, _) in tree.depth_first() {
            let node = tree.node(id).expect("walked node exists");
            for child in [node.left(), node.right()].into_iter().flatten() {
                let child = tree.node(child).expect("child exists");
                prop_assert!(node.value() <= child.value(), "heap order broken");
            }
            if let Some(left) = node.left() {
                prop_assert!(left.index() < node.index());
            }
            if let Some(right) = node.right() {
                prop_assert!(right.index() > node.index());
            }
        }
    }

    #[test]
    fn traversal_recovers_input(values in sequences()) {
        let tree = CartesianTree::build(values.clone());
        let walked: Vec<(i32, usize)> = tree.traverse().map(|(v, i)| (*v, i)).collect();
        let expected: Vec<(i32, usize)> = values.iter().copied().zip(0..).collect();

        prop_assert_eq!(&walked, &expected);
        // Restartable: a second walk is identical
        let again: Vec<(i32, usize)> = tree.traverse().map(|(v, i)| (*v, i)).collect();
        prop_assert_eq!(walked, again);
    }

    #[test]
    fn range_min_matches_brute_force(values in sequences(), a in 0usize..100, b in 0usize..100) {
        let tree = CartesianTree::build(values.clone());
        let (lo, hi) = (a.min(b), a.max(b));

        let expected = naive_min(&values, lo, hi);
        prop_assert_eq!(tree.range_min_with(QueryMode::Pruned, lo, hi), expected);
        prop_assert_eq!(tree.range_min_with(QueryMode::Exhaustive, lo, hi), expected);
        // No hidden mutation between calls
        prop_assert_eq!(tree.range_min(lo, hi), expected);
    }

    #[test]
    fn range_min_index_is_earliest_minimum(values in sequences(), a in 0usize..96, b in 0usize..96) {
        let tree = CartesianTree::build(values.clone());
        let (lo, hi) = (a.min(b), a.max(b));

        let expected = naive_min(&values, lo, hi)
            .and_then(|min| (lo..values.len()).find(|&i| values[i] == *min));
        prop_assert_eq!(tree.range_min_index(lo, hi), expected);
    }

    #[test]
    fn build_is_linear(values in sequences()) {
        let tree = CartesianTree::build(values.clone());
        let stats = tree.build_stats();

        prop_assert_eq!(stats.nodes, values.len());
        prop_assert!(stats.is_linear());
        prop_assert!(stats.max_stack_depth <= values.len());
    }
}
