//! Shared helpers for Cartesian tree tests

#![allow(dead_code)]

use cartree::{CartesianTree, NodeId};

/// Brute-force reference: minimum of `values[lo..=hi]` clamped to the slice.
pub fn naive_min<V: Ord>(values: &[V], lo: usize, hi: usize) -> Option<&V> {
    if lo > hi || lo >= values.len() {
        return None;
    }
    let hi = hi.min(values.len() - 1);
    values[lo..=hi].iter().min()
}

/// `(left, right)` child indices of every node, in index order.
pub fn shape<V>(tree: &CartesianTree<V>) -> Vec<(Option<usize>, Option<usize>)> {
    (0..tree.len())
        .filter_map(|index| tree.node_at(index))
        .map(|(_, node)| (node.left().map(NodeId::index), node.right().map(NodeId::index)))
        .collect()
}

/// Deterministic pseudo-random sequence (64-bit LCG).
pub fn lcg_values(seed: u64, len: usize, modulus: i64) -> Vec<i64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as i64) % modulus
        })
        .collect()
}
