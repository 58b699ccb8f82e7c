//! Leaf indexer
//!
//! Runs once after construction. Each leaf gets the start offset of the
//! suffix it spells (`sequence length - path length`), and every node gets
//! the smallest leaf offset in its subtree so searches can report the
//! leftmost occurrence without walking the subtree.

use super::types::*;

/// Assign `leaf_offset` and `first_offset` across the arena.
///
/// Uses an explicit stack; path depth can reach the sequence length.
pub(crate) fn index_leaves(nodes: &mut [Node], text_len: usize, global_end: usize) {
    // Preorder list, so a reverse sweep sees children before parents
    let mut order = Vec::with_capacity(nodes.len());
    let mut stack = vec![(ROOT, 0usize)];

    while let Some((id, depth)) = stack.pop() {
        order.push(id);

        if nodes[id].is_leaf() {
            let offset = text_len - depth;
            nodes[id].leaf_offset = Some(offset);
            nodes[id].first_offset = offset;
            continue;
        }

        for child in nodes[id].child_ids().collect::<Vec<_>>() {
            let node = &nodes[child];
            let len = node.edge_end.resolve(global_end) + 1 - node.edge_start;
            stack.push((child, depth + len));
        }
    }

    for &id in order.iter().rev() {
        if nodes[id].is_leaf() {
            continue;
        }
        let first = nodes[id]
            .child_ids()
            .map(|child| nodes[child].first_offset)
            .min()
            .unwrap_or(0);
        nodes[id].first_offset = first;
    }
}
