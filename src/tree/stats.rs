use super::types::*;
use super::SuffixTree;

impl SuffixTree {
    /// Count nodes by kind and measure the deepest path
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats {
            sequence_len: self.sequence.len(),
            node_count: self.nodes.len(),
            ..Default::default()
        };

        let mut stack = vec![(ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = &self.nodes[id];
            stats.max_depth = stats.max_depth.max(depth);

            if node.is_leaf() {
                stats.leaf_count += 1;
            } else if id != ROOT {
                stats.internal_count += 1;
            }

            stack.extend(node.child_ids().map(|child| (child, depth + 1)));
        }

        stats
    }
}
