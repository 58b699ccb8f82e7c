//! Pattern matcher
//!
//! Exact substring search by descending from the root. Each step picks the
//! single child whose edge starts with the next pattern symbol, then compares
//! the rest of the edge in place against the sequence. Cost is O(m) for a
//! pattern of length m, independent of the sequence length.

use super::types::*;
use super::SuffixTree;
use crate::sequence::alphabet;
use log::debug;
use rayon::prelude::*;

impl SuffixTree {
    /// Node at or below the end of `pattern`'s path, if the pattern occurs.
    ///
    /// Bytes outside the alphabet never occur, so they end the search.
    fn locate(&self, pattern: &[u8]) -> Option<NodeId> {
        let symbols = self.sequence.symbols();
        let mut node = ROOT;
        let mut matched = 0;

        while matched < pattern.len() {
            let first = alphabet::try_encode(pattern[matched])?;
            let child = self.nodes[node].children[first as usize]?;

            let start = self.nodes[child].edge_start;
            let end = self.edge_end(child);
            // The first symbol is guaranteed by the child slot
            let mut k = start + 1;
            matched += 1;

            while k <= end && matched < pattern.len() {
                if alphabet::try_encode(pattern[matched]) != Some(symbols[k]) {
                    return None;
                }
                k += 1;
                matched += 1;
            }

            node = child;
        }

        Some(node)
    }

    /// Offset of the leftmost occurrence of `pattern`.
    ///
    /// The empty pattern is found at offset 0.
    pub fn find_first_occurrence(&self, pattern: impl AsRef<[u8]>) -> Match {
        self.locate(pattern.as_ref())
            .map(|node| self.nodes[node].first_offset)
            .into()
    }

    /// Every offset where `pattern` starts, ascending
    pub fn find_all_occurrences(&self, pattern: impl AsRef<[u8]>) -> Vec<usize> {
        let Some(locus) = self.locate(pattern.as_ref()) else {
            return Vec::new();
        };

        let mut offsets = Vec::new();
        let mut stack = vec![locus];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            match node.leaf_offset {
                Some(offset) => offsets.push(offset),
                None => stack.extend(node.child_ids()),
            }
        }

        offsets.sort_unstable();
        offsets
    }

    /// Number of occurrences of `pattern`
    pub fn count_occurrences(&self, pattern: impl AsRef<[u8]>) -> usize {
        let Some(locus) = self.locate(pattern.as_ref()) else {
            return 0;
        };

        let mut count = 0;
        let mut stack = vec![locus];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_leaf() {
                count += 1;
            } else {
                stack.extend(node.child_ids());
            }
        }
        count
    }

    #[inline]
    pub fn contains(&self, pattern: impl AsRef<[u8]>) -> bool {
        self.locate(pattern.as_ref()).is_some()
    }

    /// Search a batch of patterns, results in input order.
    ///
    /// Batches larger than `parallel_threshold` are spread over the rayon pool.
    pub fn find_many<P>(&self, patterns: &[P], parallel_threshold: usize) -> Vec<Match>
    where
        P: AsRef<[u8]> + Sync,
    {
        let parallel = patterns.len() > parallel_threshold;
        debug!(
            "searching {} patterns ({})",
            patterns.len(),
            if parallel { "parallel" } else { "serial" }
        );

        if parallel {
            patterns
                .par_iter()
                .map(|p| self.find_first_occurrence(p))
                .collect()
        } else {
            patterns
                .iter()
                .map(|p| self.find_first_occurrence(p))
                .collect()
        }
    }
}
