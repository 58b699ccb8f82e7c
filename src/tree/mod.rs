//! Compact suffix tree
//!
//! Built online in linear time with Ukkonen's algorithm over the `ACGT$`
//! alphabet, then annotated with leaf offsets for exact substring search.
//!
//! ## Architecture
//!
//! - `builder`: Ukkonen construction (active point, suffix links, global end)
//! - `indexer`: post-construction leaf offset assignment
//! - `matcher`: exact pattern search over the finished tree
//! - `stats`: node counts and depth
//! - `types`: node arena types and search results
//!
//! A finished [`SuffixTree`] is immutable and `Sync`, so one tree can serve
//! concurrent searches.

pub mod builder;
mod indexer;
mod matcher;
mod stats;
pub mod types;

pub use builder::SuffixTreeBuilder;
pub use types::{EdgeEnd, Match, Node, NodeId, ROOT, TreeStats};

use crate::error::DnaError;
use crate::sequence::{Sequence, Symbol};

/// Suffix tree over one sequence
///
/// Edge labels are index ranges into the owned sequence; leaf edges stay
/// open and resolve against `global_end`.
pub struct SuffixTree {
    sequence: Sequence,
    nodes: Vec<Node>,
    global_end: usize,
}

impl SuffixTree {
    /// Build the tree over a validated sequence
    pub fn build(sequence: Sequence) -> Self {
        builder::build(sequence)
    }

    /// Validate raw bases and build the tree over them
    pub fn from_bases(bases: &[u8]) -> Result<Self, DnaError> {
        Ok(Self::build(Sequence::from_bases(bases)?))
    }

    #[inline]
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Node arena; index 0 is the root
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    #[inline]
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Inclusive end of the edge into `id`
    #[inline]
    pub fn edge_end(&self, id: NodeId) -> usize {
        self.nodes[id].edge_end.resolve(self.global_end)
    }

    /// Label of the edge into `id`, borrowed from the sequence
    pub fn edge_label(&self, id: NodeId) -> &[Symbol] {
        if id == ROOT {
            return &[];
        }
        let start = self.nodes[id].edge_start;
        &self.sequence.symbols()[start..=self.edge_end(id)]
    }

    /// One leaf per suffix, terminator-only suffix included
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }
}
