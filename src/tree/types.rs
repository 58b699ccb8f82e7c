//! Types for the suffix tree
//!
//! Nodes live in a flat arena addressed by [`NodeId`]. Edges are never
//! materialized: each node stores the index range of its incoming edge label
//! inside the tree's sequence.

use crate::sequence::ALPHABET_SIZE;
use serde::{Deserialize, Serialize};

/// Index of a node in the arena
pub type NodeId = usize;

/// The root is always the first node allocated
pub const ROOT: NodeId = 0;

/// End of an edge label (inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    /// Fixed end, set when an internal node is split off
    Closed(usize),
    /// Leaf edge, resolved through the shared global end
    Open,
}

impl EdgeEnd {
    /// Inclusive end index, reading open ends from `global_end`
    #[inline]
    pub fn resolve(self, global_end: usize) -> usize {
        match self {
            EdgeEnd::Closed(end) => end,
            EdgeEnd::Open => global_end,
        }
    }
}

/// A root, internal or leaf node
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) children: [Option<NodeId>; ALPHABET_SIZE],
    pub(crate) edge_start: usize,
    pub(crate) edge_end: EdgeEnd,
    pub(crate) suffix_link: Option<NodeId>,
    pub(crate) leaf_offset: Option<usize>,
    /// Smallest leaf offset in this node's subtree
    pub(crate) first_offset: usize,
}

impl Node {
    pub(crate) fn root() -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            edge_start: 0,
            edge_end: EdgeEnd::Closed(0),
            suffix_link: None,
            leaf_offset: None,
            first_offset: 0,
        }
    }

    pub(crate) fn leaf(edge_start: usize) -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            edge_start,
            edge_end: EdgeEnd::Open,
            suffix_link: None,
            leaf_offset: None,
            first_offset: 0,
        }
    }

    pub(crate) fn internal(edge_start: usize, edge_end: usize, suffix_link: NodeId) -> Self {
        Self {
            children: [None; ALPHABET_SIZE],
            edge_start,
            edge_end: EdgeEnd::Closed(edge_end),
            suffix_link: Some(suffix_link),
            leaf_offset: None,
            first_offset: 0,
        }
    }

    /// Child slots indexed by the first symbol of each outgoing edge
    #[inline]
    pub fn children(&self) -> &[Option<NodeId>; ALPHABET_SIZE] {
        &self.children
    }

    /// Present children in symbol order
    pub fn child_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.children.iter().flatten().copied()
    }

    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.edge_end == EdgeEnd::Open
    }

    #[inline]
    pub fn edge_start(&self) -> usize {
        self.edge_start
    }

    #[inline]
    pub fn edge_end(&self) -> EdgeEnd {
        self.edge_end
    }

    /// Construction-time suffix link (internal nodes only)
    #[inline]
    pub fn suffix_link(&self) -> Option<NodeId> {
        self.suffix_link
    }

    /// Start offset of the suffix this leaf spells (leaves only)
    #[inline]
    pub fn leaf_offset(&self) -> Option<usize> {
        self.leaf_offset
    }

    /// Leftmost suffix start reachable through this node
    #[inline]
    pub fn first_offset(&self) -> usize {
        self.first_offset
    }
}

/// Outcome of a pattern search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Match {
    /// Offset of the first occurrence in the sequence
    Found(usize),
    NotFound,
}

impl Match {
    #[inline]
    pub fn offset(self) -> Option<usize> {
        match self {
            Match::Found(offset) => Some(offset),
            Match::NotFound => None,
        }
    }

    #[inline]
    pub fn is_found(self) -> bool {
        matches!(self, Match::Found(_))
    }
}

impl From<Option<usize>> for Match {
    fn from(offset: Option<usize>) -> Self {
        offset.map_or(Match::NotFound, Match::Found)
    }
}

/// Shape of a built tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeStats {
    /// Sequence length, terminator included
    pub sequence_len: usize,
    /// All nodes, root included
    pub node_count: usize,
    /// Internal nodes, root excluded
    pub internal_count: usize,
    pub leaf_count: usize,
    /// Longest root-to-node path in edges
    pub max_depth: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_conversions() {
        assert_eq!(Match::from(Some(3)), Match::Found(3));
        assert_eq!(Match::from(None), Match::NotFound);
        assert_eq!(Match::Found(3).offset(), Some(3));
        assert!(!Match::NotFound.is_found());
    }

    #[test]
    fn test_node_kinds() {
        let leaf = Node::leaf(4);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.child_count(), 0);

        let internal = Node::internal(1, 2, ROOT);
        assert!(!internal.is_leaf());
        assert_eq!(internal.edge_end(), EdgeEnd::Closed(2));
        assert_eq!(internal.suffix_link(), Some(ROOT));
    }
}
