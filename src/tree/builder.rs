//! Suffix tree builder
//!
//! Online construction with Ukkonen's algorithm. One phase runs per symbol;
//! within a phase, suffixes are inserted explicitly until one is found to be
//! already present. Three tricks keep the total work linear:
//!
//! 1. Skip/count: walking down from the active node jumps whole edges when
//!    the active length covers them.
//! 2. A phase stops as soon as the next symbol already follows the active
//!    point; the remaining suffixes are implicitly present.
//! 3. Leaf edges end at a shared global end, so bumping one counter extends
//!    every leaf at once.

use super::indexer::index_leaves;
use super::types::*;
use super::SuffixTree;
use crate::error::DnaError;
use crate::sequence::alphabet::{Symbol, TERMINATOR_SYMBOL};
use crate::sequence::buffer::{encode_base, Sequence};
use log::debug;

/// Where the next extension starts
#[derive(Debug, Clone, Copy)]
struct ActivePoint {
    node: NodeId,
    /// Index into the text of the first symbol of the active edge
    edge: usize,
    length: usize,
}

/// Incremental suffix tree construction
///
/// Bases can be pushed one at a time; [`finish`](Self::finish) appends the
/// terminator and returns the completed, read-only tree.
pub struct SuffixTreeBuilder {
    nodes: Vec<Node>,
    text: Vec<Symbol>,
    /// Inclusive end shared by every open leaf edge
    global_end: usize,
    active: ActivePoint,
    /// Suffixes of the current prefix not yet inserted explicitly
    remaining: usize,
}

impl Default for SuffixTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SuffixTreeBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a builder sized for `bases` symbols
    pub fn with_capacity(bases: usize) -> Self {
        // At most 2n nodes for n symbols, terminator included
        let mut nodes = Vec::with_capacity(2 * (bases + 1));
        nodes.push(Node::root());

        Self {
            nodes,
            text: Vec::with_capacity(bases + 1),
            global_end: 0,
            active: ActivePoint {
                node: ROOT,
                edge: 0,
                length: 0,
            },
            remaining: 0,
        }
    }

    /// Extend the tree by one base.
    ///
    /// On error the builder is left untouched.
    pub fn push(&mut self, base: u8) -> Result<(), DnaError> {
        let symbol = encode_base(base, self.text.len())?;
        self.push_symbol(symbol);
        Ok(())
    }

    /// Extend the tree by a run of bases.
    ///
    /// The whole run is validated before any of it is inserted.
    pub fn extend(&mut self, bases: &[u8]) -> Result<(), DnaError> {
        let offset = self.text.len();
        let symbols = bases
            .iter()
            .enumerate()
            .map(|(i, &b)| encode_base(b, offset + i))
            .collect::<Result<Vec<_>, _>>()?;

        for symbol in symbols {
            self.push_symbol(symbol);
        }
        Ok(())
    }

    /// Number of bases pushed so far
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append the terminator and return the indexed tree
    pub fn finish(mut self) -> SuffixTree {
        self.push_symbol(TERMINATOR_SYMBOL);
        self.into_tree()
    }

    fn push_symbol(&mut self, symbol: Symbol) {
        self.text.push(symbol);
        self.extend_phase(self.text.len() - 1);
    }

    /// Resolved inclusive end of the edge into `id`
    #[inline]
    fn edge_end(&self, id: NodeId) -> usize {
        self.nodes[id].edge_end.resolve(self.global_end)
    }

    #[inline]
    fn edge_len(&self, id: NodeId) -> usize {
        self.edge_end(id) + 1 - self.nodes[id].edge_start
    }

    fn add_node(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Skip/count: move the active point past `next` if it covers the whole edge
    fn walk_down(&mut self, next: NodeId) -> bool {
        let len = self.edge_len(next);
        if self.active.length >= len {
            self.active.edge += len;
            self.active.length -= len;
            self.active.node = next;
            return true;
        }
        false
    }

    /// Phase `i`: add `text[i]` to every suffix of `text[..i]`
    fn extend_phase(&mut self, i: usize) {
        // Rule 1 for every leaf at once
        self.global_end = i;
        self.remaining += 1;

        let symbol = self.text[i];
        let mut last_internal: Option<NodeId> = None;

        while self.remaining > 0 {
            if self.active.length == 0 {
                self.active.edge = i;
            }

            let edge_symbol = self.text[self.active.edge] as usize;
            match self.nodes[self.active.node].children[edge_symbol] {
                None => {
                    // Rule 2 at a node: hang a new leaf
                    let leaf = self.add_node(Node::leaf(i));
                    self.nodes[self.active.node].children[edge_symbol] = Some(leaf);

                    if let Some(last) = last_internal.take() {
                        self.nodes[last].suffix_link = Some(self.active.node);
                    }
                }
                Some(next) => {
                    if self.walk_down(next) {
                        continue;
                    }

                    let next_start = self.nodes[next].edge_start;
                    if self.text[next_start + self.active.length] == symbol {
                        // Rule 3: already present, the phase ends here
                        if let Some(last) = last_internal.take() {
                            if self.active.node != ROOT {
                                self.nodes[last].suffix_link = Some(self.active.node);
                            }
                        }
                        self.active.length += 1;
                        break;
                    }

                    // Rule 2 mid-edge: split, then hang a new leaf off the split
                    let split_end = next_start + self.active.length - 1;
                    let split = self.add_node(Node::internal(next_start, split_end, ROOT));
                    self.nodes[self.active.node].children[edge_symbol] = Some(split);

                    let leaf = self.add_node(Node::leaf(i));
                    self.nodes[split].children[symbol as usize] = Some(leaf);

                    self.nodes[next].edge_start += self.active.length;
                    let moved = self.text[self.nodes[next].edge_start] as usize;
                    self.nodes[split].children[moved] = Some(next);

                    if let Some(last) = last_internal {
                        self.nodes[last].suffix_link = Some(split);
                    }
                    last_internal = Some(split);
                }
            }

            self.remaining -= 1;

            if self.active.node == ROOT && self.active.length > 0 {
                self.active.length -= 1;
                self.active.edge = i + 1 - self.remaining;
            } else if self.active.node != ROOT {
                self.active.node = self.nodes[self.active.node].suffix_link.unwrap_or(ROOT);
            }
        }
    }

    fn into_tree(self) -> SuffixTree {
        debug_assert_eq!(self.remaining, 0, "terminator must close every suffix");

        let mut nodes = self.nodes;
        index_leaves(&mut nodes, self.text.len(), self.global_end);

        let tree = SuffixTree {
            sequence: Sequence::from_terminated(self.text),
            nodes,
            global_end: self.global_end,
        };

        debug!(
            "built suffix tree: {} symbols, {} nodes, {} leaves",
            tree.sequence.len(),
            tree.nodes.len(),
            tree.leaf_count()
        );

        tree
    }
}

/// Build a tree over a validated sequence
pub(crate) fn build(sequence: Sequence) -> SuffixTree {
    let mut builder = SuffixTreeBuilder::with_capacity(sequence.base_count());
    builder.text = sequence.into_symbols();
    for i in 0..builder.text.len() {
        builder.extend_phase(i);
    }
    builder.into_tree()
}
