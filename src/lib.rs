//! # dnatrie - Compact Suffix Trie for DNA
//!
//! dnatrie builds a compact suffix tree over a DNA sequence in linear time
//! (Ukkonen's algorithm) and answers exact substring queries in time
//! proportional to the pattern length. It also scores the similarity of two
//! sequences through their longest common subsequence.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`sequence`] - Alphabet codec, validated sequence buffer, file loader
//! - [`tree`] - Suffix tree construction, leaf indexing and pattern search
//! - [`similarity`] - LCS-based similarity scoring
//! - [`output`] - Result formatting and the LCS file writer
//! - [`utils`] - Configuration
//!
//! ## Quick Start
//!
//! ```
//! use dnatrie::similarity::similarity;
//! use dnatrie::tree::{Match, SuffixTree};
//! use dnatrie::sequence::Sequence;
//!
//! let tree = SuffixTree::from_bases(b"ACGT").unwrap();
//! assert_eq!(tree.find_first_occurrence("CG"), Match::Found(1));
//! assert_eq!(tree.find_first_occurrence("GA"), Match::NotFound);
//!
//! let a = Sequence::from_bases(b"AGCAT").unwrap();
//! let b = Sequence::from_bases(b"GAC").unwrap();
//! assert_eq!(similarity(&a, &b).score, 0.4);
//! ```
//!
//! ## Memory
//!
//! Edges store index ranges into the sequence rather than copies of their
//! labels, so a tree over `n` bases holds at most `2n + 1` nodes and
//! `O(n)` memory in total.

pub mod error;
pub mod output;
pub mod sequence;
pub mod similarity;
pub mod tree;
pub mod utils;

pub use error::DnaError;
