//! Sequence buffer
//!
//! The immutable, encoded symbol array a suffix tree is built over. The
//! terminator is appended exactly once, by the buffer itself.

use super::alphabet::{self, Symbol, TERMINATOR, TERMINATOR_SYMBOL};
use crate::error::DnaError;
use std::fmt;

/// Encoded DNA sequence ending in the terminator symbol
#[derive(Clone, PartialEq, Eq)]
pub struct Sequence {
    /// Encoded bases followed by `TERMINATOR_SYMBOL`
    symbols: Vec<Symbol>,
}

impl Sequence {
    /// Validate and encode raw bases, then append the terminator.
    ///
    /// Every byte must be one of `A`, `C`, `G`, `T`. Nothing is returned on
    /// failure, so a partially encoded sequence is never observable.
    pub fn from_bases(bases: &[u8]) -> Result<Self, DnaError> {
        let mut symbols = Vec::with_capacity(bases.len() + 1);
        for (position, &byte) in bases.iter().enumerate() {
            symbols.push(encode_base(byte, position)?);
        }
        symbols.push(TERMINATOR_SYMBOL);
        Ok(Self { symbols })
    }

    /// Wrap symbols produced by an encoder that already appended the terminator.
    pub(crate) fn from_terminated(symbols: Vec<Symbol>) -> Self {
        debug_assert_eq!(symbols.last(), Some(&TERMINATOR_SYMBOL));
        Self { symbols }
    }

    pub(crate) fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// All symbols, terminator included
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Symbols without the trailing terminator
    #[inline]
    pub fn bases(&self) -> &[Symbol] {
        &self.symbols[..self.symbols.len() - 1]
    }

    /// Length including the terminator (`n + 1`)
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Number of bases, terminator excluded
    #[inline]
    pub fn base_count(&self) -> usize {
        self.symbols.len() - 1
    }

    /// True when the sequence holds no bases (only the terminator)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.base_count() == 0
    }

    /// Decode the bases back to text, terminator excluded
    pub fn to_bases_string(&self) -> String {
        self.bases().iter().map(|&s| alphabet::decode(s) as char).collect()
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sequence({}$)", self.to_bases_string())
    }
}

/// Encode one input base, refusing the terminator.
#[inline]
pub(crate) fn encode_base(byte: u8, position: usize) -> Result<Symbol, DnaError> {
    if byte == TERMINATOR {
        return Err(DnaError::EmbeddedTerminator { position });
    }
    alphabet::encode(byte, position)
}
