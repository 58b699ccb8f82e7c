//! Error types shared by the library.

/// Errors returned while loading, validating or writing sequences.
///
/// A missing pattern is not an error (see [`crate::tree::Match::NotFound`]),
/// and neither is an empty similarity input.
#[derive(thiserror::Error, Debug)]
pub enum DnaError {
    #[error("invalid symbol {symbol:?} at position {position}: expected one of A, C, G, T")]
    InvalidAlphabetSymbol { symbol: char, position: usize },
    #[error("input contains the reserved terminator '$' at position {position}")]
    EmbeddedTerminator { position: usize },
    #[error("sequence of {len} bases exceeds the configured limit of {limit}")]
    SequenceTooLarge { len: u64, limit: u64 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
