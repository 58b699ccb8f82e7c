//! Alphabet codec
//!
//! Maps the four DNA bases plus the terminator onto dense indices so that a
//! node's children fit in a fixed-size array.

use crate::error::DnaError;

/// Dense symbol index in `[0, ALPHABET_SIZE)`
pub type Symbol = u8;

/// Number of symbols, terminator included
pub const ALPHABET_SIZE: usize = 5;

/// Symbols in index order
pub const ALPHABET: [u8; ALPHABET_SIZE] = *b"ACGT$";

/// Terminator byte appended once to every sequence
pub const TERMINATOR: u8 = b'$';

/// Index of the terminator
pub const TERMINATOR_SYMBOL: Symbol = 4;

/// Encode a byte, returning `None` if it is outside the alphabet.
#[inline]
pub fn try_encode(byte: u8) -> Option<Symbol> {
    match byte {
        b'A' => Some(0),
        b'C' => Some(1),
        b'G' => Some(2),
        b'T' => Some(3),
        TERMINATOR => Some(TERMINATOR_SYMBOL),
        _ => None,
    }
}

/// Encode the byte found at `position` of some input.
///
/// The position is only used to build the error.
#[inline]
pub fn encode(byte: u8, position: usize) -> Result<Symbol, DnaError> {
    try_encode(byte).ok_or(DnaError::InvalidAlphabetSymbol {
        symbol: byte as char,
        position,
    })
}

/// Decode a symbol back to its byte.
///
/// Panics on indices outside the alphabet, which no encoder produces.
#[inline]
pub fn decode(symbol: Symbol) -> u8 {
    ALPHABET[symbol as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_symbols() {
        for (i, &b) in ALPHABET.iter().enumerate() {
            assert_eq!(encode(b, 0).unwrap(), i as Symbol);
            assert_eq!(decode(i as Symbol), b);
        }
        assert_eq!(try_encode(TERMINATOR), Some(TERMINATOR_SYMBOL));
    }

    #[test]
    fn test_rejects_other_bytes() {
        for b in [b'a', b'N', b'U', b' ', b'\n', 0u8, 0xFF] {
            assert!(try_encode(b).is_none());
        }

        match encode(b'N', 7) {
            Err(DnaError::InvalidAlphabetSymbol { symbol, position }) => {
                assert_eq!(symbol, 'N');
                assert_eq!(position, 7);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
