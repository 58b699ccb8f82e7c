//! Sequence input
//!
//! - `alphabet`: symbol codec for `A`, `C`, `G`, `T` and the `$` terminator
//! - `buffer`: the validated, terminator-ended [`Sequence`]
//! - `loader`: reads and normalizes sequence files

pub mod alphabet;
pub mod buffer;
pub mod loader;

pub use alphabet::{ALPHABET, ALPHABET_SIZE, Symbol, TERMINATOR};
pub use buffer::Sequence;
pub use loader::{LoadConfig, load_sequence, parse_bases};
