//! Sequence loader
//!
//! Reads raw sequence text from disk and normalizes it into a [`Sequence`].
//! Whitespace-separated chunks are concatenated, FASTA header lines can be
//! skipped, and lowercase bases can be folded before validation.

use super::buffer::Sequence;
use crate::error::DnaError;
use log::info;
use memmap2::Mmap;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Options controlling how raw text becomes a sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Upper-case `acgt` before validation (default: false)
    pub fold_case: bool,
    /// Drop lines starting with `>` (default: true)
    pub skip_fasta_headers: bool,
    /// Maximum number of bases accepted (default: 256M)
    pub max_sequence_len: u64,
    /// Files at least this large are memory-mapped (bytes, default: 1MB)
    pub mmap_threshold: u64,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            fold_case: false,
            skip_fasta_headers: true,
            max_sequence_len: 256 * 1024 * 1024,
            mmap_threshold: 1024 * 1024,
        }
    }
}

/// Load and validate the sequence stored in `path`.
pub fn load_sequence(path: &Path, config: &LoadConfig) -> Result<Sequence, DnaError> {
    let mut file = File::open(path)?;
    let size = file.metadata()?.len();
    let mapped = size > 0 && size >= config.mmap_threshold;

    let sequence = if mapped {
        // The file is only read while the map is alive and never written through it.
        let mmap = unsafe { Mmap::map(&file)? };
        parse_bases(&mmap, config)?
    } else {
        let mut data = Vec::with_capacity(size as usize);
        file.read_to_end(&mut data)?;
        parse_bases(&data, config)?
    };

    info!(
        "loaded {}: {} bytes, {} bases{}",
        path.display(),
        size,
        sequence.base_count(),
        if mapped { " (mmap)" } else { "" }
    );

    Ok(sequence)
}

/// Normalize raw text into a sequence.
///
/// Error positions count kept bases, not raw bytes.
pub fn parse_bases(raw: &[u8], config: &LoadConfig) -> Result<Sequence, DnaError> {
    let mut bases = Vec::with_capacity(raw.len());

    for line in raw.split(|&b| b == b'\n') {
        if config.skip_fasta_headers && line.first() == Some(&b'>') {
            continue;
        }

        for &byte in line {
            if byte.is_ascii_whitespace() {
                continue;
            }
            bases.push(if config.fold_case {
                byte.to_ascii_uppercase()
            } else {
                byte
            });
        }

        if bases.len() as u64 > config.max_sequence_len {
            return Err(DnaError::SequenceTooLarge {
                len: bases.len() as u64,
                limit: config.max_sequence_len,
            });
        }
    }

    Sequence::from_bases(&bases)
}
