//! Similarity analysis
//!
//! Scores two sequences by their longest common subsequence (LCS):
//! `|LCS(a, b)| / max(|a|, |b|)`. Independent of the suffix tree.

use crate::sequence::{Sequence, alphabet};
use serde::{Deserialize, Serialize};

/// LCS of two sequences and the normalized score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Similarity {
    /// One longest common subsequence
    pub lcs: String,
    /// In `[0, 1]`; 0 when either input is empty
    pub score: f64,
}

/// Suffix LCS lengths: `table[i][j] = |LCS(a[i..], b[j..])|`
fn lcs_table<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<u32>> {
    let mut table = vec![vec![0u32; b.len() + 1]; a.len() + 1];

    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            table[i][j] = if a[i] == b[j] {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    table
}

/// Recover one longest common subsequence.
///
/// Walks forward from `(0, 0)`; on a mismatch it advances the side with the
/// larger remaining LCS, preferring `a` on ties.
pub fn longest_common_subsequence<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    let table = lcs_table(a, b);
    let mut lcs = Vec::with_capacity(table[0][0] as usize);
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            lcs.push(a[i].clone());
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    lcs
}

#[inline]
fn score(lcs_len: usize, a_len: usize, b_len: usize) -> f64 {
    if a_len == 0 || b_len == 0 {
        return 0.0;
    }
    lcs_len as f64 / a_len.max(b_len) as f64
}

/// Similarity of two validated sequences, terminators ignored
pub fn similarity(a: &Sequence, b: &Sequence) -> Similarity {
    let lcs = longest_common_subsequence(a.bases(), b.bases());
    Similarity {
        score: score(lcs.len(), a.base_count(), b.base_count()),
        lcs: lcs.into_iter().map(|s| alphabet::decode(s) as char).collect(),
    }
}

/// Similarity of two raw byte strings, compared as-is
pub fn similarity_bytes(a: &[u8], b: &[u8]) -> Similarity {
    let lcs = longest_common_subsequence(a, b);
    Similarity {
        score: score(lcs.len(), a.len(), b.len()),
        lcs: String::from_utf8_lossy(&lcs).into_owned(),
    }
}
