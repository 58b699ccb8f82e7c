//! Output formatting for search, similarity and tree statistics results

use crate::error::DnaError;
use crate::similarity::Similarity;
use crate::tree::{Match, TreeStats};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Search outcome for one pattern
#[derive(Debug, Clone, Serialize)]
pub struct PatternResult {
    pub pattern: String,
    /// First occurrence, `null` in JSON when absent
    pub offset: Option<usize>,
    /// Every occurrence, only when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurrences: Option<Vec<usize>>,
}

impl PatternResult {
    pub fn new(pattern: impl Into<String>, first: Match) -> Self {
        Self {
            pattern: pattern.into(),
            offset: first.offset(),
            occurrences: None,
        }
    }

    pub fn with_occurrences(mut self, occurrences: Vec<usize>) -> Self {
        self.occurrences = Some(occurrences);
        self
    }
}

/// Print search results, one pattern per line
pub fn print_matches(results: &[PatternResult], choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_matches(&mut stdout, results)
}

fn write_matches<W: WriteColor>(out: &mut W, results: &[PatternResult]) -> io::Result<()> {
    for result in results {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        write!(out, "{}", result.pattern)?;
        out.reset()?;
        write!(out, ": ")?;

        match (result.offset, &result.occurrences) {
            (None, _) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Red)))?;
                write!(out, "not found")?;
                out.reset()?;
            }
            (Some(_), Some(all)) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                let joined: Vec<String> = all.iter().map(|o| o.to_string()).collect();
                write!(out, "{}", joined.join(", "))?;
                out.reset()?;
                write!(out, " ({} occurrences)", all.len())?;
            }
            (Some(offset), None) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(out, "{}", offset)?;
                out.reset()?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Print the recovered subsequence and score
pub fn print_similarity(result: &Similarity, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_similarity(&mut stdout, result)
}

fn write_similarity<W: WriteColor>(out: &mut W, result: &Similarity) -> io::Result<()> {
    write!(out, "LCS:        ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    writeln!(out, "{}", result.lcs)?;
    out.reset()?;
    writeln!(out, "LCS length: {}", result.lcs.len())?;
    write!(out, "Similarity: ")?;
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{:.4}", result.score)?;
    out.reset()?;
    Ok(())
}

/// Print tree statistics
pub fn print_stats(stats: &TreeStats, choice: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(choice);
    write_stats(&mut stdout, stats)
}

fn write_stats<W: WriteColor>(out: &mut W, stats: &TreeStats) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "Suffix Tree Statistics")?;
    writeln!(out, "======================")?;
    out.reset()?;
    writeln!(out)?;
    writeln!(out, "Sequence length:  {} (with terminator)", stats.sequence_len)?;
    writeln!(out, "Nodes:            {}", stats.node_count)?;
    writeln!(out, "Internal nodes:   {}", stats.internal_count)?;
    writeln!(out, "Leaves:           {}", stats.leaf_count)?;
    writeln!(out, "Max depth:        {}", stats.max_depth)?;
    Ok(())
}

/// Print any result as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, value)?;
    writeln!(lock)
}

/// Write the LCS string to `path`, replacing any existing file
pub fn write_lcs(path: &Path, result: &Similarity) -> Result<(), DnaError> {
    fs::write(path, result.lcs.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut NoColor<Vec<u8>>) -> io::Result<()>,
    {
        let mut out = NoColor::new(Vec::new());
        f(&mut out).unwrap();
        String::from_utf8(out.into_inner()).unwrap()
    }

    #[test]
    fn test_match_lines() {
        let results = vec![
            PatternResult::new("CG", Match::Found(1)),
            PatternResult::new("GA", Match::NotFound),
            PatternResult::new("A", Match::Found(0)).with_occurrences(vec![0, 4]),
        ];
        let text = render(|out| write_matches(out, &results));
        assert_eq!(text, "CG: 1\nGA: not found\nA: 0, 4 (2 occurrences)\n");
    }

    #[test]
    fn test_similarity_lines() {
        let result = Similarity {
            lcs: "GA".to_string(),
            score: 0.4,
        };
        let text = render(|out| write_similarity(out, &result));
        assert_eq!(text, "LCS:        GA\nLCS length: 2\nSimilarity: 0.4000\n");
    }

    #[test]
    fn test_stats_lines() {
        let stats = TreeStats {
            sequence_len: 5,
            node_count: 6,
            internal_count: 0,
            leaf_count: 5,
            max_depth: 1,
        };
        let text = render(|out| write_stats(out, &stats));
        assert!(text.contains("Leaves:           5\n"));
        assert!(text.contains("Sequence length:  5 (with terminator)\n"));
    }

    #[test]
    fn test_pattern_result_json() {
        let found = serde_json::to_value(PatternResult::new("CG", Match::Found(1))).unwrap();
        assert_eq!(found, serde_json::json!({"pattern": "CG", "offset": 1}));

        let missing = serde_json::to_value(PatternResult::new("GA", Match::NotFound)).unwrap();
        assert_eq!(missing, serde_json::json!({"pattern": "GA", "offset": null}));
    }

    #[test]
    fn test_write_lcs_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lcs.txt");
        fs::write(&path, "old contents that are longer").unwrap();

        let result = Similarity {
            lcs: "GATC".to_string(),
            score: 0.5,
        };
        write_lcs(&path, &result).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "GATC");
    }
}
