//! Integration tests for the dnatrie command line.
//!
//! Each test writes its sequence files into a fresh temp directory and passes
//! an explicit config file so the user's configuration never leaks in.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Temp directory holding an empty config and the given sequence files
fn fixture(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("config.json"), "{}").expect("Failed to write config");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("Failed to write fixture");
    }
    dir
}

/// Run dnatrie with given args, returns (stdout, stderr, exit code)
fn run(dir: &Path, args: &[&str]) -> (String, String, Option<i32>) {
    let config: PathBuf = dir.join("config.json");
    let output = Command::new(env!("CARGO_BIN_EXE_dnatrie"))
        .args(args)
        .arg("--config")
        .arg(&config)
        .arg("--color=never")
        .current_dir(dir)
        .output()
        .expect("Failed to run dnatrie");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code(),
    )
}

#[test]
fn test_find_reports_offsets() {
    let dir = fixture(&[("seq.txt", "ACGT\n")]);
    let (stdout, _, code) = run(dir.path(), &["find", "seq.txt", "CG", "ACGT"]);

    assert_eq!(stdout, "CG: 1\nACGT: 0\n");
    assert_eq!(code, Some(0));
}

#[test]
fn test_find_missing_pattern_exits_one() {
    let dir = fixture(&[("seq.txt", "ACGT")]);
    let (stdout, _, code) = run(dir.path(), &["find", "seq.txt", "CG", "GA"]);

    assert_eq!(stdout, "CG: 1\nGA: not found\n");
    assert_eq!(code, Some(1));
}

#[test]
fn test_find_all_occurrences() {
    let dir = fixture(&[("seq.txt", ">chr test\nCAGCA\nGCA\n")]);
    let (stdout, _, code) = run(dir.path(), &["find", "--all", "seq.txt", "CAG"]);

    assert_eq!(stdout, "CAG: 0, 3 (2 occurrences)\n");
    assert_eq!(code, Some(0));
}

#[test]
fn test_find_json() {
    let dir = fixture(&[("seq.txt", "GATTACA")]);
    let (stdout, _, _) = run(dir.path(), &["find", "--json", "seq.txt", "TTA", "GG"]);

    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(
        value,
        serde_json::json!([
            {"pattern": "TTA", "offset": 2},
            {"pattern": "GG", "offset": null}
        ])
    );
}

#[test]
fn test_invalid_sequence_fails() {
    let dir = fixture(&[("bad.txt", "ACGNT")]);
    let (stdout, stderr, code) = run(dir.path(), &["find", "bad.txt", "A"]);

    assert!(stdout.is_empty());
    assert!(stderr.contains("invalid symbol 'N' at position 3"), "stderr: {}", stderr);
    assert_ne!(code, Some(0));
}

#[test]
fn test_similarity_writes_lcs_file() {
    let dir = fixture(&[("a.txt", "AGCAT"), ("b.txt", "GAC")]);
    let (stdout, _, code) = run(
        dir.path(),
        &["similarity", "a.txt", "b.txt", "-o", "lcs.txt"],
    );

    assert_eq!(code, Some(0));
    assert!(stdout.contains("LCS:        GA\n"));
    assert!(stdout.contains("Similarity: 0.4000\n"));
    assert_eq!(fs::read_to_string(dir.path().join("lcs.txt")).unwrap(), "GA");
}

#[test]
fn test_similarity_empty_input() {
    let dir = fixture(&[("empty.txt", ""), ("b.txt", "ACGT")]);
    let (stdout, _, code) = run(dir.path(), &["similarity", "--json", "empty.txt", "b.txt"]);

    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value, serde_json::json!({"lcs": "", "score": 0.0}));
}

#[test]
fn test_stats_json() {
    let dir = fixture(&[("seq.txt", "ACGT")]);
    let (stdout, _, code) = run(dir.path(), &["stats", "--json", "seq.txt"]);

    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(value["leaf_count"], 5);
    assert_eq!(value["sequence_len"], 5);
    assert_eq!(value["internal_count"], 0);
}

#[test]
fn test_fold_case_from_config() {
    let dir = fixture(&[("seq.txt", "acgt")]);
    fs::write(
        dir.path().join("config.json"),
        r#"{"load": {"fold_case": true}}"#,
    )
    .unwrap();

    let (stdout, _, code) = run(dir.path(), &["find", "seq.txt", "GT"]);
    assert_eq!(stdout, "GT: 2\n");
    assert_eq!(code, Some(0));
}
