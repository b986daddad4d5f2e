#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test code — panics provide clear failure messages"
)]

//! Command-level tests for the `stok` library.
//!
//! # Running
//!
//! ```bash
//! cargo test -p stok --test commands
//! ```

use std::io::Write;

use pretty_assertions::assert_eq;
use stok::commands::{count_content, measure, render_tokens};
use stok::config::{BenchConfig, SplitConfig};
use stok_core::TokenizeError;

fn semicolon_config() -> SplitConfig {
    SplitConfig::default()
}

// === bench ===

#[test]
fn bench_phases_agree_on_token_count() {
    let config = BenchConfig {
        size: 64 * 1024,
        ..BenchConfig::default()
    };
    let report = measure(&config).expect("benchmark runs");
    assert_eq!(report.buffer_len, 64 * 1024);
    assert!(report.token_count > 0);
    assert_eq!(report.provided.tokens, report.token_count);
    assert_eq!(report.allocated.tokens, report.token_count);
}

#[test]
fn bench_with_multi_byte_delimiters() {
    let config = BenchConfig {
        size: 4096,
        seed: 7,
        delimiters: b" ;,".to_vec(),
    };
    let report = measure(&config).expect("benchmark runs");
    assert_eq!(report.provided.tokens, report.allocated.tokens);
}

#[test]
fn bench_on_empty_input() {
    let config = BenchConfig {
        size: 0,
        ..BenchConfig::default()
    };
    let report = measure(&config).expect("benchmark runs");
    assert_eq!(report.token_count, 0);
    assert_eq!(report.provided.tokens, 0);
}

#[test]
fn bench_requires_a_delimiter() {
    let config = BenchConfig {
        delimiters: Vec::new(),
        ..BenchConfig::default()
    };
    assert!(matches!(
        measure(&config),
        Err(TokenizeError::InvalidArgument { .. })
    ));
}

// === split / count ===

#[test]
fn render_records() {
    let lines = render_tokens(b";alpha;;beta".to_vec(), &semicolon_config()).unwrap();
    assert_eq!(lines, vec![r#"[0] 1..6 "alpha""#, r#"[1] 8..12 "beta""#]);
}

#[test]
fn render_handles() {
    let config = SplitConfig {
        handles: true,
        ..SplitConfig::default()
    };
    let lines = render_tokens(b";alpha;;beta".to_vec(), &config).unwrap();
    assert_eq!(lines, vec![r#"[0] @1 "alpha""#, r#"[1] @8 "beta""#]);
}

#[test]
fn render_respects_max_count() {
    let config = SplitConfig {
        max_count: 1,
        ..SplitConfig::default()
    };
    let lines = render_tokens(b"a;b;c".to_vec(), &config).unwrap();
    assert_eq!(lines, vec![r#"[0] 0..1 "a""#]);
}

#[test]
fn render_rejects_terminator_delimiter() {
    let config = SplitConfig {
        delimiters: vec![b';', 0],
        ..SplitConfig::default()
    };
    assert!(matches!(
        render_tokens(b"a;b".to_vec(), &config),
        Err(TokenizeError::InvalidArgument { .. })
    ));
}

#[test]
fn count_file_contents() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"one two  three\nfour\n").unwrap();
    let content = std::fs::read(file.path()).unwrap();

    let config = SplitConfig {
        delimiters: b" \n".to_vec(),
        ..SplitConfig::default()
    };
    assert_eq!(count_content(&content, &config).unwrap(), 4);
    assert_eq!(count_content(&content, &semicolon_config()).unwrap(), 1);
}
