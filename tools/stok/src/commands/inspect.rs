//! `stok split` and `stok count`: tokenize a file and show the result.

use stok_core::{
    count_tokens, split, tokenize_handles, DelimiterSet, Storage, TokenBuffer, TokenizeError,
};

use crate::config::SplitConfig;

use super::{fail, read_file};

/// Render one line per token.
///
/// Records are shown as `[i] start..end "text"`. With `config.handles` the
/// content is tokenized in place and each handle is shown as
/// `[i] @start "text"`, its text recovered from the written terminator.
pub fn render_tokens(
    content: Vec<u8>,
    config: &SplitConfig,
) -> Result<Vec<String>, TokenizeError> {
    let delims = DelimiterSet::new(&config.delimiters)?;

    if config.handles {
        let mut buf = TokenBuffer::from_vec(content);
        let handles = tokenize_handles(Storage::Allocate, config.max_count, &delims, &mut buf)?;
        return Ok(handles
            .iter()
            .enumerate()
            .map(|(i, &handle)| {
                let text = String::from_utf8_lossy(buf.terminated(handle));
                format!("[{i}] @{} {text:?}", handle.start)
            })
            .collect());
    }

    let tokens = split(Storage::Allocate, config.max_count, &delims, &content)?;
    Ok(tokens
        .iter()
        .enumerate()
        .map(|(i, tok)| {
            let text = String::from_utf8_lossy(tok.slice(&content));
            format!("[{i}] {}..{} {text:?}", tok.start, tok.end())
        })
        .collect())
}

/// Count the tokens in `content` without mutating it.
pub fn count_content(content: &[u8], config: &SplitConfig) -> Result<usize, TokenizeError> {
    let delims = DelimiterSet::new(&config.delimiters)?;
    Ok(count_tokens(content, &delims, config.max_count))
}

/// Run `stok split <file>`.
pub fn split_file(path: &str, config: &SplitConfig) {
    let content = read_file(path);
    if let Some(pos) = first_nul(&content) {
        eprintln!("warning: '{path}' contains a null byte at offset {pos}; scanning stops there");
    }

    let lines = match render_tokens(content, config) {
        Ok(lines) => lines,
        Err(err) => fail(&err),
    };

    println!("Tokens for '{}' ({} tokens):", path, lines.len());
    for line in &lines {
        println!("  {line}");
    }
}

/// Run `stok count <file>`.
pub fn count_file(path: &str, config: &SplitConfig) {
    let content = read_file(path);
    match count_content(&content, config) {
        Ok(count) => println!("{count}"),
        Err(err) => fail(&err),
    }
}

/// Offset of the null byte that ends the scanned prefix, if any.
fn first_nul(content: &[u8]) -> Option<usize> {
    let logical = stok_core::logical_prefix(content).len();
    (logical < content.len()).then_some(logical)
}
