//! Tokenizer entry points.
//!
//! All three share the same scan ([`Scanner`]) and storage protocol
//! ([`Storage`] / [`Tokens`]); they differ in output representation and in
//! whether the input is mutated:
//!
//! | Entry point          | Records    | Mutates input               |
//! |----------------------|------------|-----------------------------|
//! | [`split`]            | [`Token`]  | no                          |
//! | [`tokenize`]         | [`Token`]  | terminator after each token |
//! | [`tokenize_handles`] | [`Handle`] | terminator after each token |
//!
//! # Edge Policy
//!
//! - Empty input: zero tokens, no allocation, no write.
//! - [`Storage::Allocate`]: the exact count is computed before the first
//!   write; an allocation failure returns [`TokenizeError::Allocation`] with
//!   the input untouched.
//! - [`Storage::Provided`]: no capacity check; see its documentation.

use crate::buffer::{logical_prefix, TokenBuffer, TERMINATOR};
use crate::classify::DelimiterSet;
use crate::error::TokenizeError;
use crate::scanner::{Scanner, TokenIter};
use crate::storage::{Sink, Storage, Tokens};
use crate::token::{Handle, Token, TokenRecord};

/// Split `input` into explicit `(start, len)` records without mutating it.
///
/// Stops after `max_count` tokens or at the logical end of `input` (first
/// `0x00` or slice end).
#[tracing::instrument(level = "trace", skip(storage, delims, input), fields(len = input.len()))]
pub fn split<'s>(
    storage: Storage<'s, Token>,
    max_count: usize,
    delims: &DelimiterSet<'_>,
    input: &[u8],
) -> Result<Tokens<'s, Token>, TokenizeError> {
    let input = logical_prefix(input);
    if input.is_empty() {
        return Ok(Tokens::empty(storage));
    }

    let mut sink = Sink::prepare(storage, input, delims, max_count)?;
    for token in TokenIter::new(input, *delims, max_count) {
        sink.push(token);
    }
    Ok(sink.finish())
}

/// Tokenize `buf` in place, recording explicit `(start, len)` records.
///
/// Overwrites the byte following each token with [`TERMINATOR`], so every
/// token is also a terminated substring of `buf` afterwards. The records
/// themselves do not depend on those writes.
#[tracing::instrument(level = "trace", skip(storage, delims, buf), fields(len = buf.len()))]
pub fn tokenize<'s>(
    storage: Storage<'s, Token>,
    max_count: usize,
    delims: &DelimiterSet<'_>,
    buf: &mut TokenBuffer,
) -> Result<Tokens<'s, Token>, TokenizeError> {
    tokenize_in_place(storage, max_count, delims, buf)
}

/// Tokenize `buf` in place, recording substring handles only.
///
/// Each handle's length is implied by the terminator written after its
/// token; resolve handles with [`TokenBuffer::terminated`].
#[tracing::instrument(level = "trace", skip(storage, delims, buf), fields(len = buf.len()))]
pub fn tokenize_handles<'s>(
    storage: Storage<'s, Handle>,
    max_count: usize,
    delims: &DelimiterSet<'_>,
    buf: &mut TokenBuffer,
) -> Result<Tokens<'s, Handle>, TokenizeError> {
    tokenize_in_place(storage, max_count, delims, buf)
}

fn tokenize_in_place<'s, T: TokenRecord>(
    storage: Storage<'s, T>,
    max_count: usize,
    delims: &DelimiterSet<'_>,
    buf: &mut TokenBuffer,
) -> Result<Tokens<'s, T>, TokenizeError> {
    let content = buf.content_mut();
    if content.is_empty() {
        return Ok(Tokens::empty(storage));
    }

    // Storage is settled before the first write.
    let mut sink = Sink::prepare(storage, content, delims, max_count)?;

    let mut scanner = Scanner::new(content, *delims, max_count);
    while let Some(token) = scanner.next_token(content) {
        // A token ending at the content end is already followed by the sentinel.
        if let Some(byte) = content.get_mut(token.end()) {
            *byte = TERMINATOR;
        }
        sink.push(T::from_token(token));
    }
    Ok(sink.finish())
}
