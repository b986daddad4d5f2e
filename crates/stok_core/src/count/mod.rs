//! Non-mutating token counting.
//!
//! Simulates the tokenizer's scan with the two classification primitives,
//! without writing terminators. The tokenizer uses it to size self-allocated
//! storage exactly before the first destructive write.

use crate::buffer::logical_prefix;
use crate::classify::{accepted_prefix_len, rejected_prefix_len, DelimiterSet};

/// Number of tokens a scan of `s` would produce, capped at `max_count`.
///
/// Agrees with the emitted count of every tokenizer entry point given the
/// same input, delimiter set and cap.
pub fn count_tokens(s: &[u8], delims: &DelimiterSet<'_>, max_count: usize) -> usize {
    let s = logical_prefix(s);
    let mut count = 0;
    let mut pos = 0;

    while count < max_count && pos < s.len() {
        pos += accepted_prefix_len(&s[pos..], delims);
        if pos == s.len() {
            break;
        }
        let len = rejected_prefix_len(&s[pos..], delims);
        count += 1;
        // Token run plus the one separator the tokenizer would overwrite.
        pos += len + 1;
    }

    count
}
