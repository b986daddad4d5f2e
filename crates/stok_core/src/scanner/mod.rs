//! Left-to-right token scan shared by all entry points.
//!
//! [`Scanner`] is a cursor that takes the input on every call instead of
//! borrowing it for its whole lifetime. That lets the in-place entry points
//! write a terminator between two calls: each write lands at the end of the
//! token just returned, which is behind the cursor and never rescanned.
//!
//! Each step skips a delimiter run, measures the following token run, and
//! then consumes exactly one separator byte after the token. Any remaining
//! separators of a longer run are skipped by the next step.

use crate::buffer::logical_prefix;
use crate::classify::{accepted_prefix_len, rejected_prefix_len, DelimiterSet};
use crate::token::Token;

/// Resumable scan state over one input.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'d> {
    delims: DelimiterSet<'d>,
    /// Start of the still-unscanned suffix.
    pos: usize,
    /// Logical end of the input (first terminator or slice end).
    end: usize,
    emitted: usize,
    max_count: usize,
}

impl<'d> Scanner<'d> {
    /// Create a scanner positioned at byte 0 of `input`.
    ///
    /// The logical end is fixed here: terminators written later by the
    /// caller do not shorten the scan.
    pub fn new(input: &[u8], delims: DelimiterSet<'d>, max_count: usize) -> Self {
        Scanner {
            delims,
            pos: 0,
            end: logical_prefix(input).len(),
            emitted: 0,
            max_count,
        }
    }

    /// Produce the next token, or `None` once the input is exhausted or
    /// `max_count` tokens have been produced.
    ///
    /// `input` must be the slice the scanner was created with (possibly with
    /// terminators written at previously returned token ends).
    ///
    /// # Panics
    ///
    /// Panics if `input` is shorter than the logical end recorded at creation.
    #[inline]
    pub fn next_token(&mut self, input: &[u8]) -> Option<Token> {
        if self.emitted >= self.max_count || self.pos >= self.end {
            return None;
        }
        let s = &input[..self.end];

        self.pos += accepted_prefix_len(&s[self.pos..], &self.delims);
        if self.pos == self.end {
            return None;
        }

        let start = self.pos;
        let len = rejected_prefix_len(&s[start..], &self.delims);
        self.emitted += 1;
        self.pos = (start + len + 1).min(self.end);
        Some(Token::new(start, len))
    }

    /// Current cursor position (bytes consumed so far).
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Number of tokens produced so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Returns `true` if no further token can be produced.
    pub fn is_done(&self) -> bool {
        self.emitted >= self.max_count || self.pos >= self.end
    }
}

/// Non-destructive token iterator over a borrowed input.
#[derive(Clone, Debug)]
pub struct TokenIter<'a, 'd> {
    input: &'a [u8],
    scanner: Scanner<'d>,
}

impl<'a, 'd> TokenIter<'a, 'd> {
    pub fn new(input: &'a [u8], delims: DelimiterSet<'d>, max_count: usize) -> Self {
        TokenIter {
            input,
            scanner: Scanner::new(input, delims, max_count),
        }
    }

    /// The scanned input.
    pub fn input(&self) -> &'a [u8] {
        self.input
    }
}

impl Iterator for TokenIter<'_, '_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        self.scanner.next_token(self.input)
    }
}

impl std::iter::FusedIterator for TokenIter<'_, '_> {}
