//! Token representations.

use std::ops::Range;

/// A maximal run of non-delimiter bytes, recorded as `(start, len)`.
///
/// The length is data: it stays valid whatever happens to the buffer after
/// the token was produced, including terminator writes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Token {
    /// Byte offset of the first token byte.
    pub start: usize,
    /// Number of token bytes.
    pub len: usize,
}

/// Size assertion: a token is two machine words.
const _: () = assert!(std::mem::size_of::<Token>() == 2 * std::mem::size_of::<usize>());

impl Token {
    #[inline]
    pub const fn new(start: usize, len: usize) -> Self {
        Token { start, len }
    }

    /// Offset one past the last token byte.
    ///
    /// After an in-place tokenization this is where the terminator sits.
    #[inline]
    pub const fn end(self) -> usize {
        self.start + self.len
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn range(self) -> Range<usize> {
        self.start..self.end()
    }

    /// Drop the length, keeping only the start offset.
    #[inline]
    pub const fn handle(self) -> Handle {
        Handle { start: self.start }
    }

    /// The token's bytes within `bytes`.
    ///
    /// `bytes` must be the buffer (or a prefix-preserving view of it) the
    /// token was produced from.
    #[inline]
    pub fn slice(self, bytes: &[u8]) -> &[u8] {
        &bytes[self.range()]
    }
}

/// Substring handle: start offset of a terminator-delimited token.
///
/// Resolve with [`TokenBuffer::terminated`](crate::TokenBuffer::terminated).
/// Only meaningful for buffers that went through an in-place entry point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Handle {
    pub start: usize,
}

/// Output representation recorded for each scanned token.
pub trait TokenRecord: Copy {
    fn from_token(token: Token) -> Self;
}

impl TokenRecord for Token {
    #[inline]
    fn from_token(token: Token) -> Self {
        token
    }
}

impl TokenRecord for Handle {
    #[inline]
    fn from_token(token: Token) -> Self {
        token.handle()
    }
}
