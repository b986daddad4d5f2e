//! Delimiter-set classification primitives.
//!
//! Two prefix scans over a byte string: the longest prefix drawn *from* a
//! [`DelimiterSet`] and the longest prefix drawn from its complement. Both
//! stop at the end of the slice or at the [`TERMINATOR`] byte, which never
//! belongs to either class.
//!
//! Set membership is a linear scan over the set's bytes; sets are expected
//! to hold a handful of separators. For sets of at most two bytes the
//! complement scan is delegated to `memchr`, searching for the separators
//! and the terminator in one pass.

use crate::buffer::TERMINATOR;
use crate::error::TokenizeError;

/// Unordered set of single-byte separators.
///
/// Never contains [`TERMINATOR`]. An empty set is valid and means "never
/// skip, never split".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DelimiterSet<'a> {
    bytes: &'a [u8],
}

impl<'a> DelimiterSet<'a> {
    /// Build a set from its member bytes (duplicates are harmless).
    ///
    /// Fails with [`TokenizeError::InvalidArgument`] if `bytes` contains the
    /// terminator, which the scans can never match.
    pub fn new(bytes: &'a [u8]) -> Result<Self, TokenizeError> {
        if let Some(pos) = memchr::memchr(TERMINATOR, bytes) {
            return Err(TokenizeError::InvalidArgument {
                reason: format!("delimiter set contains the terminator byte at index {pos}"),
            });
        }
        Ok(DelimiterSet { bytes })
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn contains(&self, byte: u8) -> bool {
        self.bytes.contains(&byte)
    }
}

impl<'a> TryFrom<&'a [u8]> for DelimiterSet<'a> {
    type Error = TokenizeError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, Self::Error> {
        DelimiterSet::new(bytes)
    }
}

impl<'a> TryFrom<&'a str> for DelimiterSet<'a> {
    type Error = TokenizeError;

    fn try_from(chars: &'a str) -> Result<Self, Self::Error> {
        DelimiterSet::new(chars.as_bytes())
    }
}

/// Length of the longest prefix of `s` made only of bytes in `set`.
#[inline]
pub fn accepted_prefix_len(s: &[u8], set: &DelimiterSet<'_>) -> usize {
    // The set never holds the terminator, so the scan stops there too.
    s.iter().take_while(|&&b| set.contains(b)).count()
}

/// Length of the longest prefix of `s` made only of bytes not in `set`.
#[inline]
pub fn rejected_prefix_len(s: &[u8], set: &DelimiterSet<'_>) -> usize {
    let found = match set.as_bytes() {
        [] => memchr::memchr(TERMINATOR, s),
        [a] => memchr::memchr2(*a, TERMINATOR, s),
        [a, b] => memchr::memchr3(*a, *b, TERMINATOR, s),
        _ => return scalar_rejected_prefix_len(s, set),
    };
    found.unwrap_or(s.len())
}

/// Linear-scan complement prefix, used for sets of three or more bytes.
fn scalar_rejected_prefix_len(s: &[u8], set: &DelimiterSet<'_>) -> usize {
    s.iter()
        .take_while(|&&b| b != TERMINATOR && !set.contains(b))
        .count()
}

#[cfg(test)]
mod tests;
