//! Sentinel-terminated input buffer for in-place tokenization.
//!
//! The buffer guarantees a `0x00` terminator after the content, so a token
//! that runs to the end of the input is already terminated and a [`Handle`]
//! can always be resolved by scanning forward to the next `0x00`. The total
//! allocation is rounded up to the next 64-byte boundary.
//!
//! # Logical Length
//!
//! Content is scanned with C-string semantics: the logical length stops at
//! the first `0x00` byte. Bytes after an interior null are kept but never
//! scanned; the offset of that null is recorded at construction so callers
//! can tell a truncated input from a short one.

use crate::token::{Handle, Token};

/// Byte written after each token by the in-place entry points.
///
/// Also marks the logical end of any scanned input.
pub const TERMINATOR: u8 = 0x00;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Owned, sentinel-terminated byte buffer.
///
/// # Layout
///
/// ```text
/// [content..., 0x00, padding_zeros...]
///  ^           ^     ^
///  0           |     rounded up to 64-byte boundary
///             len (sentinel)
/// ```
///
/// The in-place entry points take `&mut TokenBuffer` for the duration of
/// the call and overwrite one delimiter byte after each token with
/// [`TERMINATOR`]. Those writes are not undone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenBuffer {
    /// `[content..., 0x00 sentinel, 0x00 padding...]`.
    buf: Vec<u8>,
    /// Logical length: content up to (excluding) the first `0x00`.
    len: usize,
    /// Offset of the first `0x00` inside the supplied content, if any.
    interior_nul: Option<usize>,
}

/// Size assertion: `TokenBuffer` should be <= 48 bytes on 64-bit platforms.
/// Vec<u8> = 24, usize = 8, Option<usize> = 16.
const _: () = assert!(std::mem::size_of::<TokenBuffer>() <= 48);

impl TokenBuffer {
    /// Copy `content` into a new sentinel-terminated buffer.
    pub fn new(content: &[u8]) -> Self {
        let mut buf = vec![TERMINATOR; padded_len(content.len())];
        buf[..content.len()].copy_from_slice(content);
        Self::from_padded(buf, content.len())
    }

    /// Take ownership of `content`, appending the sentinel and padding in place.
    pub fn from_vec(mut content: Vec<u8>) -> Self {
        let content_len = content.len();
        content.resize(padded_len(content_len), TERMINATOR);
        Self::from_padded(content, content_len)
    }

    fn from_padded(buf: Vec<u8>, content_len: usize) -> Self {
        debug_assert!(content_len < buf.len(), "sentinel must be within buffer bounds");
        let interior_nul = memchr::memchr(TERMINATOR, &buf[..content_len]);
        TokenBuffer {
            buf,
            len: interior_nul.unwrap_or(content_len),
            interior_nul,
        }
    }

    /// The scanned content (without sentinel or padding).
    ///
    /// After an in-place tokenization this includes the written terminators.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// The full buffer including sentinel and cache-line padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Mutable view of the scanned content, for the in-place entry points.
    pub(crate) fn content_mut(&mut self) -> &mut [u8] {
        &mut self.buf[..self.len]
    }

    /// Logical length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Offset of the `0x00` that cut the supplied content short, if any.
    pub fn interior_nul(&self) -> Option<usize> {
        self.interior_nul
    }

    /// Bytes of a token produced from this buffer.
    pub fn token(&self, token: Token) -> &[u8] {
        token.slice(&self.buf)
    }

    /// Bytes of a substring handle: from its start up to the next terminator.
    ///
    /// A handle past the end of the buffer resolves to an empty slice.
    pub fn terminated(&self, handle: Handle) -> &[u8] {
        let tail = self.buf.get(handle.start..).unwrap_or_default();
        let len = memchr::memchr(TERMINATOR, tail).unwrap_or(tail.len());
        &tail[..len]
    }
}

impl From<&[u8]> for TokenBuffer {
    fn from(content: &[u8]) -> Self {
        TokenBuffer::new(content)
    }
}

impl From<&str> for TokenBuffer {
    fn from(content: &str) -> Self {
        TokenBuffer::new(content.as_bytes())
    }
}

impl From<Vec<u8>> for TokenBuffer {
    fn from(content: Vec<u8>) -> Self {
        TokenBuffer::from_vec(content)
    }
}

impl From<String> for TokenBuffer {
    fn from(content: String) -> Self {
        TokenBuffer::from_vec(content.into_bytes())
    }
}

/// The scanned prefix of a raw byte slice: everything before the first `0x00`.
#[inline]
pub fn logical_prefix(bytes: &[u8]) -> &[u8] {
    match memchr::memchr(TERMINATOR, bytes) {
        Some(end) => &bytes[..end],
        None => bytes,
    }
}

/// Content length plus one sentinel byte, rounded up to the next cache line.
fn padded_len(content_len: usize) -> usize {
    (content_len + 1).next_multiple_of(CACHE_LINE)
}
