//! Minimal in-place byte tokenizer.
//!
//! Splits a byte buffer into tokens separated by a fixed set of delimiter
//! bytes, without copying token data. Consecutive delimiters collapse: empty
//! tokens are never produced.
//!
//! # Layers
//!
//! - [`classify`]: prefix scans over a [`DelimiterSet`] (accepted / rejected).
//! - [`count`]: non-mutating token counting, used to size owned storage.
//! - [`scanner`]: the left-to-right scan loop shared by every entry point.
//! - [`tokenize`]: the three entry points and their storage protocol.
//!
//! # Representations
//!
//! [`Token`] records carry an explicit `(start, len)` pair and never depend
//! on the buffer contents after creation. [`Handle`] values only carry a
//! start offset; their length is recovered from the terminator that the
//! in-place entry points write after each token.
//!
//! ```text
//! let delims = DelimiterSet::new(b";")?;
//! let tokens = split(Storage::Allocate, usize::MAX, &delims, b"aa;bb")?;
//! assert_eq!(tokens.count(), 2);
//! ```
//!
//! # Tracing
//!
//! Entry points emit `trace` spans and `debug` events through `tracing`
//! (never per byte). Install a subscriber in the host binary to see them,
//! e.g. `RUST_LOG=stok_core=debug`.

pub mod buffer;
pub mod classify;
pub mod count;
mod error;
pub mod scanner;
mod storage;
mod token;
pub mod tokenize;

pub use buffer::{logical_prefix, TokenBuffer, TERMINATOR};
pub use classify::{accepted_prefix_len, rejected_prefix_len, DelimiterSet};
pub use count::count_tokens;
pub use error::TokenizeError;
pub use scanner::{Scanner, TokenIter};
pub use storage::{Storage, Tokens};
pub use token::{Handle, Token, TokenRecord};
pub use tokenize::{split, tokenize, tokenize_handles};
