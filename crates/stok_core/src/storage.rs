//! Output storage protocol.
//!
//! Callers either lend a pre-sized slice ([`Storage::Provided`]) or let the
//! entry point allocate exactly as many slots as the scan will fill
//! ([`Storage::Allocate`]). The returned [`Tokens`] says which one happened:
//! a borrowed prefix of the caller's slice, or an owned `Vec` released on drop.

use std::ops::Deref;

use crate::classify::DelimiterSet;
use crate::count::count_tokens;
use crate::error::TokenizeError;

/// Where an entry point writes its token records.
#[derive(Debug)]
pub enum Storage<'s, T> {
    /// Caller-supplied slots.
    ///
    /// The capacity is not checked up front: the caller guarantees room for
    /// every token the scan produces (bounded by `max_count`). Running out
    /// of slots panics instead of truncating.
    Provided(&'s mut [T]),
    /// Count first, then allocate exactly that many slots.
    Allocate,
}

/// Token records produced by an entry point.
#[derive(Debug, PartialEq, Eq)]
pub enum Tokens<'s, T> {
    /// The filled prefix of caller-supplied storage.
    Borrowed(&'s [T]),
    /// Self-allocated storage, now owned by the caller.
    Owned(Vec<T>),
}

impl<'s, T> Tokens<'s, T> {
    /// Zero tokens, without allocating or touching caller storage.
    pub(crate) fn empty(storage: Storage<'s, T>) -> Self {
        match storage {
            Storage::Provided(out) => Tokens::Borrowed(&out[..0]),
            Storage::Allocate => Tokens::Owned(Vec::new()),
        }
    }

    /// Number of tokens emitted.
    pub fn count(&self) -> usize {
        self.len()
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Tokens::Owned(_))
    }
}

impl<T: Clone> Tokens<'_, T> {
    /// Take the records as an owned `Vec`, copying only if borrowed.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Tokens::Borrowed(slice) => slice.to_vec(),
            Tokens::Owned(vec) => vec,
        }
    }
}

impl<T> Deref for Tokens<'_, T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        match self {
            Tokens::Borrowed(slice) => slice,
            Tokens::Owned(vec) => vec,
        }
    }
}

/// Write cursor over the storage chosen by the caller.
pub(crate) enum Sink<'s, T> {
    Slots { out: &'s mut [T], filled: usize },
    Owned(Vec<T>),
}

impl<'s, T> Sink<'s, T> {
    /// Prepare storage for a scan of `input`.
    ///
    /// For [`Storage::Allocate`] this runs the counting pre-pass and reserves
    /// exactly that many slots. It never writes to `input`, so an allocation
    /// failure leaves the input untouched.
    pub(crate) fn prepare(
        storage: Storage<'s, T>,
        input: &[u8],
        delims: &DelimiterSet<'_>,
        max_count: usize,
    ) -> Result<Self, TokenizeError> {
        match storage {
            Storage::Provided(out) => Ok(Sink::Slots { out, filled: 0 }),
            Storage::Allocate => {
                let needed = count_tokens(input, delims, max_count);
                let vec = reserve_exact(needed)?;
                tracing::debug!(needed, "allocated token storage");
                Ok(Sink::Owned(vec))
            }
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, record: T) {
        match self {
            Sink::Slots { out, filled } => {
                out[*filled] = record;
                *filled += 1;
            }
            Sink::Owned(vec) => vec.push(record),
        }
    }

    pub(crate) fn finish(self) -> Tokens<'s, T> {
        match self {
            Sink::Slots { out, filled } => Tokens::Borrowed(&out[..filled]),
            Sink::Owned(vec) => Tokens::Owned(vec),
        }
    }
}

/// Empty `Vec` with room for exactly `needed` records.
pub(crate) fn reserve_exact<T>(needed: usize) -> Result<Vec<T>, TokenizeError> {
    let mut vec = Vec::new();
    if let Err(err) = vec.try_reserve_exact(needed) {
        tracing::debug!(needed, %err, "token storage allocation failed");
        return Err(TokenizeError::Allocation(err));
    }
    Ok(vec)
}
