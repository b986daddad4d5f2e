//! Error type for tokenizer entry points.

use std::collections::TryReserveError;

/// Failure of a tokenizer entry point.
///
/// Both variants are raised before the input is touched, so a failed call
/// leaves the buffer exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// An argument cannot be used for scanning (e.g. a delimiter set that
    /// holds the terminator byte).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
    /// Self-allocated token storage could not be reserved.
    #[error("failed to allocate token storage: {0}")]
    Allocation(#[from] TryReserveError),
}
