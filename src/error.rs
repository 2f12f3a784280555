//! Error types for bound validation and the interactive prompt.

use thiserror::Error;

/// Why a requested bound was rejected.
///
/// Every variant is recoverable: the harness re-prompts and nothing has been
/// allocated yet.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoundError {
    #[error("no bound entered")]
    Empty,

    #[error("`{0}` is not a whole number")]
    NotANumber(String),

    #[error("{0} is too small, primes start at 2")]
    TooSmall(i64),

    #[error("`{0}` exceeds the largest supported bound {max}", max = u32::MAX - 1)]
    OutOfRange(String),

    #[error("{max} is reserved and cannot be used as a bound", max = u32::MAX)]
    Reserved,
}

/// Failure while reading a bound interactively.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before a valid bound was entered")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
