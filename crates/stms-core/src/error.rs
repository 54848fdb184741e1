//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `StmsError` as one
//! variant via `From`, so `?` works across crate boundaries.

use thiserror::Error;

/// The top-level error type for `stms-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum StmsError {
    /// A numeric or enumerated input outside the operation's contract
    /// (non-positive speed, unknown emergency level, out-of-range latitude).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StmsError {
    /// Shorthand for building an [`StmsError::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        StmsError::InvalidArgument(msg.into())
    }

    /// `true` for [`StmsError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, StmsError::InvalidArgument(_))
    }
}

/// Shorthand result type for all `stms-*` crates.
pub type StmsResult<T> = Result<T, StmsError>;
