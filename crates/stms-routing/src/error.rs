//! Routing-subsystem error type.

use thiserror::Error;

use stms_core::StmsError;

/// Errors produced by `stms-routing`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error(transparent)]
    Core(#[from] StmsError),

    /// The provider payload was well-formed but reported a failure.
    #[error("routing provider error: {0}")]
    Provider(String),

    #[error("route input parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RoutingError {
    /// `true` when the underlying cause is [`StmsError::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, RoutingError::Core(e) if e.is_invalid_argument())
    }
}

pub type RoutingResult<T> = Result<T, RoutingError>;
