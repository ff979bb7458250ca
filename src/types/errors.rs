//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. The
//! `Display` form of an error is exactly the diagnostic message it carries,
//! so callers can surface it verbatim.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure kinds for precondition checks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required reference was absent.
    #[error("{0}")]
    NullReference(String),

    /// A value violated a stated argument constraint.
    #[error("{0}")]
    InvalidArgument(String),
}

// Convenience constructors
impl Error {
    pub fn null_reference(msg: impl Into<String>) -> Self {
        Self::NullReference(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
