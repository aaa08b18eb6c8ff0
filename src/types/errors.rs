//! Error types used across Pathgate.
use thiserror::Error;

/// High-level error categories for path validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    #[error("unsafe path")]
    UnsafePath,
}

/// Structured error with a kind and the offending raw string.
#[derive(Debug, Clone, Error)]
#[error("{kind}: {path:?}")]
pub struct Error {
    pub kind: ErrorKind,
    pub path: String,
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;
