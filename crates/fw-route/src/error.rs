//! Error types for route resolution.

use thiserror::Error;

/// Errors returned to resolver callers.
///
/// Validation failures are deterministic: the same bad input always fails
/// the same way, so callers surface the message inline and never retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("Invalid input.")]
    InvalidInput,
}

pub type RouteResult<T> = Result<T, RouteError>;
