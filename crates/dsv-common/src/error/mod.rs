//! Application error types
//!
//! Unified error handling above the domain layer. Note that most runtime
//! failures in this system are not surfaced through these types at all:
//! transport and protocol errors from the remote hub are logged and drive a
//! reconnect, never a crash.

use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Hub error: {0}")]
    Hub(String),

    #[error("Broadcast error: {0}")]
    Broadcast(String),

    #[error("Internal error")]
    Internal(#[source] anyhow::Error),
}

impl AppError {
    /// Create an internal error from any error
    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
