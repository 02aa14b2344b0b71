//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A payload is missing one of the five fields that compose the
    /// identity key. Such a record cannot be stored and is skipped.
    #[error("Missing identity field: {0}")]
    MissingIdentityField(&'static str),
}
