//! Domain-specific error types

use thiserror::Error;

/// Domain-level errors for issue lookups
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid input for field {field}: {message}")]
    InvalidInput { field: String, message: String },
}
