// CareCompanion — Top-level error types
//
// Aggregates errors from the store and forms modules into a single error
// enum for the application boundary.

use thiserror::Error;

/// Top-level error type for all CareCompanion operations.
#[derive(Debug, Error)]
pub enum CareCompanionError {
    #[error("{0}")]
    Store(#[from] crate::store::StoreError),

    #[error("{0}")]
    Form(#[from] crate::forms::FormError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CareCompanionError>;
