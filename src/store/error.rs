// CareCompanion — Store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("An account with this email already exists.")]
    DuplicateEmail,

    #[error("This username is already taken.")]
    DuplicateUsername,

    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("Storage slot '{slot}' is corrupted: {reason}")]
    StorageCorrupted { slot: String, reason: String },

    #[error("Slot '{slot}' kept changing during write ({attempts} attempts)")]
    WriteConflict { slot: String, attempts: usize },

    #[error("{0}")]
    Other(String),
}
