// CareCompanion — Form validation error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Username must be at least {0} characters")]
    UsernameTooShort(usize),

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Password must be at least {0} characters")]
    PasswordTooShort(usize),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("You must accept the terms to register")]
    TermsNotAccepted,

    #[error("Enter your email or username")]
    EmptyIdentifier,
}
