// CareCompanion — Registration and login form rules

use std::sync::LazyLock;

use regex::Regex;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::FormError;
use crate::store::Account;

pub const MIN_USERNAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Raw registration input, as typed. Wiped from memory on drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl RegistrationForm {
    /// Check every field and build the account to register.
    /// The email must match as typed; username and email are trimmed when
    /// building the account. The password is kept verbatim.
    pub fn validate(&self) -> Result<Account, FormError> {
        let username = self.username.trim();

        if username.chars().count() < MIN_USERNAME_LEN {
            return Err(FormError::UsernameTooShort(MIN_USERNAME_LEN));
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        if self.confirm_password.is_empty() || self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if !self.accept_terms {
            return Err(FormError::TermsNotAccepted);
        }

        Ok(Account::new(username, self.email.trim(), self.password.as_str()))
    }
}

/// Raw login input. Wiped from memory on drop.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct LoginForm {
    pub identifier: String,
    pub password: String,
}

impl LoginForm {
    /// Returns the trimmed identifier to pass to the store.
    pub fn validate(&self) -> Result<&str, FormError> {
        let identifier = self.identifier.trim();
        if identifier.is_empty() {
            return Err(FormError::EmptyIdentifier);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(identifier)
    }
}

fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
