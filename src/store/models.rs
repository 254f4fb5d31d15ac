// CareCompanion — Account and session data models
//
// The password is stored as given (no hashing happens in this store). The
// field is private and never shows up in Debug or Display output, so it
// cannot leak through logs by accident.

use std::fmt;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// A registered user as persisted in the accounts slot.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    pub email: String,
    password: String,
}

impl Account {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Access the stored password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// True if `identifier` names this account (by email or username) and
    /// `password` is its password. Exact, case-sensitive comparison.
    pub fn matches(&self, identifier: &str, password: &str) -> bool {
        (self.email == identifier || self.username == identifier) && self.password == password
    }
}

/// Custom Debug implementation that never reveals the password.
impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.username, self.email)
    }
}

/// A lightweight view of an account, used for listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub username: String,
    pub email: String,
}

impl From<&Account> for AccountSummary {
    fn from(account: &Account) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
        }
    }
}

/// Who is currently logged in. At most one exists at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub username: String,
    pub email: String,
    /// Stored as unix milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    /// Build a session for `account`, stamped at `at`.
    /// The timestamp is cut to whole milliseconds, the precision it is stored at.
    pub fn for_account(account: &Account, at: DateTime<Utc>) -> Self {
        Self {
            username: account.username.clone(),
            email: account.email.clone(),
            logged_in_at: at.trunc_subsecs(3),
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} <{}> since {}",
            self.username,
            self.email,
            self.logged_in_at.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
