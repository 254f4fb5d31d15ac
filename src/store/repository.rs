// CareCompanion — Account & Session Store
//
// Owns the two persisted slots: the account collection and the current
// session. Accounts are append-only; the collection is always rewritten
// whole. Register guards its read-modify-write with a conditional write so
// two writers sharing one backend cannot lose each other's accounts.

use chrono::Utc;

use super::codec::{self, CorruptionPolicy};
use super::kv::KeyValueStore;
use super::models::{Account, Session};
use super::StoreError;

/// Slot holding the serialized account list.
pub const ACCOUNTS_KEY: &str = "carecompanion_users";

/// Slot holding the serialized current session.
pub const SESSION_KEY: &str = "carecompanion_session";

/// How many times Register re-reads and retries after losing a write race.
const MAX_WRITE_ATTEMPTS: usize = 5;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// The operations the login and registration screens call.
pub trait AccountStore {
    /// All accounts in insertion order.
    fn list_accounts(&self) -> Result<Vec<Account>, StoreError>;

    /// Add an account. Email uniqueness is checked before username uniqueness.
    /// Field formats are the caller's responsibility.
    fn register(&self, candidate: Account) -> Result<(), StoreError>;

    /// Authenticate by email or username and replace the current session.
    fn login(&self, identifier: &str, password: &str) -> Result<Session, StoreError>;

    /// The current session, if anyone is logged in.
    fn current_session(&self) -> Result<Option<Session>, StoreError>;

    /// Clear the current session. A no-op when nobody is logged in.
    fn logout(&self) -> Result<(), StoreError>;
}

// ─── Key-Value Implementation ────────────────────────────────────────────────

pub struct KvAccountStore<'a, K: KeyValueStore + ?Sized> {
    kv: &'a K,
    policy: CorruptionPolicy,
}

impl<'a, K: KeyValueStore + ?Sized> KvAccountStore<'a, K> {
    /// Store with the lenient corruption fallback.
    pub fn new(kv: &'a K) -> Self {
        Self::with_policy(kv, CorruptionPolicy::default())
    }

    pub fn with_policy(kv: &'a K, policy: CorruptionPolicy) -> Self {
        Self { kv, policy }
    }

    /// Uniqueness check against the current collection.
    fn check_unique(accounts: &[Account], candidate: &Account) -> Result<(), StoreError> {
        if accounts.iter().any(|a| a.email == candidate.email) {
            return Err(StoreError::DuplicateEmail);
        }
        if accounts.iter().any(|a| a.username == candidate.username) {
            return Err(StoreError::DuplicateUsername);
        }
        Ok(())
    }
}

impl<'a, K: KeyValueStore + ?Sized> AccountStore for KvAccountStore<'a, K> {
    fn list_accounts(&self) -> Result<Vec<Account>, StoreError> {
        let read = codec::read_slot::<_, Vec<Account>>(self.kv, ACCOUNTS_KEY, self.policy)?;
        Ok(read.value.unwrap_or_default())
    }

    fn register(&self, candidate: Account) -> Result<(), StoreError> {
        for attempt in 1..=MAX_WRITE_ATTEMPTS {
            let read = codec::read_slot::<_, Vec<Account>>(self.kv, ACCOUNTS_KEY, self.policy)?;
            let mut accounts = read.value.unwrap_or_default();

            Self::check_unique(&accounts, &candidate)?;

            accounts.push(candidate.clone());
            let encoded = codec::encode(&accounts)?;

            if self
                .kv
                .compare_and_set(ACCOUNTS_KEY, read.raw.as_deref(), &encoded)?
            {
                tracing::info!(
                    username = %candidate.username,
                    accounts = accounts.len(),
                    "Account registered"
                );
                return Ok(());
            }

            tracing::debug!(attempt, "Accounts slot changed during register, retrying");
        }

        Err(StoreError::WriteConflict {
            slot: ACCOUNTS_KEY.to_string(),
            attempts: MAX_WRITE_ATTEMPTS,
        })
    }

    fn login(&self, identifier: &str, password: &str) -> Result<Session, StoreError> {
        let accounts = self.list_accounts()?;

        // First match in insertion order wins, even if uniqueness was ever violated
        let found = accounts
            .iter()
            .find(|a| a.matches(identifier, password))
            .ok_or(StoreError::InvalidCredentials)?;

        let session = Session::for_account(found, Utc::now());
        self.kv.set(SESSION_KEY, &codec::encode(&session)?)?;

        tracing::info!(username = %session.username, "Login succeeded");
        Ok(session)
    }

    fn current_session(&self) -> Result<Option<Session>, StoreError> {
        let read = codec::read_slot::<_, Session>(self.kv, SESSION_KEY, self.policy)?;
        Ok(read.value)
    }

    fn logout(&self) -> Result<(), StoreError> {
        self.kv.remove(SESSION_KEY)?;
        tracing::info!("Session cleared");
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
