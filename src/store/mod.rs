// CareCompanion — Store Module
//
// Local account and session persistence. Accounts and the current session
// live in two named slots of a key-value backend (SQLite on disk, or an
// in-memory map), serialized as JSON.

mod codec;
mod db;
mod error;
mod kv;
mod models;
mod repository;

pub use codec::CorruptionPolicy;
pub use db::Database;
pub use error::StoreError;
pub use kv::{KeyValueStore, MemoryKeyValueStore};
pub use models::{Account, AccountSummary, Session};
pub use repository::{AccountStore, KvAccountStore, ACCOUNTS_KEY, SESSION_KEY};
