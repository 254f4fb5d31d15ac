// CareCompanion — SQLite slot storage
//
// Opens a local SQLite file and exposes it as a `KeyValueStore`. Every slot
// is one row; conditional writes are single statements so they stay atomic
// even when two processes share the same file.

use std::path::Path;
use std::time::Duration;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::kv::KeyValueStore;
use super::StoreError;

/// How long a writer waits on a locked database file before giving up.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Wrapper around the SQLite connection holding the slot table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the slot database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;

        let db = Self { conn };
        db.run_migrations()?;

        tracing::debug!(path = %path.display(), "Slot database opened");
        Ok(db)
    }

    /// Open an in-memory database. Contents vanish when it is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Get a reference to the underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run schema migrations to create or update tables.
    fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS kv_slots (
                key         TEXT PRIMARY KEY,
                value       TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );
            ",
        )?;

        tracing::debug!("Database migrations completed successfully");
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_slots WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv_slots WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool, StoreError> {
        let now = Utc::now().to_rfc3339();
        let affected = match expected {
            Some(current) => self.conn.execute(
                "UPDATE kv_slots SET value = ?3, updated_at = ?4
                 WHERE key = ?1 AND value = ?2",
                params![key, current, value, now],
            )?,
            None => self.conn.execute(
                "INSERT INTO kv_slots (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO NOTHING",
                params![key, value, now],
            )?,
        };
        Ok(affected == 1)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
