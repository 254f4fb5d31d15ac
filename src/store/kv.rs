// CareCompanion — Key-value persistence surface
//
// The account store only ever talks to named text slots. Anything that can
// get, set, remove and conditionally replace a slot can back it: the SQLite
// file in `db.rs`, or the in-memory map below.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use super::StoreError;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over slot storage, enabling the on-disk backend and an
/// in-memory one for tests.
pub trait KeyValueStore {
    /// Read a slot. `None` if the slot has never been written or was removed.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrite a slot unconditionally.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a slot. Removing an absent slot is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Write `value` only if the slot still holds exactly `expected`
    /// (`None` meaning absent). Returns false if the slot changed.
    fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool, StoreError>;
}

// ─── In-Memory Implementation ────────────────────────────────────────────────

#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slots(&self) -> Result<MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.slots
            .lock()
            .map_err(|_| StoreError::Other("In-memory slot map lock poisoned".to_string()))
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.slots()?.remove(key);
        Ok(())
    }

    fn compare_and_set(
        &self,
        key: &str,
        expected: Option<&str>,
        value: &str,
    ) -> Result<bool, StoreError> {
        let mut slots = self.slots()?;
        if slots.get(key).map(String::as_str) != expected {
            return Ok(false);
        }
        slots.insert(key.to_string(), value.to_string());
        Ok(true)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
