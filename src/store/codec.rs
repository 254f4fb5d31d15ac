// CareCompanion — Slot encoding
//
// The one place where slot text becomes typed data. Corrupt or unreadable
// slots are resolved here according to `CorruptionPolicy`, so swapping the
// fallback for a hard failure never touches the repository logic.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::kv::KeyValueStore;
use super::StoreError;

/// What to do when a slot cannot be read or parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CorruptionPolicy {
    /// Treat the slot as empty: no accounts, no session.
    #[default]
    Lenient,
    /// Fail with `StoreError::StorageCorrupted`.
    Strict,
}

/// A decoded slot together with the exact text it was decoded from.
/// The raw text is what a later conditional write must compare against.
#[derive(Debug)]
pub(crate) struct SlotRead<T> {
    pub raw: Option<String>,
    pub value: Option<T>,
}

/// Read and decode a slot.
///
/// Absent or empty slots decode to `None`. Read failures and malformed
/// content (whitespace-only included) decode to `None` under `Lenient`, and
/// to `StorageCorrupted` under `Strict`.
pub(crate) fn read_slot<K, T>(
    kv: &K,
    key: &str,
    policy: CorruptionPolicy,
) -> Result<SlotRead<T>, StoreError>
where
    K: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    let raw = match kv.get(key) {
        Ok(raw) => raw,
        Err(e) => {
            corrupted(key, e.to_string(), policy)?;
            return Ok(SlotRead { raw: None, value: None });
        }
    };

    let value = match raw.as_deref() {
        None | Some("") => None,
        Some(text) => match serde_json::from_str::<T>(text) {
            Ok(value) => Some(value),
            Err(e) => {
                corrupted(key, e.to_string(), policy)?;
                None
            }
        },
    };

    Ok(SlotRead { raw, value })
}

/// Encode a value for storage.
pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, StoreError> {
    Ok(serde_json::to_string(value)?)
}

fn corrupted(key: &str, reason: String, policy: CorruptionPolicy) -> Result<(), StoreError> {
    match policy {
        CorruptionPolicy::Lenient => {
            tracing::warn!(slot = %key, reason = %reason, "Unreadable slot treated as empty");
            Ok(())
        }
        CorruptionPolicy::Strict => Err(StoreError::StorageCorrupted {
            slot: key.to_string(),
            reason,
        }),
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
