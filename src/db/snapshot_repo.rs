use tracing::{debug, warn};

use crate::db::storage::SlotStorage;
use crate::error::PickerResult;
use crate::model::{Snapshot, SnapshotData};

pub const DEFAULT_SLOT: &str = "teamPickerData";

/// Reads and writes the last generation result as one JSON document in a
/// single named slot.
pub struct SnapshotStore<S> {
    storage: S,
    key: String,
}

impl<S: SlotStorage> SnapshotStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_SLOT)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Overwrites whatever the slot held before.
    pub fn save(&self, data: &SnapshotData) -> PickerResult<()> {
        let json = serde_json::to_string(data)?;
        self.storage.set(&self.key, &json)?;
        debug!(slot = %self.key, bytes = json.len(), "snapshot saved");
        Ok(())
    }

    /// Never fails: an absent, unreadable, or malformed slot is `Empty`.
    pub fn load(&self) -> Snapshot {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Snapshot::Empty,
            Err(e) => {
                warn!(slot = %self.key, error = %e, "could not read snapshot slot");
                return Snapshot::Empty;
            }
        };

        match serde_json::from_str::<SnapshotData>(&raw) {
            Ok(mut data) => {
                data.assign_missing_ids();
                Snapshot::Present(data)
            }
            Err(e) => {
                warn!(slot = %self.key, error = %e, "ignoring malformed snapshot");
                Snapshot::Empty
            }
        }
    }

    /// Whether the slot holds anything, without parsing it. An unreadable
    /// slot counts as present so overwriting it still asks first.
    pub fn exists(&self) -> bool {
        match self.storage.get(&self.key) {
            Ok(value) => value.is_some(),
            Err(e) => {
                warn!(slot = %self.key, error = %e, "could not read snapshot slot");
                true
            }
        }
    }

    pub fn clear(&self) -> PickerResult<()> {
        self.storage.clear(&self.key)
    }
}
