//! Storage Seam
//!
//! Abstract key-value store for the persisted snapshot.
//! The browser build backs it with `localStorage`; tests use `MemoryStore`.

use std::collections::HashMap;

use crate::error::{ChecklistError, ChecklistResult};

/// The single key the snapshot lives under
pub const STORAGE_KEY: &str = "checklist_with_summary_v3_structured";

/// String key-value store holding serialized snapshots
pub trait SnapshotStore {
    /// `Ok(None)` when nothing is stored under `key`
    fn read(&self, key: &str) -> ChecklistResult<Option<String>>;

    /// Overwrite whatever is stored under `key`
    fn write(&mut self, key: &str, value: &str) -> ChecklistResult<()>;

    fn remove(&mut self, key: &str) -> ChecklistResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a raw value (possibly malformed)
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    /// Make every subsequent write fail, like a full quota
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Make every call fail, like a browser with storage disabled
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    fn check_available(&self) -> ChecklistResult<()> {
        if self.unavailable {
            return Err(ChecklistError::StorageUnavailable("storage disabled".to_string()));
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self, key: &str) -> ChecklistResult<Option<String>> {
        self.check_available()?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> ChecklistResult<()> {
        self.check_available()?;
        if self.fail_writes {
            return Err(ChecklistError::StorageWrite("quota exceeded".to_string()));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> ChecklistResult<()> {
        self.check_available()?;
        self.entries.remove(key);
        Ok(())
    }
}
