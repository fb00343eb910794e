//! In-memory snapshot storage.

use std::collections::HashMap;
use std::sync::Mutex;

use techdengue_core::result::AppResult;
use techdengue_core::traits::SnapshotStorage;

/// Keeps snapshots in a map; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySnapshotStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySnapshotStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SnapshotStorage for MemorySnapshotStorage {
    fn storage_type(&self) -> &str {
        "memory"
    }

    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.remove(key);
        Ok(())
    }
}
