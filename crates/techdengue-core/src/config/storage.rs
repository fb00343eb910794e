//! Snapshot storage configuration.

use serde::{Deserialize, Serialize};

/// Where and under which keys store snapshots are persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` document per store.
    pub directory: String,
    /// Storage key of the notification store.
    pub notifications_key: String,
    /// Storage key of the report history store.
    pub report_history_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: "data/storage".to_string(),
            notifications_key: "notifications-storage".to_string(),
            report_history_key: "report-history-storage".to_string(),
        }
    }
}
