//! Capacity settings for the notification and report history stores.

use serde::{Deserialize, Serialize};

/// Notification store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    /// Maximum retained notifications; the oldest is evicted beyond this.
    pub max_entries: usize,
    /// Default number of entries returned by recent-item queries.
    pub recent_limit: usize,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            recent_limit: default_recent_limit(),
        }
    }
}

/// Report history store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Maximum retained report records; the oldest is evicted beyond this.
    pub max_entries: usize,
    /// Default number of entries returned by recent-item queries.
    pub recent_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_max_entries() -> usize {
    50
}

fn default_recent_limit() -> usize {
    10
}
