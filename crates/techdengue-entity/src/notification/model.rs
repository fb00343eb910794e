//! Notification record model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use techdengue_core::types::RecordId;

use super::category::NotificationCategory;
use super::severity::NotificationSeverity;

/// A notification as held by the notification store and persisted in its
/// snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationRecord {
    /// Unique identifier (`notif-<millis>-<suffix>`).
    pub id: RecordId,
    /// Notification category; drives priority ordering.
    pub category: NotificationCategory,
    /// Visual severity.
    pub severity: NotificationSeverity,
    /// Title line.
    pub title: String,
    /// Body text.
    pub message: String,
    /// When the notification was created. Never changes afterwards.
    pub created_at: DateTime<Utc>,
    /// Whether the user has read this notification.
    #[serde(default)]
    pub read: bool,
    /// Route to open when the notification is activated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Label of the call-to-action button.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
}

impl NotificationRecord {
    /// Build a record from a creation payload.
    pub fn from_new(id: RecordId, created_at: DateTime<Utc>, new: NewNotification) -> Self {
        Self {
            id,
            category: new.category,
            severity: new.severity,
            title: new.title,
            message: new.message,
            created_at,
            read: new.read,
            link: new.link,
            action_label: new.action_label,
        }
    }

    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        !self.read
    }
}

/// Everything needed to create a notification except the identifier and
/// timestamp, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNotification {
    pub category: NotificationCategory,
    pub severity: NotificationSeverity,
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
}

/// Partial update applied to a stored notification. Only the read flag is
/// mutable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub read: Option<bool>,
}

impl NotificationPatch {
    /// Patch that marks a notification as read.
    pub fn mark_read() -> Self {
        Self { read: Some(true) }
    }

    /// Merge this patch into `record`.
    pub fn apply_to(&self, record: &mut NotificationRecord) {
        if let Some(read) = self.read {
            record.read = read;
        }
    }
}
