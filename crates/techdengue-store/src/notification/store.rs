//! Notification store: the dashboard's bell menu state.

use std::sync::Arc;

use tracing::debug;

use techdengue_core::config::history::NotificationsConfig;
use techdengue_core::traits::Clock;
use techdengue_core::types::RecordId;
use techdengue_entity::notification::{
    NewNotification, NotificationCategory, NotificationPatch, NotificationRecord,
};
use techdengue_notification::presentation::{self, NotificationView};
use techdengue_notification::priority;

use crate::entity_store::EntityStore;
use crate::persistence::SnapshotRepository;

/// Holds the user's notifications, newest first.
#[derive(Debug)]
pub struct NotificationStore {
    inner: EntityStore<NotificationRecord>,
    recent_limit: usize,
}

impl NotificationStore {
    /// Open the store, loading persisted notifications.
    pub fn open(
        repository: Box<dyn SnapshotRepository<NotificationRecord>>,
        config: &NotificationsConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: EntityStore::open(repository, config.max_entries, clock),
            recent_limit: config.recent_limit,
        }
    }

    /// Add a notification (usually built by `NotificationFormatter`).
    pub fn add(&mut self, notification: NewNotification) -> RecordId {
        self.inner.add(notification)
    }

    /// Mark one notification as read. Unknown ids are ignored.
    pub fn mark_as_read(&mut self, id: &str) -> bool {
        self.inner.update(id, &NotificationPatch::mark_read())
    }

    /// Mark every unread notification as read. Returns how many changed.
    pub fn mark_all_as_read(&mut self) -> usize {
        let changed = self
            .inner
            .update_where(NotificationRecord::is_unread, &NotificationPatch::mark_read());
        debug!(changed, "Marked all notifications as read");
        changed
    }

    /// Delete one notification. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        self.inner.remove(id)
    }

    /// Delete every notification.
    pub fn clear_all(&mut self) {
        self.inner.clear_all();
    }

    /// Notifications of one category, newest first.
    pub fn get_by_category(&self, category: NotificationCategory) -> Vec<NotificationRecord> {
        self.inner.filter(|n| n.category == category)
    }

    /// Unread notifications, newest first.
    pub fn get_unread(&self) -> Vec<NotificationRecord> {
        self.inner.filter(NotificationRecord::is_unread)
    }

    /// Number of unread notifications.
    pub fn unread_count(&self) -> usize {
        self.inner.records().iter().filter(|n| n.is_unread()).count()
    }

    /// The `limit` newest notifications.
    pub fn get_recent(&self, limit: usize) -> Vec<NotificationRecord> {
        self.inner.recent(limit)
    }

    /// The newest notifications, up to the configured recent limit.
    pub fn recent(&self) -> Vec<NotificationRecord> {
        self.inner.recent(self.recent_limit)
    }

    /// Configured default size of recent-item listings.
    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// All notifications in display priority order.
    pub fn sorted(&self) -> Vec<NotificationRecord> {
        priority::sort_by_priority(self.inner.records())
    }

    /// All notifications, priority ordered and adapted for display.
    pub fn display_items(&self) -> Vec<NotificationView> {
        presentation::display_list(self.inner.records())
    }

    /// Look up a notification by identifier.
    pub fn find(&self, id: &str) -> Option<&NotificationRecord> {
        self.inner.find(id)
    }

    /// All notifications, newest first.
    pub fn notifications(&self) -> &[NotificationRecord] {
        self.inner.records()
    }

    /// Number of notifications held.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check whether there are no notifications.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
