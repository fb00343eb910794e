//! Notification display priority.

use std::cmp::{Ordering, Reverse};

use chrono::{DateTime, Utc};

use techdengue_entity::notification::NotificationRecord;

/// Composite sort key of a notification.
///
/// Field order is the comparison order: unread before read, then category
/// rank ascending, then newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PriorityKey {
    read: bool,
    category_rank: u8,
    recency: Reverse<DateTime<Utc>>,
}

impl PriorityKey {
    /// Compute the key of a record.
    pub fn of(record: &NotificationRecord) -> Self {
        Self {
            read: record.read,
            category_rank: record.category.priority_rank(),
            recency: Reverse(record.created_at),
        }
    }
}

/// Compare two notifications by display priority.
pub fn compare(a: &NotificationRecord, b: &NotificationRecord) -> Ordering {
    PriorityKey::of(a).cmp(&PriorityKey::of(b))
}

/// Return a priority-ordered copy of `records`.
///
/// The sort is stable: records with equal keys keep their input order. The
/// input slice is not modified.
pub fn sort_by_priority(records: &[NotificationRecord]) -> Vec<NotificationRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(compare);
    sorted
}
