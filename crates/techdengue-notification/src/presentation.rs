//! Conversion of persisted notifications into display items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use techdengue_core::AppError;
use techdengue_core::result::AppResult;
use techdengue_core::types::RecordId;
use techdengue_entity::notification::{NotificationRecord, NotificationSeverity};

use crate::priority::sort_by_priority;

/// A notification in the shape display components consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationView {
    pub id: RecordId,
    /// Visual type, taken from the record's severity.
    #[serde(rename = "type")]
    pub kind: NotificationSeverity,
    pub title: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
}

impl From<&NotificationRecord> for NotificationView {
    fn from(record: &NotificationRecord) -> Self {
        Self {
            id: record.id.clone(),
            kind: record.severity,
            title: record.title.clone(),
            message: record.message.clone(),
            timestamp: record.created_at,
            read: record.read,
            link: present(record.link.as_deref()),
            action_label: present(record.action_label.as_deref()),
        }
    }
}

impl NotificationView {
    /// Adapt a raw persisted notification object, parsing its ISO-8601
    /// `createdAt` string.
    pub fn from_json(value: &serde_json::Value) -> AppResult<Self> {
        let created_at = value
            .get("createdAt")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| AppError::validation("Notification is missing 'createdAt'"))?;

        let timestamp = DateTime::parse_from_rfc3339(created_at)
            .map_err(|e| AppError::validation(format!("Invalid createdAt '{created_at}': {e}")))?
            .with_timezone(&Utc);

        let record: NotificationRecord = serde_json::from_value(value.clone())?;
        let mut view = Self::from(&record);
        view.timestamp = timestamp;
        Ok(view)
    }
}

/// Adapt every record, keeping input order.
pub fn to_views(records: &[NotificationRecord]) -> Vec<NotificationView> {
    records.iter().map(NotificationView::from).collect()
}

/// Priority-order `records` and adapt them for display.
pub fn display_list(records: &[NotificationRecord]) -> Vec<NotificationView> {
    to_views(&sort_by_priority(records))
}

/// Optional hints stay absent when missing or blank.
fn present(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use techdengue_entity::notification::NotificationCategory;

    fn record() -> NotificationRecord {
        NotificationRecord {
            id: RecordId::from("notif-1-abc"),
            category: NotificationCategory::GoalReached,
            severity: NotificationSeverity::Success,
            title: "Goal Reached".to_string(),
            message: "done".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap(),
            read: true,
            link: Some("/reports".to_string()),
            action_label: Some(String::new()),
        }
    }

    #[test]
    fn test_field_mapping() {
        let view = NotificationView::from(&record());
        assert_eq!(view.kind, NotificationSeverity::Success);
        assert_eq!(view.title, "Goal Reached");
        assert_eq!(view.timestamp, record().created_at);
        assert!(view.read);
        assert_eq!(view.link.as_deref(), Some("/reports"));
        assert_eq!(view.action_label, None);
    }

    #[test]
    fn test_serialized_view_omits_absent_hints() {
        let json = serde_json::to_value(NotificationView::from(&record())).unwrap();
        assert_eq!(json["type"], "success");
        assert!(json.get("actionLabel").is_none());
        assert!(json.get("severity").is_none());
    }

    #[test]
    fn test_from_json_parses_created_at() {
        let raw = serde_json::json!({
            "id": "notif-1-abc",
            "category": "dengue_alert",
            "severity": "error",
            "title": "Dengue Alert - Campinas",
            "message": "3 breeding sites identified in Campinas.",
            "createdAt": "2024-05-02T11:30:00-03:00",
            "read": false
        });

        let view = NotificationView::from_json(&raw).unwrap();
        assert_eq!(view.timestamp, Utc.with_ymd_and_hms(2024, 5, 2, 14, 30, 0).unwrap());
        assert_eq!(view.kind, NotificationSeverity::Error);
        assert_eq!(view.link, None);
    }

    #[test]
    fn test_from_json_rejects_bad_date() {
        let raw = serde_json::json!({
            "id": "notif-1-abc",
            "category": "system",
            "severity": "info",
            "title": "t",
            "message": "m",
            "createdAt": "yesterday"
        });
        assert!(NotificationView::from_json(&raw).is_err());
    }
}
