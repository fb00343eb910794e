//! Notification templates for common dashboard events.
//!
//! Each function returns a [`NewNotification`]; the store assigns the
//! identifier and creation time when the payload is added.

use techdengue_entity::notification::{
    NewNotification, NotificationCategory, NotificationSeverity,
};

/// Route of the reports page.
pub const REPORTS_PATH: &str = "/reports";
/// Route of the activities list.
pub const ACTIVITIES_PATH: &str = "/activities";
/// Route of the feedback list filtered to pending items.
pub const PENDING_FEEDBACK_PATH: &str = "/feedback?status=pending";
/// Route of the POI map.
pub const MAP_PATH: &str = "/map";

/// Formats notifications for common events.
pub struct NotificationFormatter;

impl NotificationFormatter {
    /// Formats a dengue alert for a municipality with new breeding sites.
    pub fn dengue_alert(municipality: &str, breeding_sites: u32) -> NewNotification {
        NewNotification {
            category: NotificationCategory::DengueAlert,
            severity: NotificationSeverity::Error,
            title: format!("Dengue Alert - {municipality}"),
            message: format!(
                "{} identified in {municipality}. Immediate action is recommended.",
                count_label(breeding_sites, "breeding site", "breeding sites")
            ),
            read: false,
            link: Some(format!(
                "{MAP_PATH}?municipality={}",
                urlencoding::encode(municipality)
            )),
            action_label: Some("View on Map".to_string()),
        }
    }

    /// Formats a new-activity notification, e.g. "Ana registered 3 new inspections".
    pub fn activity(actor: &str, count: u32, activity_label: &str) -> NewNotification {
        NewNotification {
            category: NotificationCategory::NewActivity,
            severity: NotificationSeverity::Info,
            title: "New Activity".to_string(),
            message: format!("{actor} registered {count} new {activity_label}"),
            read: false,
            link: Some(ACTIVITIES_PATH.to_string()),
            action_label: None,
        }
    }

    /// Formats a pending-feedback reminder.
    ///
    /// The municipality clause is left out entirely when no municipality is
    /// given.
    pub fn pending_feedback(count: u32, municipality: Option<&str>) -> NewNotification {
        let location = municipality
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(|m| format!(" in {m}"))
            .unwrap_or_default();

        NewNotification {
            category: NotificationCategory::PendingFeedback,
            severity: NotificationSeverity::Warning,
            title: "Pending Feedback".to_string(),
            message: format!(
                "{} awaiting feedback{location}.",
                count_label(count, "breeding site", "breeding sites")
            ),
            read: false,
            link: Some(PENDING_FEEDBACK_PATH.to_string()),
            action_label: Some("Analyze".to_string()),
        }
    }

    /// Formats a goal-reached notification.
    ///
    /// The percentage is rounded half away from zero (99.5 shows as 100%).
    pub fn goal_reached(goal: &str, percentage: f64) -> NewNotification {
        NewNotification {
            category: NotificationCategory::GoalReached,
            severity: NotificationSeverity::Success,
            title: "Goal Reached".to_string(),
            message: format!(
                "The goal \"{goal}\" reached {}% completion.",
                round_percentage(percentage)
            ),
            read: false,
            link: Some(REPORTS_PATH.to_string()),
            action_label: Some("View Report".to_string()),
        }
    }

    /// Formats a report-available notification. Links to `download_url`
    /// when given, otherwise to the reports page.
    pub fn report_available(report_name: &str, download_url: Option<&str>) -> NewNotification {
        let link = download_url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(REPORTS_PATH);

        NewNotification {
            category: NotificationCategory::Report,
            severity: NotificationSeverity::Info,
            title: "Report Available".to_string(),
            message: format!("The report \"{report_name}\" is ready to download."),
            read: false,
            link: Some(link.to_string()),
            action_label: Some("Download".to_string()),
        }
    }

    /// Formats a free-text system message.
    pub fn system(title: &str, message: &str, link: Option<&str>) -> NewNotification {
        NewNotification {
            category: NotificationCategory::System,
            severity: NotificationSeverity::Info,
            title: title.to_string(),
            message: message.to_string(),
            read: false,
            link: link.filter(|l| !l.trim().is_empty()).map(str::to_string),
            action_label: None,
        }
    }
}

/// Round a percentage half away from zero.
pub fn round_percentage(percentage: f64) -> i64 {
    // f64::round rounds half away from zero; NaN saturates to 0.
    percentage.round() as i64
}

fn count_label(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("1 {singular}")
    } else {
        format!("{count} {plural}")
    }
}
