//! Notification category enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use techdengue_core::AppError;

/// Category of a notification. Determines its display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// A municipality crossed a breeding-site alert threshold.
    DengueAlert,
    /// Breeding sites waiting for a feedback (devolutiva).
    PendingFeedback,
    /// Field agents registered new activities.
    NewActivity,
    /// A tracked goal was reached.
    GoalReached,
    /// A generated report is available.
    Report,
    /// System-level messages.
    System,
}

impl NotificationCategory {
    /// Every category, in priority order.
    pub const ALL: [Self; 6] = [
        Self::DengueAlert,
        Self::PendingFeedback,
        Self::NewActivity,
        Self::GoalReached,
        Self::Report,
        Self::System,
    ];

    /// Return the priority rank (lower = shown first).
    pub fn priority_rank(&self) -> u8 {
        match self {
            Self::DengueAlert => 0,
            Self::PendingFeedback => 1,
            Self::NewActivity => 2,
            Self::GoalReached => 3,
            Self::Report => 4,
            Self::System => 5,
        }
    }

    /// Return the category as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DengueAlert => "dengue_alert",
            Self::PendingFeedback => "pending_feedback",
            Self::NewActivity => "new_activity",
            Self::GoalReached => "goal_reached",
            Self::Report => "report",
            Self::System => "system",
        }
    }
}

impl fmt::Display for NotificationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid notification category: '{s}'. Expected one of: dengue_alert, \
                     pending_feedback, new_activity, goal_reached, report, system"
                ))
            })
    }
}
