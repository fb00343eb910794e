//! Notification domain entities.

pub mod category;
pub mod model;
pub mod severity;

pub use category::NotificationCategory;
pub use model::{NewNotification, NotificationPatch, NotificationRecord};
pub use severity::NotificationSeverity;
