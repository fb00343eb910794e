//! # techdengue-notification
//!
//! Everything that turns raw notification records into what the dashboard
//! shows:
//!
//! - priority ordering (unread, category rank, recency)
//! - templated factories for each notification category
//! - the presentation adapter producing display items

pub mod formatter;
pub mod presentation;
pub mod priority;

pub use formatter::NotificationFormatter;
pub use presentation::NotificationView;
pub use priority::{PriorityKey, sort_by_priority};
