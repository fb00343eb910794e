//! Notification store.

pub mod store;

pub use store::NotificationStore;
