//! # techdengue-store
//!
//! Client-side state for the TechDengue dashboard:
//!
//! - [`EntityStore`]: a newest-first collection with a fixed capacity,
//!   FIFO eviction and write-through persistence
//! - [`NotificationStore`] and [`ReportHistoryStore`], its two instances
//! - snapshot repositories and storage backends (local directory, memory)
//!
//! Store operations never fail. Unknown identifiers are silent no-ops and
//! persistence failures are logged while the in-memory state is kept.

pub mod bootstrap;
pub mod entity_store;
pub mod notification;
pub mod persistence;
pub mod record;
pub mod report;

pub use bootstrap::Stores;
pub use entity_store::EntityStore;
pub use notification::NotificationStore;
pub use record::StoredRecord;
pub use report::ReportHistoryStore;
