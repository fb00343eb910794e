//! Report history store.

pub mod store;

pub use store::ReportHistoryStore;
