//! Snapshot persistence: repositories and storage backends.

pub mod local;
pub mod memory;
pub mod snapshot;

pub use local::LocalSnapshotStorage;
pub use memory::MemorySnapshotStorage;
pub use snapshot::{JsonSnapshotRepository, Snapshot, SnapshotRepository};
