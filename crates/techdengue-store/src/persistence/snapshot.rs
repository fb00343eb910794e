//! JSON snapshot repository.
//!
//! A store's whole collection is written under a single storage key as
//! `{ "version": 1, "collection": [...] }`. Nothing else is persisted.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use techdengue_core::AppError;
use techdengue_core::result::AppResult;
use techdengue_core::traits::SnapshotStorage;

use crate::record::StoredRecord;

/// Current snapshot layout version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Persisted form of a store collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot<R> {
    /// Layout version.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Records, newest first.
    #[serde(default = "Vec::new")]
    pub collection: Vec<R>,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

/// Loads and saves the collection of one store.
pub trait SnapshotRepository<R>: std::fmt::Debug {
    /// Storage key this repository writes to (used in logs).
    fn key(&self) -> &str;

    /// Load the persisted collection. A missing snapshot is an empty collection.
    fn load(&self) -> AppResult<Vec<R>>;

    /// Replace the persisted collection.
    fn save(&self, records: &[R]) -> AppResult<()>;
}

/// Repository serializing a [`Snapshot`] as JSON into a [`SnapshotStorage`].
#[derive(Debug)]
pub struct JsonSnapshotRepository<R> {
    storage: Arc<dyn SnapshotStorage>,
    key: String,
    _record: PhantomData<fn() -> R>,
}

impl<R> JsonSnapshotRepository<R> {
    /// Create a repository writing under `key`.
    pub fn new(storage: Arc<dyn SnapshotStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            _record: PhantomData,
        }
    }
}

impl<R: StoredRecord> SnapshotRepository<R> for JsonSnapshotRepository<R> {
    fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> AppResult<Vec<R>> {
        let Some(raw) = self.storage.read(&self.key)? else {
            debug!(key = %self.key, "No snapshot found, starting empty");
            return Ok(Vec::new());
        };

        let snapshot: Snapshot<R> = serde_json::from_str(&raw)?;
        if snapshot.version > SNAPSHOT_VERSION {
            return Err(AppError::serialization(format!(
                "Snapshot '{}' has unsupported version {} (expected at most {})",
                self.key, snapshot.version, SNAPSHOT_VERSION
            )));
        }
        debug!(
            key = %self.key,
            version = snapshot.version,
            records = snapshot.collection.len(),
            "Snapshot loaded"
        );
        Ok(snapshot.collection)
    }

    fn save(&self, records: &[R]) -> AppResult<()> {
        #[derive(Serialize)]
        struct SnapshotRef<'a, R> {
            version: u32,
            collection: &'a [R],
        }

        let json = serde_json::to_string(&SnapshotRef {
            version: SNAPSHOT_VERSION,
            collection: records,
        })?;
        self.storage.write(&self.key, &json)
    }
}
