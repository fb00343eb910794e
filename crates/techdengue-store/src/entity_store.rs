//! Generic capacity-bounded record store with write-through persistence.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use techdengue_core::traits::Clock;
use techdengue_core::types::RecordId;

use crate::persistence::SnapshotRepository;
use crate::record::StoredRecord;

/// Newest-first collection of records.
///
/// - `add` prepends and evicts at most one record (the oldest, at the back)
///   when the capacity is exceeded.
/// - Every mutation that changes the collection is saved through the
///   repository before returning. Save failures are logged and the
///   in-memory state is kept.
/// - Unknown identifiers are silent no-ops.
#[derive(Debug)]
pub struct EntityStore<R: StoredRecord> {
    records: Vec<R>,
    capacity: usize,
    repository: Box<dyn SnapshotRepository<R>>,
    clock: Arc<dyn Clock>,
    /// Latest timestamp handed out; keeps `created_at` non-decreasing.
    last_issued: Option<DateTime<Utc>>,
}

impl<R: StoredRecord> EntityStore<R> {
    /// Open a store, loading the persisted collection.
    ///
    /// A missing snapshot starts empty. An unreadable snapshot is logged and
    /// also starts empty. A snapshot holding more than `capacity` records
    /// keeps only the newest `capacity`. A capacity of 0 is raised to 1.
    pub fn open(
        repository: Box<dyn SnapshotRepository<R>>,
        capacity: usize,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let capacity = capacity.max(1);

        let mut records = match repository.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    key = repository.key(),
                    error = %e,
                    "Failed to load snapshot, starting with an empty collection"
                );
                Vec::new()
            }
        };

        if records.len() > capacity {
            debug!(
                key = repository.key(),
                loaded = records.len(),
                capacity,
                "Snapshot exceeds capacity, dropping oldest records"
            );
            records.truncate(capacity);
        }

        let last_issued = records.iter().map(StoredRecord::created_at).max();

        Self {
            records,
            capacity,
            repository,
            clock,
            last_issued,
        }
    }

    /// Add a record built from `new`, returning its generated identifier.
    pub fn add(&mut self, new: R::New) -> RecordId {
        let created_at = self.next_timestamp();
        let id = self.unique_id(created_at);

        self.records.insert(0, R::from_new(id.clone(), created_at, new));
        if self.records.len() > self.capacity {
            if let Some(evicted) = self.records.pop() {
                debug!(
                    key = self.repository.key(),
                    evicted = %evicted.id(),
                    "Capacity reached, evicted oldest record"
                );
            }
        }

        debug!(key = self.repository.key(), id = %id, "Record added");
        self.persist();
        id
    }

    /// Merge `patch` into the record with `id`. Returns whether a record matched.
    pub fn update(&mut self, id: &str, patch: &R::Patch) -> bool {
        let Some(record) = self.records.iter_mut().find(|r| r.id() == id) else {
            return false;
        };
        record.apply_patch(patch);
        self.persist();
        true
    }

    /// Apply `patch` to every record for which `predicate` holds. Returns how
    /// many records were patched.
    pub fn update_where(&mut self, predicate: impl Fn(&R) -> bool, patch: &R::Patch) -> usize {
        let mut touched = 0;
        for record in self.records.iter_mut().filter(|r| predicate(r)) {
            record.apply_patch(patch);
            touched += 1;
        }
        if touched > 0 {
            self.persist();
        }
        touched
    }

    /// Remove the record with `id`. Returns whether a record was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            return false;
        }
        debug!(key = self.repository.key(), id, "Record removed");
        self.persist();
        true
    }

    /// Remove every record.
    pub fn clear_all(&mut self) {
        self.records.clear();
        debug!(key = self.repository.key(), "Collection cleared");
        self.persist();
    }

    /// Records matching `predicate`, newest first.
    pub fn filter(&self, predicate: impl Fn(&R) -> bool) -> Vec<R> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// The first `limit` records (all of them if there are fewer).
    pub fn recent(&self, limit: usize) -> Vec<R> {
        self.records.iter().take(limit).cloned().collect()
    }

    /// Look up a record by identifier.
    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// The whole collection, newest first.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Maximum number of records retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = self.clock.now();
        let issued = match self.last_issued {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_issued = Some(issued);
        issued
    }

    fn unique_id(&self, at: DateTime<Utc>) -> RecordId {
        loop {
            let id = RecordId::generate(R::ID_PREFIX, at);
            if self.find(id.as_str()).is_none() {
                return id;
            }
        }
    }

    fn persist(&self) {
        if let Err(e) = self.repository.save(&self.records) {
            warn!(
                key = self.repository.key(),
                error = %e,
                "Failed to persist snapshot, keeping in-memory state"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use techdengue_core::result::AppResult;
    use techdengue_core::traits::{ManualClock, SnapshotStorage};
    use techdengue_core::AppError;
    use techdengue_entity::report::{
        NewReport, ReportFormat, ReportHistoryRecord, ReportPatch, ReportStatus, ReportType,
    };

    use crate::persistence::{JsonSnapshotRepository, MemorySnapshotStorage};

    type Store = EntityStore<ReportHistoryRecord>;

    const KEY: &str = "report-history-storage";

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap(),
        ))
    }

    fn open(storage: &Arc<MemorySnapshotStorage>, capacity: usize, clock: Arc<ManualClock>) -> Store {
        EntityStore::open(
            Box::new(JsonSnapshotRepository::new(storage.clone(), KEY)),
            capacity,
            clock,
        )
    }

    fn report(title: &str) -> NewReport {
        NewReport::new(ReportType::Municipal, ReportFormat::Pdf, title)
    }

    fn titles(store: &Store) -> Vec<String> {
        store.records().iter().map(|r| r.title.clone()).collect()
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 50, clock());

        let id = store.add(report("R1"));
        store.add(report("R2"));

        assert_eq!(titles(&store), vec!["R2", "R1"]);
        assert_eq!(id.prefix(), Some("rel"));
        assert!(storage.read(KEY).unwrap().unwrap().contains("R1"));
    }

    #[test]
    fn test_eviction_one_at_a_time() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 3, clock());

        for i in 1..=5 {
            store.add(report(&format!("R{i}")));
            assert!(store.len() <= 3);
        }
        assert_eq!(titles(&store), vec!["R5", "R4", "R3"]);
    }

    #[test]
    fn test_same_millisecond_keeps_insertion_order() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 10, clock());

        let first = store.add(report("first"));
        let second = store.add(report("second"));

        assert_ne!(first, second);
        assert_eq!(titles(&store), vec!["second", "first"]);
    }

    #[test]
    fn test_timestamps_never_go_backwards() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let clock = clock();
        let mut store = open(&storage, 10, clock.clone());

        store.add(report("a"));
        clock.advance(Duration::minutes(-30));
        store.add(report("b"));

        let records = store.records();
        assert!(records[0].created_at >= records[1].created_at);
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 10, clock());
        store.add(report("R1"));
        let before = store.records().to_vec();

        let patch = ReportPatch {
            status: Some(ReportStatus::Error),
            ..Default::default()
        };
        assert!(!store.update("rel-0-missing", &patch));
        assert!(!store.remove("rel-0-missing"));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_recent_limit() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 10, clock());
        for i in 1..=4 {
            store.add(report(&format!("R{i}")));
        }

        let recent: Vec<String> = store.recent(2).into_iter().map(|r| r.title).collect();
        assert_eq!(recent, vec!["R4", "R3"]);
        assert_eq!(store.recent(10).len(), 4);
        assert!(store.recent(0).is_empty());
    }

    #[test]
    fn test_reopen_restores_collection() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 10, clock());
        store.add(report("R1"));
        store.add(report("R2"));
        let expected = store.records().to_vec();
        drop(store);

        let reopened = open(&storage, 10, clock());
        assert_eq!(reopened.records(), expected.as_slice());
    }

    #[test]
    fn test_reopen_with_smaller_capacity_keeps_newest() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 10, clock());
        for i in 1..=5 {
            store.add(report(&format!("R{i}")));
        }
        drop(store);

        let reopened = open(&storage, 2, clock());
        assert_eq!(titles(&reopened), vec!["R5", "R4"]);
    }

    #[test]
    fn test_corrupt_snapshot_starts_empty() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        storage.write(KEY, "][").unwrap();

        let mut store = open(&storage, 10, clock());
        assert!(store.is_empty());
        store.add(report("R1"));
        assert_eq!(store.len(), 1);
    }

    #[derive(Debug)]
    struct FailingStorage;

    impl SnapshotStorage for FailingStorage {
        fn storage_type(&self) -> &str {
            "failing"
        }

        fn read(&self, _key: &str) -> AppResult<Option<String>> {
            Err(AppError::storage("storage unavailable"))
        }

        fn write(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::storage("quota exceeded"))
        }

        fn remove(&self, _key: &str) -> AppResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_storage_failures_do_not_fail_mutations() {
        let mut store: Store = EntityStore::open(
            Box::new(JsonSnapshotRepository::new(Arc::new(FailingStorage), KEY)),
            10,
            clock(),
        );

        let id = store.add(report("R1"));
        assert_eq!(store.len(), 1);
        assert!(store.remove(id.as_str()));
        store.clear_all();
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_capacity_raised_to_one() {
        let storage = Arc::new(MemorySnapshotStorage::new());
        let mut store = open(&storage, 0, clock());
        store.add(report("R1"));
        store.add(report("R2"));
        assert_eq!(store.capacity(), 1);
        assert_eq!(titles(&store), vec!["R2"]);
    }
}
