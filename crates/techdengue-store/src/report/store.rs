//! Report history store.

use std::sync::Arc;

use techdengue_core::config::history::HistoryConfig;
use techdengue_core::traits::Clock;
use techdengue_core::types::RecordId;
use techdengue_entity::report::{
    NewReport, ReportHistoryRecord, ReportPatch, ReportStatus, ReportType,
};

use crate::entity_store::EntityStore;
use crate::persistence::SnapshotRepository;

/// Remembers the reports the user generated, newest first.
#[derive(Debug)]
pub struct ReportHistoryStore {
    inner: EntityStore<ReportHistoryRecord>,
    recent_limit: usize,
}

impl ReportHistoryStore {
    /// Open the store, loading persisted history.
    pub fn open(
        repository: Box<dyn SnapshotRepository<ReportHistoryRecord>>,
        config: &HistoryConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            inner: EntityStore::open(repository, config.max_entries, clock),
            recent_limit: config.recent_limit,
        }
    }

    /// Record a generated report, returning its identifier.
    pub fn add(&mut self, report: NewReport) -> RecordId {
        self.inner.add(report)
    }

    /// Merge `patch` into the record with `id`. Unknown ids are ignored.
    pub fn update(&mut self, id: &str, patch: &ReportPatch) -> bool {
        self.inner.update(id, patch)
    }

    /// Mark a report as still being generated, clearing any earlier failure.
    pub fn mark_processing(&mut self, id: &str) -> bool {
        self.update(
            id,
            &ReportPatch {
                status: Some(ReportStatus::Processing),
                error: Some(None),
                ..Default::default()
            },
        )
    }

    /// Mark a report as generated, recording its size and download URL and
    /// clearing any earlier failure. A missing URL keeps the stored one.
    pub fn mark_done(&mut self, id: &str, size: Option<u64>, download_url: Option<&str>) -> bool {
        self.update(
            id,
            &ReportPatch {
                status: Some(ReportStatus::Done),
                size,
                error: Some(None),
                download_url: download_url.map(|url| Some(url.to_string())),
                ..Default::default()
            },
        )
    }

    /// Mark a report as failed with the backend's message.
    pub fn mark_failed(&mut self, id: &str, message: &str) -> bool {
        self.update(
            id,
            &ReportPatch {
                status: Some(ReportStatus::Error),
                error: Some(Some(message.to_string())),
                ..Default::default()
            },
        )
    }

    /// Delete one record. Unknown ids are ignored.
    pub fn remove(&mut self, id: &str) -> bool {
        self.inner.remove(id)
    }

    /// Delete the whole history.
    pub fn clear_all(&mut self) {
        self.inner.clear_all();
    }

    /// Reports of one type, newest first.
    pub fn get_by_type(&self, report_type: ReportType) -> Vec<ReportHistoryRecord> {
        self.inner.filter(|r| r.report_type == report_type)
    }

    /// Reports in one status, newest first.
    pub fn get_by_status(&self, status: ReportStatus) -> Vec<ReportHistoryRecord> {
        self.inner.filter(|r| r.status == status)
    }

    /// The `limit` newest reports.
    pub fn get_recent(&self, limit: usize) -> Vec<ReportHistoryRecord> {
        self.inner.recent(limit)
    }

    /// The newest reports, up to the configured recent limit.
    pub fn recent(&self) -> Vec<ReportHistoryRecord> {
        self.inner.recent(self.recent_limit)
    }

    /// Configured default size of recent-item listings.
    pub fn recent_limit(&self) -> usize {
        self.recent_limit
    }

    /// The whole history, newest first.
    pub fn history(&self) -> &[ReportHistoryRecord] {
        self.inner.records()
    }

    /// Look up a report by identifier.
    pub fn find(&self, id: &str) -> Option<&ReportHistoryRecord> {
        self.inner.find(id)
    }

    /// Number of reports held.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
