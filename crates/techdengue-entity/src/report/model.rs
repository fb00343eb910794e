//! Report history record model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use techdengue_core::types::RecordId;

use super::kind::{ReportFormat, ReportType};
use super::status::ReportStatus;

/// Filters a report was generated with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl ReportFilters {
    /// Check whether no filter was applied.
    pub fn is_empty(&self) -> bool {
        self.municipality.is_none()
            && self.contract.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// A generated report as remembered by the report history store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportHistoryRecord {
    /// Unique identifier (`rel-<millis>-<suffix>`).
    pub id: RecordId,
    /// Report kind.
    #[serde(rename = "type")]
    pub report_type: ReportType,
    /// Output format.
    pub format: ReportFormat,
    /// Display title.
    pub title: String,
    /// Filters used to generate the report.
    #[serde(default)]
    pub filters: ReportFilters,
    /// When the report was requested. Never changes afterwards.
    pub created_at: DateTime<Utc>,
    /// Size of the generated file in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// Generation status.
    #[serde(default)]
    pub status: ReportStatus,
    /// Failure message reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Where the generated file can be downloaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl ReportHistoryRecord {
    /// Build a record from a creation payload.
    pub fn from_new(id: RecordId, created_at: DateTime<Utc>, new: NewReport) -> Self {
        Self {
            id,
            report_type: new.report_type,
            format: new.format,
            title: new.title,
            filters: new.filters,
            created_at,
            size: new.size,
            status: new.status,
            error: new.error,
            download_url: new.download_url,
        }
    }
}

/// Everything needed to create a report history record except the
/// identifier and timestamp, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub format: ReportFormat,
    pub title: String,
    #[serde(default)]
    pub filters: ReportFilters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default)]
    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl NewReport {
    /// A successfully generated report with no filters.
    pub fn new(report_type: ReportType, format: ReportFormat, title: impl Into<String>) -> Self {
        Self {
            report_type,
            format,
            title: title.into(),
            filters: ReportFilters::default(),
            size: None,
            status: ReportStatus::Done,
            error: None,
            download_url: None,
        }
    }

    /// Attach generation filters.
    pub fn with_filters(mut self, filters: ReportFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: ReportStatus) -> Self {
        self.status = status;
        self
    }
}

/// Partial update merged into a stored report record. `None` leaves the
/// field untouched; `id` and `createdAt` are never patchable.
///
/// `error` and `download_url` are optional on the record, so their patch
/// fields are doubly optional: `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPatch {
    pub title: Option<String>,
    pub format: Option<ReportFormat>,
    pub filters: Option<ReportFilters>,
    pub size: Option<u64>,
    pub status: Option<ReportStatus>,
    pub error: Option<Option<String>>,
    pub download_url: Option<Option<String>>,
}

impl ReportPatch {
    /// Merge this patch into `record`.
    pub fn apply_to(&self, record: &mut ReportHistoryRecord) {
        if let Some(title) = &self.title {
            record.title = title.clone();
        }
        if let Some(format) = self.format {
            record.format = format;
        }
        if let Some(filters) = &self.filters {
            record.filters = filters.clone();
        }
        if let Some(size) = self.size {
            record.size = Some(size);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        if let Some(error) = &self.error {
            record.error = error.clone();
        }
        if let Some(url) = &self.download_url {
            record.download_url = url.clone();
        }
    }
}
