//! Glue between domain records and the generic entity store.

use std::fmt::Debug;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

use techdengue_core::types::RecordId;
use techdengue_entity::notification::{NewNotification, NotificationPatch, NotificationRecord};
use techdengue_entity::report::{NewReport, ReportHistoryRecord, ReportPatch};

/// A record type an [`EntityStore`](crate::EntityStore) can hold.
pub trait StoredRecord: Clone + Debug + Serialize + DeserializeOwned {
    /// Creation payload (all fields except id and timestamp).
    type New;
    /// Partial update payload.
    type Patch;

    /// Identifier prefix, e.g. `"rel"`.
    const ID_PREFIX: &'static str;

    /// Return the record identifier.
    fn id(&self) -> &RecordId;

    /// Return the creation timestamp.
    fn created_at(&self) -> DateTime<Utc>;

    /// Build a record from its creation payload.
    fn from_new(id: RecordId, created_at: DateTime<Utc>, new: Self::New) -> Self;

    /// Merge a partial update into the record.
    fn apply_patch(&mut self, patch: &Self::Patch);
}

impl StoredRecord for NotificationRecord {
    type New = NewNotification;
    type Patch = NotificationPatch;

    const ID_PREFIX: &'static str = "notif";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_new(id: RecordId, created_at: DateTime<Utc>, new: NewNotification) -> Self {
        NotificationRecord::from_new(id, created_at, new)
    }

    fn apply_patch(&mut self, patch: &NotificationPatch) {
        patch.apply_to(self);
    }
}

impl StoredRecord for ReportHistoryRecord {
    type New = NewReport;
    type Patch = ReportPatch;

    const ID_PREFIX: &'static str = "rel";

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn from_new(id: RecordId, created_at: DateTime<Utc>, new: NewReport) -> Self {
        ReportHistoryRecord::from_new(id, created_at, new)
    }

    fn apply_patch(&mut self, patch: &ReportPatch) {
        patch.apply_to(self);
    }
}
