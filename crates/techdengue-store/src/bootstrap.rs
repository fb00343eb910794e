//! Wiring of both stores from application configuration.

use std::sync::Arc;

use tracing::info;

use techdengue_core::config::AppConfig;
use techdengue_core::result::AppResult;
use techdengue_core::traits::{Clock, SnapshotStorage};

use crate::notification::NotificationStore;
use crate::persistence::{JsonSnapshotRepository, LocalSnapshotStorage, MemorySnapshotStorage};
use crate::report::ReportHistoryStore;

/// The notification and report history stores, sharing one storage backend
/// under distinct keys.
#[derive(Debug)]
pub struct Stores {
    pub notifications: NotificationStore,
    pub reports: ReportHistoryStore,
}

impl Stores {
    /// Open both stores over the local directory named in `config.storage`.
    pub fn open_local(config: &AppConfig, clock: Arc<dyn Clock>) -> AppResult<Self> {
        let storage = LocalSnapshotStorage::new(&config.storage.directory)?;
        info!(directory = %storage.root().display(), "Opening local snapshot storage");
        Ok(Self::open_with(Arc::new(storage), config, clock))
    }

    /// Open both stores over a fresh in-memory backend.
    pub fn open_in_memory(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self::open_with(Arc::new(MemorySnapshotStorage::new()), config, clock)
    }

    /// Open both stores over `storage`.
    pub fn open_with(
        storage: Arc<dyn SnapshotStorage>,
        config: &AppConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let notifications = NotificationStore::open(
            Box::new(JsonSnapshotRepository::new(
                storage.clone(),
                config.storage.notifications_key.clone(),
            )),
            &config.notifications,
            clock.clone(),
        );
        let reports = ReportHistoryStore::open(
            Box::new(JsonSnapshotRepository::new(
                storage,
                config.storage.report_history_key.clone(),
            )),
            &config.history,
            clock,
        );

        Self {
            notifications,
            reports,
        }
    }
}
