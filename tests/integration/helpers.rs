//! Shared test helpers for integration tests.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use techdengue_core::config::AppConfig;
use techdengue_core::traits::ManualClock;
use techdengue_store::Stores;

/// Test application context backed by a temporary storage directory
pub struct TestApp {
    /// Both stores
    pub stores: Stores,
    /// Application config pointing at `dir`
    pub config: AppConfig,
    /// Clock shared by both stores
    pub clock: Arc<ManualClock>,
    /// Keeps the storage directory alive for the test's duration
    pub dir: TempDir,
}

impl TestApp {
    /// Create a new test application with default capacities
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Create a new test application, letting the caller tweak the config
    pub fn with_config(tweak: impl FnOnce(&mut AppConfig)) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig::default();
        config.storage.directory = dir.path().display().to_string();
        tweak(&mut config);
        config.validate().expect("Invalid test config");

        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap(),
        ));
        let stores = Stores::open_local(&config, clock.clone()).expect("Failed to open stores");

        Self {
            stores,
            config,
            clock,
            dir,
        }
    }

    /// Simulate an application restart: reopen both stores from disk
    pub fn restart(&mut self) {
        self.stores =
            Stores::open_local(&self.config, self.clock.clone()).expect("Failed to reopen stores");
    }

    /// Raw snapshot document written under `key`, if any
    pub fn snapshot(&self, key: &str) -> Option<serde_json::Value> {
        let path = self.dir.path().join(format!("{key}.json"));
        let raw = std::fs::read_to_string(path).ok()?;
        Some(serde_json::from_str(&raw).expect("Snapshot is not valid JSON"))
    }
}
