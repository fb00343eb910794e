//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! `config/default.toml`, an optional explicit file, and environment
//! variables prefixed with `TECHDENGUE`. Every field has a default so an
//! empty configuration is valid.

pub mod history;
pub mod logging;
pub mod storage;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use self::history::{HistoryConfig, NotificationsConfig};
use self::logging::LoggingConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Snapshot storage settings.
    pub storage: StorageConfig,
    /// Notification store settings.
    pub notifications: NotificationsConfig,
    /// Report history store settings.
    pub history: HistoryConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration.
    ///
    /// Merges `config/default.toml` (if present), the explicit file at
    /// `path` (if given, must exist) and environment variables such as
    /// `TECHDENGUE__HISTORY__MAX_ENTRIES=20`.
    pub fn load(path: Option<&str>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(Path::new(path)).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("TECHDENGUE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        debug!(
            storage = %config.storage.directory,
            explicit_file = path.unwrap_or("-"),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.notifications.max_entries == 0 {
            return Err(AppError::configuration(
                "notifications.max_entries must be at least 1",
            ));
        }
        if self.history.max_entries == 0 {
            return Err(AppError::configuration(
                "history.max_entries must be at least 1",
            ));
        }
        if self.storage.notifications_key.trim().is_empty()
            || self.storage.report_history_key.trim().is_empty()
        {
            return Err(AppError::configuration("storage keys must not be empty"));
        }
        if self.storage.notifications_key == self.storage.report_history_key {
            return Err(AppError::configuration(
                "notification and report history stores must use distinct storage keys",
            ));
        }
        match self.logging.format.as_str() {
            "json" | "pretty" => Ok(()),
            other => Err(AppError::configuration(format!(
                "Invalid logging.format '{other}'. Expected one of: json, pretty"
            ))),
        }
    }
}
