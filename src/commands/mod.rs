//! CLI command definitions and dispatch.

pub mod config;
pub mod notification;
pub mod report;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::{self, OutputFormat};
use techdengue_core::config::AppConfig;
use techdengue_core::error::AppError;
use techdengue_core::traits::SystemClock;
use techdengue_store::Stores;

/// TechDengue — notification and report history manager
#[derive(Debug, Parser)]
#[command(name = "techdengue", version, about, long_about = None)]
pub struct Cli {
    /// Path to an extra configuration file (merged over config/default.toml)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Notification management
    Notifications(notification::NotificationArgs),
    /// Report history management
    Reports(report::ReportArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Notifications(args) => notification::execute(args, config, self.format),
            Commands::Reports(args) => report::execute(args, config, self.format),
            Commands::Config(args) => {
                config::execute(args, config, self.config.as_deref(), self.format)
            }
        }
    }
}

/// Helper: open both stores over the configured storage directory
pub fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    Stores::open_local(config, Arc::new(SystemClock))
}

/// Helper: ask before a destructive command unless `force` is set.
///
/// Returns `false` when the user declines.
pub fn confirm(prompt: &str, force: bool, format: OutputFormat) -> Result<bool, AppError> {
    if force {
        return Ok(true);
    }

    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

    if !confirmed {
        output::print_warning("Cancelled.", format);
    }
    Ok(confirmed)
}
