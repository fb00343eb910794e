//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use techdengue_core::config::AppConfig;
use techdengue_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
    /// Validate the configuration
    Validate,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    config_path: Option<&str>,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
        }
        ConfigCommand::Validate => {
            if let Err(e) = config.validate() {
                output::print_error(&format!("Configuration invalid: {}", e));
                return Err(e);
            }

            let source = config_path.unwrap_or("config/default.toml");
            output::print_success(&format!("Configuration '{}' is valid", source), format);
            if format == OutputFormat::Json {
                return Ok(());
            }
            output::print_kv("Storage directory", &config.storage.directory);
            output::print_kv(
                "Notifications",
                &format!(
                    "{} (max {})",
                    config.storage.notifications_key, config.notifications.max_entries
                ),
            );
            output::print_kv(
                "Report history",
                &format!(
                    "{} (max {})",
                    config.storage.report_history_key, config.history.max_entries
                ),
            );
            output::print_kv(
                "Logging",
                &format!("{} ({})", config.logging.level, config.logging.format),
            );
        }
    }

    Ok(())
}
