//! Report history CLI commands.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::output::{self, OutputFormat};
use techdengue_core::config::AppConfig;
use techdengue_core::error::AppError;
use techdengue_entity::report::{
    NewReport, ReportFilters, ReportFormat, ReportHistoryRecord, ReportStatus, ReportType,
};
use techdengue_store::{ReportHistoryStore, Stores};

/// Arguments for report history commands
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Report history subcommand
    #[command(subcommand)]
    pub command: ReportCommand,
}

/// Report history subcommands
#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// List remembered reports, newest first
    List {
        /// Filter by report type
        #[arg(short = 't', long = "type")]
        report_type: Option<String>,
        /// Filter by status
        #[arg(short, long)]
        status: Option<String>,
        /// Maximum number of entries (defaults to history.recent_limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// List the whole history, ignoring the limit
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },
    /// Record a generated report
    Add {
        /// Report title
        title: String,
        /// Report type (municipal, activities, feedback, executive)
        #[arg(short = 't', long = "type", default_value = "municipal")]
        report_type: String,
        /// Output format (pdf, excel, preview)
        #[arg(long = "output", default_value = "pdf")]
        output_format: String,
        /// Initial status (done, error, processing)
        #[arg(short, long, default_value = "done")]
        status: String,
        /// Municipality filter
        #[arg(long)]
        municipality: Option<String>,
        /// Contract filter
        #[arg(long)]
        contract: Option<String>,
        /// Period start (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        /// Period end (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,
    },
    /// Mark a report as still being generated
    Processing {
        /// Report ID
        id: String,
    },
    /// Mark a report as generated
    Done {
        /// Report ID
        id: String,
        /// File size in bytes
        #[arg(long)]
        size: Option<u64>,
        /// Download URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Mark a report as failed
    Fail {
        /// Report ID
        id: String,
        /// Failure message
        message: String,
    },
    /// Delete a report from the history
    Remove {
        /// Report ID
        id: String,
    },
    /// Delete the whole history
    Clear {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Report display row for table output
#[derive(Debug, Serialize, Tabled)]
struct ReportRow {
    /// Report ID
    id: String,
    /// Type
    #[serde(rename = "type")]
    #[tabled(rename = "type")]
    report_type: String,
    /// Format
    format: String,
    /// Title
    title: String,
    /// Filters
    filters: String,
    /// Status
    status: String,
    /// Size
    size: String,
    /// Created at
    created_at: String,
}

impl From<&ReportHistoryRecord> for ReportRow {
    fn from(r: &ReportHistoryRecord) -> Self {
        let status = match (&r.status, &r.error) {
            (ReportStatus::Error, Some(error)) => format!("error: {}", error),
            (status, _) => status.to_string(),
        };

        Self {
            id: r.id.to_string(),
            report_type: r.report_type.to_string(),
            format: r.format.to_string(),
            title: r.title.clone(),
            filters: describe_filters(&r.filters),
            status,
            size: r.size.map(output::format_size).unwrap_or_else(|| "-".to_string()),
            created_at: r.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// One-line summary of the filters a report was generated with.
fn describe_filters(filters: &ReportFilters) -> String {
    if filters.is_empty() {
        return "-".to_string();
    }

    let mut parts = Vec::new();
    if let Some(municipality) = &filters.municipality {
        parts.push(format!("municipality={}", municipality));
    }
    if let Some(contract) = &filters.contract {
        parts.push(format!("contract={}", contract));
    }
    match (filters.start_date, filters.end_date) {
        (None, None) => {}
        (start, end) => {
            let bound = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
            parts.push(format!("{}..{}", bound(start), bound(end)));
        }
    }
    parts.join(", ")
}

/// Execute report history commands
pub fn execute(
    args: &ReportArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut stores = super::open_stores(config)?;
    run(&args.command, &mut stores, format)
}

/// Run one report history command against already opened stores.
pub fn run(
    command: &ReportCommand,
    stores: &mut Stores,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = &mut stores.reports;

    match command {
        ReportCommand::List {
            report_type,
            status,
            limit,
            all,
        } => {
            let limit = if *all {
                None
            } else {
                Some(limit.unwrap_or(store.recent_limit()))
            };
            let rows = list_rows(store, report_type.as_deref(), status.as_deref(), limit)?;
            output::print_list(&rows, format, "Report history is empty.");
        }
        ReportCommand::Add {
            title,
            report_type,
            output_format,
            status,
            municipality,
            contract,
            start_date,
            end_date,
        } => {
            let filters = ReportFilters {
                municipality: municipality.clone(),
                contract: contract.clone(),
                start_date: *start_date,
                end_date: *end_date,
            };
            let report = build_report(title, report_type, output_format, status, filters)?;

            let id = store.add(report);
            info!(id = %id, "Report recorded");
            output::print_success(&format!("Report '{}' recorded", id), format);
        }
        ReportCommand::Processing { id } => {
            if !store.mark_processing(id) {
                return Err(not_found(id));
            }
            output::print_success(&format!("Report '{}' marked as processing", id), format);
        }
        ReportCommand::Done { id, size, url } => {
            if !store.mark_done(id, *size, url.as_deref()) {
                return Err(not_found(id));
            }
            output::print_success(&format!("Report '{}' marked as done", id), format);
        }
        ReportCommand::Fail { id, message } => {
            if !store.mark_failed(id, message) {
                return Err(not_found(id));
            }
            output::print_success(&format!("Report '{}' marked as failed", id), format);
        }
        ReportCommand::Remove { id } => {
            if !store.remove(id) {
                return Err(not_found(id));
            }
            output::print_success(&format!("Report '{}' removed", id), format);
        }
        ReportCommand::Clear { force } => {
            if store.is_empty() {
                output::print_warning("Report history is already empty", format);
                return Ok(());
            }
            let prompt = format!("Delete all {} report history entries?", store.len());
            if !super::confirm(&prompt, *force, format)? {
                return Ok(());
            }
            store.clear_all();
            output::print_success("Report history cleared", format);
        }
    }

    Ok(())
}

/// Newest-first rows, filtered by type and status, cut at `limit` when one
/// is given.
fn list_rows(
    store: &ReportHistoryStore,
    report_type: Option<&str>,
    status: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<ReportRow>, AppError> {
    let report_type = report_type.map(str::parse::<ReportType>).transpose()?;
    let status = status.map(str::parse::<ReportStatus>).transpose()?;

    Ok(store
        .history()
        .iter()
        .filter(|r| report_type.is_none_or(|t| r.report_type == t))
        .filter(|r| status.is_none_or(|s| r.status == s))
        .take(limit.unwrap_or(usize::MAX))
        .map(ReportRow::from)
        .collect())
}

/// Validate `report add` input and build the record to store.
fn build_report(
    title: &str,
    report_type: &str,
    output_format: &str,
    status: &str,
    filters: ReportFilters,
) -> Result<NewReport, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::validation("Report title must not be empty"));
    }
    if let (Some(start), Some(end)) = (filters.start_date, filters.end_date) {
        if start > end {
            return Err(AppError::validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
    }

    Ok(NewReport::new(
        report_type.parse::<ReportType>()?,
        output_format.parse::<ReportFormat>()?,
        title,
    )
    .with_filters(filters)
    .with_status(status.parse::<ReportStatus>()?))
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Report '{}' not found", id))
}
