//! Table and JSON output formatting for CLI commands.
//!
//! In JSON mode everything written to stdout is a JSON document, including
//! status messages, so the output can be piped into other tools.

use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Outcome attached to a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Warning,
}

impl Status {
    fn symbol(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Warning => "⚠",
        }
    }
}

/// Print a list of items in the selected format. `empty` is shown instead
/// of an empty table.
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat, empty: &str) {
    match format {
        OutputFormat::Table if items.is_empty() => println!("{}", empty),
        OutputFormat::Table => println!("{}", Table::new(items)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single item. Table mode pretty-prints it, JSON mode keeps it
/// on one line.
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    let json = match format {
        OutputFormat::Table => serde_json::to_string_pretty(item),
        OutputFormat::Json => serde_json::to_string(item),
    };
    println!("{}", json.unwrap_or_else(|_| "{}".to_string()));
}

/// Render a status message for the selected format.
pub fn status_line(status: Status, msg: &str, format: OutputFormat) -> String {
    match format {
        OutputFormat::Table => format!("{} {}", status.symbol(), msg),
        OutputFormat::Json => serde_json::json!({ "status": status, "message": msg }).to_string(),
    }
}

/// Print a success message
pub fn print_success(msg: &str, format: OutputFormat) {
    println!("{}", status_line(Status::Success, msg, format));
}

/// Print a warning message
pub fn print_warning(msg: &str, format: OutputFormat) {
    println!("{}", status_line(Status::Warning, msg, format));
}

/// Print an error message. Always goes to stderr.
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{}:", key), value);
}

/// Human-readable byte size, e.g. `1.5 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
