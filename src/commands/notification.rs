//! Notification CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::output::{self, OutputFormat};
use techdengue_core::config::AppConfig;
use techdengue_core::error::AppError;
use techdengue_entity::notification::{NotificationCategory, NotificationRecord};
use techdengue_notification::NotificationFormatter;
use techdengue_store::{NotificationStore, Stores};

/// Arguments for notification commands
#[derive(Debug, Args)]
pub struct NotificationArgs {
    /// Notification subcommand
    #[command(subcommand)]
    pub command: NotificationCommand,
}

/// Notification subcommands
#[derive(Debug, Subcommand)]
pub enum NotificationCommand {
    /// List notifications in display priority order
    List {
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Maximum number of entries (defaults to notifications.recent_limit)
        #[arg(short, long)]
        limit: Option<usize>,
        /// List every notification, ignoring the limit
        #[arg(short, long, conflicts_with = "limit")]
        all: bool,
    },
    /// Raise a dengue alert for a municipality
    Alert {
        /// Municipality name
        municipality: String,
        /// Number of breeding sites identified
        breeding_sites: u32,
    },
    /// Announce new field activity
    Activity {
        /// Who registered the activity
        actor: String,
        /// Number of activities
        count: u32,
        /// Activity type label, e.g. "inspections"
        label: String,
    },
    /// Remind about breeding sites awaiting feedback
    Feedback {
        /// Number of pending breeding sites
        count: u32,
        /// Municipality name
        #[arg(short, long)]
        municipality: Option<String>,
    },
    /// Announce a reached goal
    Goal {
        /// Goal name
        goal: String,
        /// Completion percentage
        percentage: f64,
    },
    /// Announce an available report
    Report {
        /// Report name
        name: String,
        /// Download URL
        #[arg(long)]
        url: Option<String>,
    },
    /// Post a system message
    System {
        /// Title
        title: String,
        /// Message
        message: String,
        /// Link
        #[arg(long)]
        link: Option<String>,
    },
    /// Mark a notification as read
    Read {
        /// Notification ID
        id: String,
    },
    /// Mark all notifications as read
    ReadAll,
    /// Delete a notification
    Remove {
        /// Notification ID
        id: String,
    },
    /// Delete all notifications
    Clear {
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Show the unread count
    Count,
}

/// Notification display row for table output
#[derive(Debug, Serialize, Tabled)]
struct NotificationRow {
    /// Notification ID
    id: String,
    /// Category
    category: String,
    /// Severity
    severity: String,
    /// Title
    title: String,
    /// Message
    message: String,
    /// Created at
    created_at: String,
    /// Read flag
    read: String,
}

impl From<&NotificationRecord> for NotificationRow {
    fn from(n: &NotificationRecord) -> Self {
        Self {
            id: n.id.to_string(),
            category: n.category.to_string(),
            severity: n.severity.to_string(),
            title: n.title.clone(),
            message: n.message.clone(),
            created_at: n.created_at.format("%Y-%m-%d %H:%M").to_string(),
            read: if n.read { "yes" } else { "no" }.to_string(),
        }
    }
}

/// Execute notification commands
pub fn execute(
    args: &NotificationArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let mut stores = super::open_stores(config)?;
    run(&args.command, &mut stores, format)
}

/// Run one notification command against already opened stores.
pub fn run(
    command: &NotificationCommand,
    stores: &mut Stores,
    format: OutputFormat,
) -> Result<(), AppError> {
    let store = &mut stores.notifications;

    let created = match command {
        NotificationCommand::List {
            unread,
            category,
            limit,
            all,
        } => {
            let limit = if *all {
                None
            } else {
                Some(limit.unwrap_or(store.recent_limit()))
            };
            let rows = list_rows(store, *unread, category.as_deref(), limit)?;
            output::print_list(&rows, format, "No notifications.");
            return Ok(());
        }
        NotificationCommand::Alert {
            municipality,
            breeding_sites,
        } => NotificationFormatter::dengue_alert(municipality, *breeding_sites),
        NotificationCommand::Activity {
            actor,
            count,
            label,
        } => NotificationFormatter::activity(actor, *count, label),
        NotificationCommand::Feedback {
            count,
            municipality,
        } => NotificationFormatter::pending_feedback(*count, municipality.as_deref()),
        NotificationCommand::Goal { goal, percentage } => {
            NotificationFormatter::goal_reached(goal, *percentage)
        }
        NotificationCommand::Report { name, url } => {
            NotificationFormatter::report_available(name, url.as_deref())
        }
        NotificationCommand::System {
            title,
            message,
            link,
        } => NotificationFormatter::system(title, message, link.as_deref()),
        NotificationCommand::Read { id } => {
            if !store.mark_as_read(id) {
                return Err(not_found(id));
            }
            output::print_success(&format!("Notification '{}' marked as read", id), format);
            return Ok(());
        }
        NotificationCommand::ReadAll => {
            let changed = store.mark_all_as_read();
            output::print_success(&format!("{} notification(s) marked as read", changed), format);
            return Ok(());
        }
        NotificationCommand::Remove { id } => {
            if !store.remove(id) {
                return Err(not_found(id));
            }
            output::print_success(&format!("Notification '{}' removed", id), format);
            return Ok(());
        }
        NotificationCommand::Clear { force } => {
            if store.is_empty() {
                output::print_warning("No notifications to clear", format);
                return Ok(());
            }
            let prompt = format!("Delete all {} notifications?", store.len());
            if !super::confirm(&prompt, *force, format)? {
                return Ok(());
            }
            store.clear_all();
            output::print_success("All notifications deleted", format);
            return Ok(());
        }
        NotificationCommand::Count => {
            match format {
                OutputFormat::Table => {
                    output::print_kv("Unread", &store.unread_count().to_string());
                    output::print_kv("Total", &store.len().to_string());
                }
                OutputFormat::Json => {
                    let counts = serde_json::json!({
                        "unread": store.unread_count(),
                        "total": store.len(),
                    });
                    output::print_item(&counts, format);
                }
            }
            return Ok(());
        }
    };

    let category = created.category;
    let id = store.add(created);
    info!(id = %id, category = %category, "Notification created");
    output::print_success(&format!("Notification '{}' added", id), format);
    Ok(())
}

/// Priority-ordered rows, filtered by read state and category, cut at
/// `limit` when one is given.
fn list_rows(
    store: &NotificationStore,
    unread: bool,
    category: Option<&str>,
    limit: Option<usize>,
) -> Result<Vec<NotificationRow>, AppError> {
    let category = category.map(str::parse::<NotificationCategory>).transpose()?;

    Ok(store
        .sorted()
        .iter()
        .filter(|n| !unread || n.is_unread())
        .filter(|n| category.is_none_or(|c| n.category == c))
        .take(limit.unwrap_or(usize::MAX))
        .map(NotificationRow::from)
        .collect())
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Notification '{}' not found", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use techdengue_core::error::ErrorKind;
    use techdengue_core::traits::SystemClock;

    fn stores() -> Stores {
        let mut config = AppConfig::default();
        config.notifications.recent_limit = 2;
        Stores::open_in_memory(&config, Arc::new(SystemClock))
    }

    fn system(title: &str) -> NotificationCommand {
        NotificationCommand::System {
            title: title.to_string(),
            message: "body".to_string(),
            link: None,
        }
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let mut stores = stores();
        run(&system("A"), &mut stores, OutputFormat::Json).unwrap();

        let read = NotificationCommand::Read {
            id: "notif-0-missing".to_string(),
        };
        let err = run(&read, &mut stores, OutputFormat::Json).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);

        let remove = NotificationCommand::Remove {
            id: "notif-0-missing".to_string(),
        };
        let err = run(&remove, &mut stores, OutputFormat::Json).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(stores.notifications.len(), 1);
    }

    #[test]
    fn test_read_and_remove_known_id() {
        let mut stores = stores();
        run(&system("A"), &mut stores, OutputFormat::Json).unwrap();
        let id = stores.notifications.notifications()[0].id.to_string();

        run(&NotificationCommand::Read { id: id.clone() }, &mut stores, OutputFormat::Json)
            .unwrap();
        assert_eq!(stores.notifications.unread_count(), 0);

        run(&NotificationCommand::Remove { id }, &mut stores, OutputFormat::Json).unwrap();
        assert!(stores.notifications.is_empty());
    }

    #[test]
    fn test_bad_category_is_validation_error() {
        let mut stores = stores();
        let list = NotificationCommand::List {
            unread: false,
            category: Some("urgent".to_string()),
            limit: None,
            all: false,
        };
        let err = run(&list, &mut stores, OutputFormat::Json).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn test_list_rows_filters_and_limits() {
        let mut stores = stores();
        for title in ["A", "B", "C"] {
            run(&system(title), &mut stores, OutputFormat::Json).unwrap();
        }
        let alert = NotificationCommand::Alert {
            municipality: "Campinas".to_string(),
            breeding_sites: 3,
        };
        run(&alert, &mut stores, OutputFormat::Json).unwrap();

        let store = &stores.notifications;
        let limit = Some(store.recent_limit());
        let rows = list_rows(store, false, None, limit).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category, "dengue_alert");

        let rows = list_rows(store, false, Some("system"), None).unwrap();
        assert_eq!(rows.len(), 3);

        let rows = list_rows(store, true, Some("dengue-alert"), None).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_forced_clear_skips_prompt() {
        let mut stores = stores();
        run(&system("A"), &mut stores, OutputFormat::Json).unwrap();

        run(&NotificationCommand::Clear { force: true }, &mut stores, OutputFormat::Json)
            .unwrap();
        assert!(stores.notifications.is_empty());

        run(&NotificationCommand::Clear { force: false }, &mut stores, OutputFormat::Json)
            .unwrap();
    }

    #[test]
    fn test_read_all_and_count() {
        let mut stores = stores();
        run(&system("A"), &mut stores, OutputFormat::Table).unwrap();
        run(&system("B"), &mut stores, OutputFormat::Table).unwrap();

        run(&NotificationCommand::ReadAll, &mut stores, OutputFormat::Table).unwrap();
        run(&NotificationCommand::Count, &mut stores, OutputFormat::Json).unwrap();
        assert_eq!(stores.notifications.unread_count(), 0);
    }
}
