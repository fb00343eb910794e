//! On-disk snapshot integration tests.

use techdengue_entity::report::{NewReport, ReportFormat, ReportType};
use techdengue_notification::NotificationFormatter;

use crate::helpers::TestApp;

#[test]
fn test_snapshot_layout() {
    let mut app = TestApp::new();
    app.stores
        .notifications
        .add(NotificationFormatter::dengue_alert("Campinas", 2));
    app.stores
        .reports
        .add(NewReport::new(ReportType::Municipal, ReportFormat::Pdf, "R1"));

    let notifications = app
        .snapshot("notifications-storage")
        .expect("notification snapshot missing");
    assert_eq!(notifications["version"], 1);
    let first = &notifications["collection"][0];
    assert_eq!(first["category"], "dengue_alert");
    assert_eq!(first["actionLabel"], "View on Map");
    assert!(first["createdAt"].is_string());

    let reports = app
        .snapshot("report-history-storage")
        .expect("report snapshot missing");
    assert_eq!(reports["collection"][0]["type"], "municipal");
    assert_eq!(reports["collection"][0]["status"], "done");
}

#[test]
fn test_round_trip_is_lossless() {
    let mut app = TestApp::new();
    app.stores
        .notifications
        .add(NotificationFormatter::goal_reached("Larvicide", 99.5));
    app.stores.reports.add(
        NewReport::new(ReportType::Executive, ReportFormat::Excel, "Q1"),
    );
    let notifications = app.stores.notifications.notifications().to_vec();
    let history = app.stores.reports.history().to_vec();

    app.restart();

    assert_eq!(app.stores.notifications.notifications(), notifications.as_slice());
    assert_eq!(app.stores.reports.history(), history.as_slice());
}

#[test]
fn test_corrupt_snapshot_starts_empty() {
    let mut app = TestApp::new();
    app.stores
        .reports
        .add(NewReport::new(ReportType::Municipal, ReportFormat::Pdf, "R1"));

    std::fs::write(
        app.dir.path().join("report-history-storage.json"),
        "{\"version\": 1, \"collection\": [{\"id\": 42}]}",
    )
    .unwrap();
    app.restart();

    assert!(app.stores.reports.is_empty());
    app.stores
        .reports
        .add(NewReport::new(ReportType::Municipal, ReportFormat::Pdf, "R2"));
    assert_eq!(app.stores.reports.len(), 1);
}

#[test]
fn test_smaller_capacity_truncates_on_load() {
    let mut app = TestApp::new();
    for i in 1..=5 {
        app.stores.reports.add(NewReport::new(
            ReportType::Activities,
            ReportFormat::Pdf,
            format!("R{i}"),
        ));
    }

    app.config.history.max_entries = 2;
    app.restart();

    let titles: Vec<&str> = app
        .stores
        .reports
        .history()
        .iter()
        .map(|r| r.title.as_str())
        .collect();
    assert_eq!(titles, vec!["R5", "R4"]);
}
