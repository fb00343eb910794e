//! Report history store integration tests.

use techdengue_entity::report::{NewReport, ReportFormat, ReportStatus, ReportType};

use crate::helpers::TestApp;

fn titles(app: &TestApp) -> Vec<String> {
    app.stores
        .reports
        .history()
        .iter()
        .map(|r| r.title.clone())
        .collect()
}

#[test]
fn test_end_to_end_add_and_remove() {
    let mut app = TestApp::new();
    let reports = &mut app.stores.reports;

    reports.add(NewReport::new(ReportType::Municipal, ReportFormat::Pdf, "R1"));
    let r2 = reports.add(NewReport::new(ReportType::Municipal, ReportFormat::Pdf, "R2"));
    reports.add(NewReport::new(ReportType::Municipal, ReportFormat::Pdf, "R3"));

    assert_eq!(titles(&app), vec!["R3", "R2", "R1"]);
    assert!(
        app.stores
            .reports
            .history()
            .iter()
            .all(|r| r.status == ReportStatus::Done)
    );

    app.stores.reports.remove(r2.as_str());
    assert_eq!(titles(&app), vec!["R3", "R1"]);

    app.restart();
    assert_eq!(titles(&app), vec!["R3", "R1"]);
}

#[test]
fn test_capacity_never_exceeded() {
    let mut app = TestApp::with_config(|c| c.history.max_entries = 50);

    for i in 0..60 {
        app.stores.reports.add(NewReport::new(
            ReportType::Activities,
            ReportFormat::Excel,
            format!("report {i}"),
        ));
        assert!(app.stores.reports.len() <= 50);
    }

    let history = app.stores.reports.history();
    assert_eq!(history.len(), 50);
    assert_eq!(history[0].title, "report 59");
    assert_eq!(history[49].title, "report 10");
}

#[test]
fn test_ids_are_unique_and_prefixed() {
    let mut app = TestApp::new();
    let mut ids = std::collections::HashSet::new();

    for i in 0..30 {
        let id = app.stores.reports.add(NewReport::new(
            ReportType::Feedback,
            ReportFormat::Preview,
            format!("r{i}"),
        ));
        assert!(id.as_str().starts_with("rel-"));
        assert!(ids.insert(id));
    }
}

#[test]
fn test_failed_generation_is_recorded() {
    let mut app = TestApp::new();
    let id = app.stores.reports.add(
        NewReport::new(ReportType::Executive, ReportFormat::Pdf, "Q3")
            .with_status(ReportStatus::Processing),
    );

    app.stores.reports.mark_failed(id.as_str(), "Backend timeout");
    app.restart();

    let failed = app.stores.reports.get_by_status(ReportStatus::Error);
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].error.as_deref(), Some("Backend timeout"));
}
