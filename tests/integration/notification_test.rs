//! Notification store integration tests.

use chrono::Duration;

use techdengue_entity::notification::{NotificationCategory, NotificationSeverity};
use techdengue_notification::NotificationFormatter;

use crate::helpers::TestApp;

#[test]
fn test_bell_menu_flow() {
    let mut app = TestApp::new();
    let store = &mut app.stores.notifications;

    store.add(NotificationFormatter::system("Maintenance", "Tonight at 22h", None));
    app.clock.advance(Duration::minutes(5));
    let alert = app
        .stores
        .notifications
        .add(NotificationFormatter::dengue_alert("Campinas", 7));
    app.clock.advance(Duration::minutes(5));
    let activity = app
        .stores
        .notifications
        .add(NotificationFormatter::activity("Ana", 3, "inspections"));

    let store = &mut app.stores.notifications;
    assert_eq!(store.unread_count(), 3);

    let items = store.display_items();
    assert_eq!(items[0].id, alert);
    assert_eq!(items[0].kind, NotificationSeverity::Error);
    assert_eq!(items[1].id, activity);

    store.mark_as_read(alert.as_str());
    let items = store.display_items();
    assert_eq!(items.last().map(|i| &i.id), Some(&alert));

    assert_eq!(store.mark_all_as_read(), 2);
    assert_eq!(store.unread_count(), 0);

    app.restart();
    assert_eq!(app.stores.notifications.len(), 3);
    assert_eq!(app.stores.notifications.unread_count(), 0);
}

#[test]
fn test_capacity_evicts_oldest_notification() {
    let mut app = TestApp::with_config(|c| c.notifications.max_entries = 3);

    let first = app
        .stores
        .notifications
        .add(NotificationFormatter::goal_reached("Visits", 50.0));
    for pct in [60.0, 70.0, 80.0] {
        app.stores
            .notifications
            .add(NotificationFormatter::goal_reached("Visits", pct));
    }

    let store = &app.stores.notifications;
    assert_eq!(store.len(), 3);
    assert!(store.find(first.as_str()).is_none());
    assert!(store.notifications()[0].message.contains("80%"));
}

#[test]
fn test_filters_and_recent() {
    let mut app = TestApp::with_config(|c| c.notifications.recent_limit = 2);
    let store = &mut app.stores.notifications;

    store.add(NotificationFormatter::pending_feedback(4, Some("Sorocaba")));
    store.add(NotificationFormatter::report_available("Weekly", Some("/files/weekly.pdf")));
    store.add(NotificationFormatter::pending_feedback(1, None));

    let pending = store.get_by_category(NotificationCategory::PendingFeedback);
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].message, "1 breeding site awaiting feedback.");

    assert_eq!(store.recent().len(), 2);
    assert_eq!(store.get_recent(10).len(), 3);
    assert!(store.get_recent(0).is_empty());
}

#[test]
fn test_remove_and_clear_are_persisted() {
    let mut app = TestApp::new();
    let id = app
        .stores
        .notifications
        .add(NotificationFormatter::system("A", "a", None));
    app.stores
        .notifications
        .add(NotificationFormatter::system("B", "b", None));

    app.stores.notifications.remove(id.as_str());
    app.stores.notifications.remove("notif-0-unknown");
    app.restart();
    assert_eq!(app.stores.notifications.len(), 1);

    app.stores.notifications.clear_all();
    app.stores.notifications.clear_all();
    app.restart();
    assert!(app.stores.notifications.is_empty());
}
