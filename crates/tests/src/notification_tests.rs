use mediboard_client::models::NotificationKind;
use mediboard_services::NotificationSource;

use crate::fixtures::Harness;

#[tokio::test]
async fn refresh_pulls_backend_notifications() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "success", Some("a1"));
    h.backend.seed_notification("n2", "info", None);

    h.notifications.refresh().await;

    let list = h.notifications.notifications();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|n| n.source == NotificationSource::Backend));
    let confirmed = list.iter().find(|n| n.id == "n1").unwrap();
    assert_eq!(confirmed.title, "Appointment Confirmed");
    assert_eq!(confirmed.kind, NotificationKind::Success);
    let info = list.iter().find(|n| n.id == "n2").unwrap();
    assert_eq!(info.title, "New Appointment");
}

#[tokio::test]
async fn refresh_failure_leaves_list_untouched() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "info", None);
    h.notifications.refresh().await;
    assert_eq!(h.notifications.notifications().len(), 1);

    h.backend.with_state(|s| s.fail_notifications = true);
    h.backend.seed_notification("n2", "info", None);
    h.notifications.refresh().await;

    let list = h.notifications.notifications();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "n1");
}

#[tokio::test]
async fn refresh_dedups_by_appointment_id() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "success", Some("a1"));
    h.backend.seed_notification("n2", "warning", Some("a1"));
    h.backend.seed_notification("n3", "info", Some("a2"));

    h.notifications.refresh().await;

    let list = h.notifications.notifications();
    assert_eq!(list.len(), 2);
    let a1: Vec<_> = list
        .iter()
        .filter(|n| n.appointment_id.as_deref() == Some("a1"))
        .collect();
    assert_eq!(a1.len(), 1);
    assert_eq!(a1[0].id, "n1");
}

#[tokio::test]
async fn local_notifications_survive_refresh() {
    let h = Harness::spawn().await;
    h.notifications.add_local(
        "Today's Appointments",
        "You have 2 appointments scheduled for today",
        NotificationKind::Info,
        None,
    );
    h.backend.seed_notification("n1", "info", Some("a1"));

    h.notifications.refresh().await;

    let list = h.notifications.notifications();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].source, NotificationSource::Local);
    assert_eq!(list[0].title, "Today's Appointments");
    assert_eq!(list[1].id, "n1");
}

#[tokio::test]
async fn backend_entry_replaces_local_for_same_appointment() {
    let h = Harness::spawn().await;
    h.notifications.add_local(
        "Appointment confirmed",
        "Patient Ada's appointment is now confirmed",
        NotificationKind::Success,
        Some("a1".to_string()),
    );
    h.backend.seed_notification("srv-1", "success", Some("a1"));

    h.notifications.refresh().await;

    let list = h.notifications.notifications();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "srv-1");
    assert_eq!(list[0].source, NotificationSource::Backend);
}

#[tokio::test]
async fn read_state_is_local_only() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "info", None);
    h.backend.seed_notification("n2", "info", None);
    h.notifications.refresh().await;
    assert_eq!(h.notifications.unread_count(), 2);

    let id = h.notifications.notifications()[0].id.clone();
    h.notifications.mark_read(&id);
    assert_eq!(h.notifications.unread_count(), 1);

    h.notifications.mark_all_read();
    assert_eq!(h.notifications.unread_count(), 0);

    // Unknown id is a no-op.
    h.notifications.mark_read("ghost");
    assert_eq!(h.notifications.unread_count(), 0);
}

#[tokio::test]
async fn clear_one_removes_upstream_and_locally() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "info", Some("a1"));
    h.notifications.refresh().await;

    h.notifications.clear_one("n1").await.unwrap();

    assert!(h.notifications.notifications().is_empty());
    assert_eq!(h.backend.with_state(|s| s.clear_calls.clone()), vec!["n1"]);

    // Clearing again is a no-op: no request, no error.
    h.notifications.clear_one("n1").await.unwrap();
    assert_eq!(h.backend.with_state(|s| s.clear_calls.len()), 1);
}

#[tokio::test]
async fn clear_failure_keeps_the_entry() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "info", Some("a1"));
    h.notifications.refresh().await;
    h.backend.with_state(|s| {
        s.fail_clear.insert("n1".to_string());
    });

    let result = h.notifications.clear_one("n1").await;

    assert!(result.is_err());
    assert_eq!(h.notifications.notifications().len(), 1);
}

#[tokio::test]
async fn clear_all_continues_past_failures() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "info", Some("a1"));
    h.backend.seed_notification("n2", "info", Some("a2"));
    h.backend.seed_notification("n3", "info", Some("a3"));
    h.notifications.refresh().await;
    h.backend.with_state(|s| {
        s.fail_clear.insert("n2".to_string());
    });

    let result = h.notifications.clear_all().await;

    assert!(result.is_err());
    let remaining = h.notifications.notifications();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "n2");
    // n1 and n3 were cleared upstream despite n2 failing in between.
    let cleared = h.backend.with_state(|s| s.clear_calls.clone());
    assert_eq!(cleared, vec!["n1", "n3"]);
}

#[tokio::test]
async fn clear_all_removes_local_entries_without_requests() {
    let h = Harness::spawn().await;
    h.notifications
        .add_local("Today's Appointments", "3 today", NotificationKind::Info, None);

    h.notifications.clear_all().await.unwrap();

    assert!(h.notifications.notifications().is_empty());
    assert!(h.backend.with_state(|s| s.clear_calls.is_empty()));
}
