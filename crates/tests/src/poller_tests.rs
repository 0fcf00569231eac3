use std::sync::Arc;
use std::time::Duration;

use mediboard_services::NotificationPoller;

use crate::fixtures::Harness;

#[tokio::test]
async fn poller_picks_up_new_notifications() {
    let h = Harness::spawn().await;
    h.backend.seed_notification("n1", "info", None);

    let poller = NotificationPoller::with_interval(
        Arc::clone(&h.notifications),
        Duration::from_millis(50),
    );
    assert!(poller.is_running());

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(h.notifications.notifications().len(), 1);
    poller.stop();
}

#[tokio::test]
async fn stopped_poller_refreshes_no_more() {
    let h = Harness::spawn().await;
    let poller = NotificationPoller::with_interval(
        Arc::clone(&h.notifications),
        Duration::from_millis(50),
    );
    tokio::time::sleep(Duration::from_millis(120)).await;
    poller.stop();

    h.backend.seed_notification("late", "info", None);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(h.notifications.notifications().is_empty());
}

#[tokio::test]
async fn dropping_the_poller_aborts_the_task() {
    let h = Harness::spawn().await;
    {
        let _poller = NotificationPoller::with_interval(
            Arc::clone(&h.notifications),
            Duration::from_millis(50),
        );
    }

    h.backend.seed_notification("late", "info", None);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(h.notifications.notifications().is_empty());
}
