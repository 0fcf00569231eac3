use std::sync::Arc;
use std::time::Duration;

use mediboard_config::NotificationSettings;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::notifications::NotificationCenter;

/// Interval-based notification refresh, tied to the shell's lifecycle:
/// the task stops when `stop()` is called or the handle is dropped, so no
/// timer outlives the page that started it.
pub struct NotificationPoller {
    handle: JoinHandle<()>,
}

impl NotificationPoller {
    pub fn start(center: Arc<NotificationCenter>, settings: &NotificationSettings) -> Self {
        Self::with_interval(center, Duration::from_secs(settings.poll_interval_secs))
    }

    pub fn with_interval(center: Arc<NotificationCenter>, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first tick fires immediately; the initial refresh is the
            // bootstrap's job.
            interval.tick().await;
            loop {
                interval.tick().await;
                debug!("Notification poll tick");
                center.refresh().await;
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for NotificationPoller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
