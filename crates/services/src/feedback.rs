use std::sync::Arc;
use std::time::Duration;

use mediboard_config::FeedbackSettings;
use parking_lot::{Mutex, RwLock};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

/// A dismissible message banner, the page-level feedback surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

/// Single-slot banner board. Success banners auto-dismiss after the
/// configured TTL; error banners stay until replaced or dismissed.
pub struct FeedbackBoard {
    slot: Arc<RwLock<Option<Banner>>>,
    ttl: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl FeedbackBoard {
    pub fn new(settings: &FeedbackSettings) -> Self {
        Self {
            slot: Arc::new(RwLock::new(None)),
            ttl: Duration::from_secs(settings.banner_ttl_secs),
            timer: Mutex::new(None),
        }
    }

    pub fn current(&self) -> Option<Banner> {
        self.slot.read().clone()
    }

    pub fn set_success(&self, text: impl Into<String>) {
        *self.slot.write() = Some(Banner {
            kind: BannerKind::Success,
            text: text.into(),
        });

        // One dismiss timer at a time; a new banner restarts the clock.
        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            *slot.write() = None;
        });
        if let Some(old) = self.timer.lock().replace(handle) {
            old.abort();
        }
    }

    pub fn set_error(&self, text: impl Into<String>) {
        if let Some(old) = self.timer.lock().take() {
            old.abort();
        }
        *self.slot.write() = Some(Banner {
            kind: BannerKind::Error,
            text: text.into(),
        });
    }

    pub fn dismiss(&self) {
        if let Some(old) = self.timer.lock().take() {
            old.abort();
        }
        *self.slot.write() = None;
    }
}

impl Drop for FeedbackBoard {
    fn drop(&mut self) {
        if let Some(old) = self.timer.lock().take() {
            old.abort();
        }
    }
}
