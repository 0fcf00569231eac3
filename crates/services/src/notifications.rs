use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use mediboard_client::models::{NotificationEntry, NotificationKind};
use mediboard_client::{BackendClient, ClientResult};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::session::Session;

/// Where a notification came from. Backend entries are replaced wholesale
/// on every authoritative refresh; local entries are ephemeral client
/// feedback and survive until cleared or superseded by a backend entry for
/// the same appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSource {
    Backend,
    Local,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub appointment_id: Option<String>,
    pub source: NotificationSource,
}

fn title_for(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "Appointment Confirmed",
        NotificationKind::Warning => "Appointment Cancelled",
        _ => "New Appointment",
    }
}

impl From<NotificationEntry> for Notification {
    fn from(entry: NotificationEntry) -> Self {
        Notification {
            title: title_for(entry.kind).to_string(),
            id: entry.id,
            message: entry.message,
            kind: entry.kind,
            read: entry.read,
            created_at: entry.created_at,
            appointment_id: entry.appointment_id,
            source: NotificationSource::Backend,
        }
    }
}

/// Maintains the single displayable notification list, merging local
/// ephemeral events with periodic authoritative pulls from the backend.
pub struct NotificationCenter {
    client: Arc<BackendClient>,
    session: Session,
    list: RwLock<Vec<Notification>>,
}

impl NotificationCenter {
    pub fn new(client: Arc<BackendClient>, session: Session) -> Self {
        Self {
            client,
            session,
            list: RwLock::new(Vec::new()),
        }
    }

    /// Snapshot of the current list, newest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.list.read().clone()
    }

    pub fn unread_count(&self) -> usize {
        self.list.read().iter().filter(|n| !n.read).count()
    }

    /// Insert a locally generated notification at the head of the list.
    /// No backend call; used for immediate feedback on local actions.
    pub fn add_local(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
        appointment_id: Option<String>,
    ) {
        let notification = Notification {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            message: message.into(),
            kind,
            read: false,
            created_at: Utc::now(),
            appointment_id,
            source: NotificationSource::Local,
        };
        self.list.write().insert(0, notification);
    }

    /// Mark one entry read. No-op when the id is unknown; read state is
    /// client-only and not synchronized upstream.
    pub fn mark_read(&self, id: &str) {
        let mut list = self.list.write();
        if let Some(entry) = list.iter_mut().find(|n| n.id == id) {
            entry.read = true;
        }
    }

    pub fn mark_all_read(&self) {
        for entry in self.list.write().iter_mut() {
            entry.read = true;
        }
    }

    /// Clear one notification. Backend entries are cleared upstream first
    /// and only removed locally on success; clearing an unknown id is a
    /// no-op. Failures keep the entry and propagate like any other write.
    pub async fn clear_one(&self, id: &str) -> ClientResult<()> {
        let target = self.list.read().iter().find(|n| n.id == id).map(|n| n.source);
        match target {
            None => Ok(()),
            Some(NotificationSource::Local) => {
                self.list.write().retain(|n| n.id != id);
                Ok(())
            }
            Some(NotificationSource::Backend) => {
                match self.client.clear_notification(&self.session.token, id).await {
                    Ok(()) => {
                        self.list.write().retain(|n| n.id != id);
                        Ok(())
                    }
                    Err(e) => {
                        warn!(id, error = %e, "Failed to clear notification");
                        Err(e)
                    }
                }
            }
        }
    }

    /// Clear everything, fire-and-continue: every backend entry gets a
    /// clearance request; entries that fail stay in the list and the first
    /// error is reported after the sweep.
    pub async fn clear_all(&self) -> ClientResult<()> {
        let backend_ids: Vec<String> = self
            .list
            .read()
            .iter()
            .filter(|n| n.source == NotificationSource::Backend)
            .map(|n| n.id.clone())
            .collect();

        let mut first_error = None;
        let mut failed: HashSet<String> = HashSet::new();
        for id in backend_ids {
            if let Err(e) = self.client.clear_notification(&self.session.token, &id).await {
                warn!(id, error = %e, "Failed to clear notification");
                failed.insert(id);
                first_error.get_or_insert(e);
            }
        }

        self.list.write().retain(|n| failed.contains(&n.id));
        match first_error {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// One authoritative pull: replace all backend-sourced entries with the
    /// backend's current set, keep local entries, and collapse to at most
    /// one entry per appointment (the backend entry wins).
    ///
    /// Read failures leave the list untouched; they are logged, not
    /// surfaced.
    pub async fn refresh(&self) {
        let entries = match self.client.fetch_notifications(&self.session.token).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(error = %e, "Failed to fetch notifications");
                return;
            }
        };
        let incoming: Vec<Notification> = entries.into_iter().map(Notification::from).collect();

        let mut list = self.list.write();
        *list = merge(&list, incoming);
        debug!(total = list.len(), "Notifications refreshed");
    }
}

/// Merge the backend's canonical set into the existing list. Local entries
/// come first (they are the client's newest), then the backend entries in
/// wire order; any appointment id appears at most once, with backend
/// entries taking precedence over local ones.
fn merge(existing: &[Notification], incoming: Vec<Notification>) -> Vec<Notification> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut backend = Vec::with_capacity(incoming.len());
    for entry in incoming {
        match &entry.appointment_id {
            Some(id) if !seen.insert(id.clone()) => continue,
            _ => backend.push(entry),
        }
    }

    let mut merged: Vec<Notification> = existing
        .iter()
        .filter(|n| n.source == NotificationSource::Local)
        .filter(|n| match &n.appointment_id {
            Some(id) => seen.insert(id.clone()),
            None => true,
        })
        .cloned()
        .collect();
    merged.extend(backend);
    merged
}
