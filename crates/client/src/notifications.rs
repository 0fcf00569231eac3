use serde::Deserialize;

use crate::error::{check, ClientResult};
use crate::models::NotificationEntry;
use crate::BackendClient;

#[derive(Debug, Default, Deserialize)]
struct NotificationsWire {
    #[serde(default)]
    notifications: Vec<NotificationEntry>,
}

impl BackendClient {
    /// The backend's canonical notification set for the acting user.
    /// Cleared notifications are not returned.
    pub async fn fetch_notifications(&self, token: &str) -> ClientResult<Vec<NotificationEntry>> {
        let resp = self.get("/appointments/notifications", token).send().await?;
        let wire = check(resp, "Failed to fetch notifications")
            .await?
            .json::<NotificationsWire>()
            .await?;
        Ok(wire.notifications)
    }

    pub async fn clear_notification(&self, token: &str, id: &str) -> ClientResult<()> {
        let resp = self
            .post(&format!("/appointments/notifications/{id}/clear"), token)
            .send()
            .await?;
        check(resp, "Failed to clear notification").await?;
        Ok(())
    }
}
