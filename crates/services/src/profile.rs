use std::sync::Arc;

use mediboard_client::models::{HospitalProfile, NotificationKind};
use mediboard_client::BackendClient;
use tracing::warn;

use crate::notifications::NotificationCenter;
use crate::session::{SessionError, SessionManager};

/// Hospital staff profile: backend reads with a persisted local fallback,
/// and the complete-profile flow (update or skip).
pub struct ProfileService {
    client: Arc<BackendClient>,
    sessions: Arc<SessionManager>,
    notifications: Arc<NotificationCenter>,
}

impl ProfileService {
    pub fn new(
        client: Arc<BackendClient>,
        sessions: Arc<SessionManager>,
        notifications: Arc<NotificationCenter>,
    ) -> Self {
        Self {
            client,
            sessions,
            notifications,
        }
    }

    /// Fetch the profile; when the backend read fails, fall back to the
    /// locally persisted copy from the last successful update.
    pub async fn fetch(&self) -> Result<Option<HospitalProfile>, SessionError> {
        let session = self.sessions.session()?;
        match self.client.fetch_hospital_profile(&session.token).await {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                warn!(error = %e, "Profile fetch failed, using stored copy");
                Ok(self.sessions.store().load_profile())
            }
        }
    }

    /// Push profile changes; on success persist the local copy and mark
    /// the profile complete.
    pub async fn update(&self, profile: &HospitalProfile) -> Result<(), ProfileUpdateError> {
        let session = self.sessions.session()?;
        self.client
            .update_hospital_profile(&session.token, profile)
            .await?;
        self.sessions.store().save_profile(profile).map_err(SessionError::from)?;
        self.sessions.mark_profile_complete()?;
        Ok(())
    }

    /// Skip the complete-profile page: marks the profile complete and
    /// leaves a reminder notification.
    pub fn skip(&self) -> Result<(), SessionError> {
        self.notifications.add_local(
            "Complete Your Profile",
            "You have skipped filling your hospital profile. Please complete it later for better management.",
            NotificationKind::Warning,
            None,
        );
        self.sessions.mark_profile_complete()
    }

    /// Unauthenticated backend liveness probe for the complete-profile page.
    pub async fn backend_available(&self) -> bool {
        self.client.backend_health().await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProfileUpdateError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Client(#[from] mediboard_client::ClientError),
}
