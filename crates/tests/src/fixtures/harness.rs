use std::sync::Arc;

use mediboard_client::BackendClient;
use mediboard_config::{AuthSettings, FeedbackSettings};
use mediboard_services::{
    AppointmentService, AvailabilityService, FeedbackBoard, LaunchParams, NotificationCenter,
    ProfileService, Session, SessionManager, SessionStore,
};

use super::test_backend::{TestBackend, TEST_TOKEN};

/// The full service stack wired against a fresh stub backend, with an
/// isolated on-disk session store.
pub struct Harness {
    pub backend: TestBackend,
    pub client: Arc<BackendClient>,
    pub sessions: Arc<SessionManager>,
    pub session: Session,
    pub feedback: Arc<FeedbackBoard>,
    pub notifications: Arc<NotificationCenter>,
    pub appointments: AppointmentService,
    pub availability: AvailabilityService,
    pub profile: ProfileService,
    _store_dir: tempfile::TempDir,
}

impl Harness {
    pub async fn spawn() -> Self {
        Self::spawn_with_user("hosp-1").await
    }

    pub async fn spawn_with_user(user_id: &str) -> Self {
        let backend = TestBackend::spawn().await;

        let store_dir = tempfile::tempdir().expect("Failed to create temp store dir");
        let sessions = Arc::new(SessionManager::new(
            SessionStore::at(store_dir.path()),
            &AuthSettings {
                origin: "http://localhost:5173".to_string(),
                required_role: "hospital".to_string(),
            },
        ));
        let query = format!(
            "token={TEST_TOKEN}&role=hospital&user_id={user_id}&profile_complete=false&is_login=true"
        );
        let (session, _) = sessions
            .bootstrap(&LaunchParams::from_query(&query))
            .expect("Bootstrap failed");

        let client = Arc::new(
            BackendClient::new(&backend.backend_settings()).expect("Failed to build client"),
        );
        let feedback = Arc::new(FeedbackBoard::new(&FeedbackSettings { banner_ttl_secs: 3 }));
        let notifications = Arc::new(NotificationCenter::new(
            Arc::clone(&client),
            session.clone(),
        ));
        let appointments = AppointmentService::new(
            Arc::clone(&client),
            session.clone(),
            Arc::clone(&notifications),
            Arc::clone(&feedback),
        );
        let availability = AvailabilityService::new(
            Arc::clone(&client),
            session.clone(),
            Arc::clone(&feedback),
        );
        let profile = ProfileService::new(
            Arc::clone(&client),
            Arc::clone(&sessions),
            Arc::clone(&notifications),
        );

        Self {
            backend,
            client,
            sessions,
            session,
            feedback,
            notifications,
            appointments,
            availability,
            profile,
            _store_dir: store_dir,
        }
    }
}
