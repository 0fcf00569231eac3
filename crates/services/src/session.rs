use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use mediboard_client::models::HospitalProfile;
use mediboard_config::AuthSettings;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum SessionError {
    /// No usable session; the caller should send the user to the external
    /// authentication origin.
    #[error("No active session; redirect to {0}")]
    RedirectToAuth(String),
    #[error("Session store error: {0}")]
    Store(#[from] io::Error),
}

/// The one-time launch query handed over by the authentication origin,
/// e.g. `token=abc&role=hospital&user_id=42&profile_complete=true&is_login=true`.
#[derive(Debug, Clone, Default)]
pub struct LaunchParams {
    pub token: Option<String>,
    pub role: Option<String>,
    pub user_id: Option<String>,
    pub profile_complete: Option<bool>,
    pub is_login: bool,
}

impl LaunchParams {
    pub fn from_query(query: &str) -> Self {
        let mut params = LaunchParams::default();
        for pair in query.trim_start_matches('?').split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let value = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            match key {
                "token" => params.token = Some(value),
                "role" => params.role = Some(value),
                "user_id" => params.user_id = Some(value),
                "profile_complete" => params.profile_complete = Some(value == "true"),
                "is_login" => params.is_login = value == "true",
                _ => {}
            }
        }
        params
    }
}

/// The acting session. Created at bootstrap, cleared at sign-out, and
/// otherwise only touched when profile completion flips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub role: String,
    pub user_id: String,
    pub profile_complete: bool,
}

/// Which page the shell should open with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialPage {
    Dashboard,
    CompleteProfile,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedState {
    session: Option<Session>,
    /// Local copy of the hospital profile, used as a read fallback when
    /// the backend profile fetch fails.
    profile: Option<HospitalProfile>,
}

/// JSON-file-backed persistence for the session and the local profile copy.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store file under the given directory. Used directly by tests.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join("session.json"),
        }
    }

    /// Store file under the platform data directory.
    pub fn default_location() -> Result<Self, SessionError> {
        let dirs = ProjectDirs::from("", "", "mediboard")
            .ok_or_else(|| io::Error::other("no home directory available"))?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Ok(Self::at(dirs.data_dir()))
    }

    fn read(&self) -> PersistedState {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_default(),
            Err(_) => PersistedState::default(),
        }
    }

    fn write(&self, state: &PersistedState) -> Result<(), io::Error> {
        let raw = serde_json::to_string_pretty(state).map_err(io::Error::other)?;
        std::fs::write(&self.path, raw)
    }

    pub fn load_session(&self) -> Option<Session> {
        self.read().session
    }

    pub fn save_session(&self, session: &Session) -> Result<(), io::Error> {
        let mut state = self.read();
        state.session = Some(session.clone());
        self.write(&state)
    }

    pub fn load_profile(&self) -> Option<HospitalProfile> {
        self.read().profile
    }

    pub fn save_profile(&self, profile: &HospitalProfile) -> Result<(), io::Error> {
        let mut state = self.read();
        state.profile = Some(profile.clone());
        self.write(&state)
    }

    /// Remove everything; used by sign-out.
    pub fn clear(&self) -> Result<(), io::Error> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// Owns the in-memory session and its persisted mirror.
pub struct SessionManager {
    store: SessionStore,
    auth_origin: String,
    required_role: String,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    pub fn new(store: SessionStore, settings: &AuthSettings) -> Self {
        Self {
            store,
            auth_origin: settings.origin.clone(),
            required_role: settings.required_role.clone(),
            current: RwLock::new(None),
        }
    }

    /// Seed the session from the launch query, falling back to the
    /// persisted store, and decide the initial page.
    ///
    /// A launch query with a token always wins and is persisted for the
    /// next start. Without one, a persisted session with the required role
    /// is restored; anything else redirects to the auth origin.
    pub fn bootstrap(
        &self,
        launch: &LaunchParams,
    ) -> Result<(Session, InitialPage), SessionError> {
        if let Some(token) = &launch.token {
            let session = Session {
                token: token.clone(),
                role: launch
                    .role
                    .clone()
                    .unwrap_or_else(|| self.required_role.clone()),
                user_id: launch.user_id.clone().unwrap_or_default(),
                profile_complete: launch.profile_complete.unwrap_or(false),
            };
            self.store.save_session(&session)?;
            *self.current.write() = Some(session.clone());

            let page = if !session.profile_complete && !launch.is_login {
                InitialPage::CompleteProfile
            } else {
                InitialPage::Dashboard
            };
            info!(role = %session.role, ?page, "Session seeded from launch query");
            return Ok((session, page));
        }

        let Some(session) = self.store.load_session() else {
            debug!("No persisted session found");
            return Err(SessionError::RedirectToAuth(self.auth_origin.clone()));
        };
        if session.role != self.required_role {
            return Err(SessionError::RedirectToAuth(self.auth_origin.clone()));
        }

        let page = if session.profile_complete {
            InitialPage::Dashboard
        } else {
            InitialPage::CompleteProfile
        };
        *self.current.write() = Some(session.clone());
        info!(role = %session.role, ?page, "Session restored from store");
        Ok((session, page))
    }

    pub fn session(&self) -> Result<Session, SessionError> {
        self.current
            .read()
            .clone()
            .ok_or_else(|| SessionError::RedirectToAuth(self.auth_origin.clone()))
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Flip `profile_complete`, in memory and in the store.
    pub fn mark_profile_complete(&self) -> Result<(), SessionError> {
        let mut guard = self.current.write();
        if let Some(session) = guard.as_mut() {
            session.profile_complete = true;
            self.store.save_session(session)?;
        }
        Ok(())
    }

    pub fn sign_out(&self) -> Result<(), SessionError> {
        *self.current.write() = None;
        self.store.clear()?;
        info!("Signed out; session cleared");
        Ok(())
    }
}
