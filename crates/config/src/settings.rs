use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub backend: BackendSettings,
    pub auth: AuthSettings,
    pub notifications: NotificationSettings,
    pub feedback: FeedbackSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the hospital backend API, including the `/api` prefix.
    pub base_url: String,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthSettings {
    /// External authentication origin users are sent to when no valid
    /// session exists.
    pub origin: String,
    /// Role the backend expects for hospital-admin sessions.
    pub required_role: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationSettings {
    pub poll_interval_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FeedbackSettings {
    /// How long success banners stay visible before auto-dismissing.
    pub banner_ttl_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::default()
                    .separator("__")
                    .prefix("MEDIBOARD"),
            )
            .set_default("backend.base_url", "http://localhost:5000/api")?
            .set_default("backend.request_timeout_secs", 30)?
            .set_default("auth.origin", "http://localhost:5173")?
            .set_default("auth.required_role", "hospital")?
            .set_default("notifications.poll_interval_secs", 30)?
            .set_default("feedback.banner_ttl_secs", 3)?
            .build()?;

        config.try_deserialize()
    }
}