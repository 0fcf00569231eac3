use std::sync::Arc;

use clap::Parser;
use mediboard_client::BackendClient;
use mediboard_config::Settings;
use mediboard_services::session::SessionError;
use mediboard_services::{
    AppointmentService, AvailabilityService, FeedbackBoard, InitialPage, LaunchParams,
    NotificationCenter, NotificationPoller, ProfileService, SessionManager, SessionStore,
};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Console shell for the hospital administration dashboard.
#[derive(Debug, Parser)]
#[command(name = "mediboard")]
struct Args {
    /// One-time launch query handed over by the authentication origin,
    /// e.g. "token=...&role=hospital&user_id=...&profile_complete=true".
    /// Without it, the previously persisted session is restored.
    #[arg(long, default_value = "")]
    launch_query: String,

    /// Date to list appointments for (defaults to today).
    #[arg(long)]
    date: Option<String>,

    /// Disable the background notification poller.
    #[arg(long)]
    no_poll: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file (silently ignore if missing)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "mediboard=info,mediboard_app=info,mediboard_services=debug,mediboard_client=debug"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let settings = Settings::load()?;
    info!(backend = %settings.backend.base_url, "Starting Mediboard shell");

    let sessions = Arc::new(SessionManager::new(
        SessionStore::default_location()?,
        &settings.auth,
    ));
    let launch = LaunchParams::from_query(&args.launch_query);
    let (session, page) = match sessions.bootstrap(&launch) {
        Ok(bootstrapped) => bootstrapped,
        Err(SessionError::RedirectToAuth(origin)) => {
            error!(%origin, "No valid hospital session; sign in at the authentication origin");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let client = Arc::new(BackendClient::new(&settings.backend)?);
    let feedback = Arc::new(FeedbackBoard::new(&settings.feedback));
    let notifications = Arc::new(NotificationCenter::new(Arc::clone(&client), session.clone()));
    let appointments = AppointmentService::new(
        Arc::clone(&client),
        session.clone(),
        Arc::clone(&notifications),
        Arc::clone(&feedback),
    );
    let availability =
        AvailabilityService::new(Arc::clone(&client), session.clone(), Arc::clone(&feedback));
    let profile = ProfileService::new(
        Arc::clone(&client),
        Arc::clone(&sessions),
        Arc::clone(&notifications),
    );

    if page == InitialPage::CompleteProfile {
        let backend_up = profile.backend_available().await;
        warn!(
            backend_up,
            "Hospital profile is incomplete; complete it for better management"
        );
    }

    // Initial authoritative pull, then the page data.
    notifications.refresh().await;
    if let Err(e) = appointments.load().await {
        warn!(error = %e, "Initial appointment load failed");
    }
    if let Err(e) = availability.load().await {
        warn!(error = %e, "Initial availability load failed");
    }

    let date = args
        .date
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let visible = appointments.appointments_for_date(&date);
    info!(%date, count = visible.len(), "Appointments for selected date");
    for entry in &visible {
        let patient = entry
            .patient
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| entry.appointment.patient_id.clone());
        info!(
            id = %entry.appointment.id,
            time = %entry.appointment.appointment_time,
            status = entry.appointment.status.as_str(),
            %patient,
            reason = %entry.appointment.reason,
            "appointment"
        );
    }
    info!(
        unread = notifications.unread_count(),
        recent_today = appointments.recent_today(4).len(),
        slots = availability.slots().len(),
        "Dashboard ready"
    );

    let poller = if args.no_poll {
        None
    } else {
        Some(NotificationPoller::start(
            Arc::clone(&notifications),
            &settings.notifications,
        ))
    };

    tokio::signal::ctrl_c().await?;
    if let Some(poller) = poller {
        poller.stop();
    }
    info!("Shutting down");
    Ok(())
}
