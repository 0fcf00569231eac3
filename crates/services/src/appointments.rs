use std::sync::Arc;

use futures::future::join_all;
use mediboard_client::models::{
    Appointment, AppointmentStatus, DoctorSnapshot, NotificationKind, PatientSnapshot,
};
use mediboard_client::{BackendClient, ClientError, ClientResult};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::{info, warn};

use crate::feedback::FeedbackBoard;
use crate::notifications::NotificationCenter;
use crate::session::Session;

/// An appointment together with the display snapshots fetched for it.
/// `None` snapshots mean the enrichment fetch failed; views render "N/A".
#[derive(Debug, Clone)]
pub struct EnrichedAppointment {
    pub appointment: Appointment,
    pub patient: Option<PatientSnapshot>,
    pub doctor: Option<DoctorSnapshot>,
}

/// The two transitions this component may request. `completed` is a
/// backend-only transition and is deliberately unrepresentable here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetStatus {
    Confirmed,
    Cancelled,
}

impl TargetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetStatus::Confirmed => "confirmed",
            TargetStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Error)]
pub enum TransitionError {
    /// Cancellation requires a non-empty reason; nothing was sent.
    #[error("A cancellation reason is required")]
    EmptyReason,
    #[error("Appointment {0} is not loaded")]
    NotLoaded(String),
    #[error("Cannot move a {from} appointment to {to}")]
    InvalidTransition {
        from: &'static str,
        to: &'static str,
    },
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Issues status-transition requests and owns the loaded appointment list.
///
/// The list is never mutated in place on a transition; it is reloaded
/// wholesale afterwards, so displayed status is always backend-confirmed.
pub struct AppointmentService {
    client: Arc<BackendClient>,
    session: Session,
    notifications: Arc<NotificationCenter>,
    feedback: Arc<FeedbackBoard>,
    list: RwLock<Vec<EnrichedAppointment>>,
    today: RwLock<Vec<Appointment>>,
}

impl AppointmentService {
    pub fn new(
        client: Arc<BackendClient>,
        session: Session,
        notifications: Arc<NotificationCenter>,
        feedback: Arc<FeedbackBoard>,
    ) -> Self {
        Self {
            client,
            session,
            notifications,
            feedback,
            list: RwLock::new(Vec::new()),
            today: RwLock::new(Vec::new()),
        }
    }

    /// Wholesale reload of the appointment list, with per-appointment
    /// patient/doctor enrichment run as an unordered parallel batch.
    /// A failed snapshot fetch degrades that appointment to placeholder
    /// display values; it never aborts the load.
    pub async fn load(&self) -> ClientResult<()> {
        let buckets = match self
            .client
            .fetch_hospital_appointments(&self.session.token)
            .await
        {
            Ok(buckets) => buckets,
            Err(e) => {
                self.feedback.set_error(e.to_string());
                return Err(e);
            }
        };

        let today = buckets.today.clone();
        let enriched = join_all(buckets.into_all().into_iter().map(|apt| self.enrich(apt))).await;

        *self.list.write() = enriched;
        *self.today.write() = today;

        let today_count = self.today.read().len();
        if today_count > 0 {
            self.notifications.add_local(
                "Today's Appointments",
                format!(
                    "You have {} appointment{} scheduled for today",
                    today_count,
                    if today_count == 1 { "" } else { "s" }
                ),
                NotificationKind::Info,
                None,
            );
        }
        Ok(())
    }

    async fn enrich(&self, appointment: Appointment) -> EnrichedAppointment {
        let (patient, doctor) = tokio::join!(
            self.client
                .fetch_patient(&self.session.token, &appointment.patient_id),
            self.client
                .fetch_doctor(&self.session.token, &appointment.doctor_id),
        );
        if let Err(e) = &patient {
            warn!(appointment = %appointment.id, error = %e, "Patient snapshot fetch failed");
        }
        if let Err(e) = &doctor {
            warn!(appointment = %appointment.id, error = %e, "Doctor snapshot fetch failed");
        }
        EnrichedAppointment {
            appointment,
            patient: patient.ok(),
            doctor: doctor.ok(),
        }
    }

    /// Request a status transition for a loaded appointment.
    ///
    /// Client-side guards (empty cancel reason, unknown id, terminal
    /// source state) abort before any request is sent. On success: banner,
    /// local notification, wholesale reload, then a notification refresh.
    pub async fn transition(
        &self,
        id: &str,
        target: TargetStatus,
        reason: Option<&str>,
    ) -> Result<(), TransitionError> {
        let reason = reason.map(str::trim).unwrap_or_default();
        if target == TargetStatus::Cancelled && reason.is_empty() {
            return Err(TransitionError::EmptyReason);
        }

        let current = self
            .list
            .read()
            .iter()
            .find(|e| e.appointment.id == id)
            .cloned()
            .ok_or_else(|| TransitionError::NotLoaded(id.to_string()))?;

        let from = current.appointment.status;
        let allowed = match target {
            TargetStatus::Confirmed => from == AppointmentStatus::Pending,
            TargetStatus::Cancelled => matches!(
                from,
                AppointmentStatus::Pending | AppointmentStatus::Confirmed
            ),
        };
        if !allowed {
            return Err(TransitionError::InvalidTransition {
                from: from.as_str(),
                to: target.as_str(),
            });
        }

        let result = match target {
            TargetStatus::Confirmed => {
                self.client.confirm_appointment(&self.session.token, id).await
            }
            TargetStatus::Cancelled => {
                self.client
                    .cancel_appointment(&self.session.token, id, reason)
                    .await
            }
        };
        if let Err(e) = result {
            self.feedback.set_error(e.to_string());
            return Err(e.into());
        }

        info!(appointment = id, status = target.as_str(), "Appointment transition committed");
        self.feedback
            .set_success(format!("Appointment {} successfully!", target.as_str()));

        let patient_name = current
            .patient
            .map(|p| p.name)
            .unwrap_or_else(|| current.appointment.patient_id.clone());
        self.notifications.add_local(
            format!("Appointment {}", target.as_str()),
            format!(
                "Patient {}'s appointment on {} at {} is now {}",
                patient_name,
                current.appointment.appointment_date,
                current.appointment.appointment_time,
                target.as_str()
            ),
            match target {
                TargetStatus::Confirmed => NotificationKind::Success,
                TargetStatus::Cancelled => NotificationKind::Warning,
            },
            Some(id.to_string()),
        );

        self.load().await?;
        self.notifications.refresh().await;
        Ok(())
    }

    pub fn appointments(&self) -> Vec<EnrichedAppointment> {
        self.list.read().clone()
    }

    /// Appointments visible for the selected date: exact date match,
    /// cancelled ones excluded. Pure; re-evaluated per call.
    pub fn appointments_for_date(&self, date: &str) -> Vec<EnrichedAppointment> {
        visible_on(&self.list.read(), date)
    }

    /// The dashboard's "recent" strip: the first few of today's bucket.
    pub fn recent_today(&self, limit: usize) -> Vec<Appointment> {
        self.today.read().iter().take(limit).cloned().collect()
    }
}

pub fn visible_on(list: &[EnrichedAppointment], date: &str) -> Vec<EnrichedAppointment> {
    list.iter()
        .filter(|e| {
            e.appointment.appointment_date == date
                && e.appointment.status != AppointmentStatus::Cancelled
        })
        .cloned()
        .collect()
}
