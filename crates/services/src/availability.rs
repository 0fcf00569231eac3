use std::sync::Arc;

use mediboard_client::models::{AvailabilitySlot, DoctorDayStatus, NewAvailabilitySlot};
use mediboard_client::{BackendClient, ClientError, ClientResult};
use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use crate::feedback::FeedbackBoard;
use crate::session::Session;

#[derive(Debug, Error)]
pub enum AvailabilityError {
    /// Neither the form nor the session carried a doctor id; nothing sent.
    #[error("Doctor ID is required. Please ensure you are logged in properly.")]
    MissingDoctorId,
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Availability-slot management for the hospital's doctors.
pub struct AvailabilityService {
    client: Arc<BackendClient>,
    session: Session,
    feedback: Arc<FeedbackBoard>,
    slots: RwLock<Vec<AvailabilitySlot>>,
}

impl AvailabilityService {
    pub fn new(
        client: Arc<BackendClient>,
        session: Session,
        feedback: Arc<FeedbackBoard>,
    ) -> Self {
        Self {
            client,
            session,
            feedback,
            slots: RwLock::new(Vec::new()),
        }
    }

    pub async fn load(&self) -> ClientResult<()> {
        match self
            .client
            .fetch_availability_slots(&self.session.token, &self.session.user_id)
            .await
        {
            Ok(slots) => {
                *self.slots.write() = slots;
                Ok(())
            }
            Err(e) => {
                self.feedback.set_error(e.to_string());
                Err(e)
            }
        }
    }

    pub fn slots(&self) -> Vec<AvailabilitySlot> {
        self.slots.read().clone()
    }

    /// Create a slot. An empty doctor id in the form falls back to the
    /// session user id; with neither present the request is aborted
    /// client-side.
    pub async fn create(&self, mut slot: NewAvailabilitySlot) -> Result<(), AvailabilityError> {
        if slot.doctor_id.is_empty() {
            slot.doctor_id = self.session.user_id.clone();
        }
        if slot.doctor_id.is_empty() {
            let err = AvailabilityError::MissingDoctorId;
            self.feedback.set_error(err.to_string());
            return Err(err);
        }

        if let Err(e) = self
            .client
            .create_availability_slot(&self.session.token, &slot)
            .await
        {
            self.feedback.set_error(e.to_string());
            return Err(e.into());
        }

        info!(doctor = %slot.doctor_id, date = %slot.date, "Availability slot created");
        self.feedback
            .set_success("Availability slot created successfully!");
        self.load().await?;
        Ok(())
    }

    /// Flip one slot's active state and reload.
    pub async fn toggle(&self, id: &str, currently_available: bool) -> ClientResult<()> {
        if let Err(e) = self
            .client
            .toggle_availability_slot(&self.session.token, id)
            .await
        {
            self.feedback.set_error(e.to_string());
            return Err(e);
        }

        self.feedback.set_success(format!(
            "Availability {} successfully!",
            if currently_available {
                "disabled"
            } else {
                "enabled"
            }
        ));
        self.load().await
    }

    /// Day-level doctor status pushed from the dashboard status manager.
    pub async fn set_doctor_day_status(&self, status: &DoctorDayStatus) -> ClientResult<()> {
        if let Err(e) = self
            .client
            .set_doctor_day_status(&self.session.token, status)
            .await
        {
            self.feedback.set_error(e.to_string());
            return Err(e);
        }
        self.feedback
            .set_success("Availability updated successfully!");
        Ok(())
    }
}
