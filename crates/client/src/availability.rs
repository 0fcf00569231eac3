use serde::Deserialize;

use crate::error::{check, ClientResult};
use crate::models::{AvailabilitySlot, DoctorDayStatus, NewAvailabilitySlot};
use crate::BackendClient;

#[derive(Debug, Default, Deserialize)]
struct AvailabilitiesWire {
    #[serde(default)]
    availabilities: Vec<AvailabilitySlot>,
}

impl BackendClient {
    pub async fn fetch_availability_slots(
        &self,
        token: &str,
        hospital_id: &str,
    ) -> ClientResult<Vec<AvailabilitySlot>> {
        let resp = self
            .get(&format!("/availability/hospital/{hospital_id}/slots"), token)
            .send()
            .await?;
        let wire = check(resp, "Failed to fetch availability slots")
            .await?
            .json::<AvailabilitiesWire>()
            .await?;
        Ok(wire.availabilities)
    }

    pub async fn create_availability_slot(
        &self,
        token: &str,
        slot: &NewAvailabilitySlot,
    ) -> ClientResult<()> {
        let resp = self
            .post("/availability/create", token)
            .json(slot)
            .send()
            .await?;
        check(resp, "Failed to create availability slot").await?;
        Ok(())
    }

    /// Flip a slot between active and inactive.
    pub async fn toggle_availability_slot(&self, token: &str, id: &str) -> ClientResult<()> {
        let resp = self
            .put(&format!("/availability/{id}/toggle"), token)
            .send()
            .await?;
        check(resp, "Failed to update availability status").await?;
        Ok(())
    }

    /// Day-level status update from the dashboard status manager.
    pub async fn set_doctor_day_status(
        &self,
        token: &str,
        status: &DoctorDayStatus,
    ) -> ClientResult<()> {
        let resp = self
            .put("/appointments/doctors/availability", token)
            .json(status)
            .send()
            .await?;
        check(resp, "Failed to update availability").await?;
        Ok(())
    }
}
