use tracing::debug;

use crate::error::{check, ClientResult};
use crate::models::AppointmentBuckets;
use crate::BackendClient;

impl BackendClient {
    /// Fetch the hospital's appointments, bucketed into today/upcoming/past.
    pub async fn fetch_hospital_appointments(
        &self,
        token: &str,
    ) -> ClientResult<AppointmentBuckets> {
        let resp = self
            .get("/appointments/hospital/appointments", token)
            .send()
            .await?;
        let buckets = check(resp, "Failed to fetch appointments")
            .await?
            .json::<AppointmentBuckets>()
            .await?;
        debug!(
            today = buckets.today.len(),
            upcoming = buckets.upcoming.len(),
            past = buckets.past.len(),
            "Fetched hospital appointments"
        );
        Ok(buckets)
    }

    /// `pending -> confirmed` transition. Empty request body.
    pub async fn confirm_appointment(&self, token: &str, id: &str) -> ClientResult<()> {
        let resp = self
            .post(&format!("/appointments/{id}/confirm"), token)
            .json(&serde_json::json!({}))
            .send()
            .await?;
        check(resp, "Failed to update appointment").await?;
        Ok(())
    }

    /// `pending|confirmed -> cancelled` transition. The reason is required
    /// by the backend contract; callers guard against empty input.
    pub async fn cancel_appointment(
        &self,
        token: &str,
        id: &str,
        reason: &str,
    ) -> ClientResult<()> {
        let resp = self
            .post(&format!("/appointments/{id}/cancel"), token)
            .json(&serde_json::json!({ "reason": reason }))
            .send()
            .await?;
        check(resp, "Failed to update appointment").await?;
        Ok(())
    }
}
