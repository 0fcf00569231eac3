use serde::Deserialize;

use crate::error::{check, ClientResult};
use crate::models::{DoctorSnapshot, PatientSnapshot};
use crate::BackendClient;

#[derive(Debug, Deserialize)]
struct PatientWire {
    id: String,
    full_name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    blood_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DoctorWire {
    id: String,
    full_name: Option<String>,
    department: Option<String>,
    email: Option<String>,
}

impl BackendClient {
    /// Denormalized patient snapshot for display. Missing fields fall back
    /// to placeholder values rather than failing the whole fetch.
    pub async fn fetch_patient(&self, token: &str, id: &str) -> ClientResult<PatientSnapshot> {
        let resp = self.get(&format!("/auth/patient/{id}"), token).send().await?;
        let wire = check(resp, "Failed to fetch patient data")
            .await?
            .json::<PatientWire>()
            .await?;
        Ok(PatientSnapshot {
            id: wire.id,
            name: wire.full_name.unwrap_or_else(|| "Unknown Patient".to_string()),
            email: wire.email.unwrap_or_else(|| "N/A".to_string()),
            phone: wire.phone.unwrap_or_else(|| "N/A".to_string()),
            blood_type: wire.blood_type.unwrap_or_else(|| "N/A".to_string()),
        })
    }

    pub async fn fetch_doctor(&self, token: &str, id: &str) -> ClientResult<DoctorSnapshot> {
        let resp = self.get(&format!("/auth/doctor/{id}"), token).send().await?;
        let wire = check(resp, "Failed to fetch doctor data")
            .await?
            .json::<DoctorWire>()
            .await?;
        Ok(DoctorSnapshot {
            id: wire.id,
            name: wire.full_name.unwrap_or_else(|| "Unknown Doctor".to_string()),
            specialty: wire
                .department
                .unwrap_or_else(|| "General Practice".to_string()),
            email: wire.email.unwrap_or_else(|| "N/A".to_string()),
        })
    }
}
