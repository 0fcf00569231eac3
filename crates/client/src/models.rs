use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---- Appointments --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    /// Opaque scheduling coordinates; compared by string equality only.
    pub appointment_date: String,
    pub appointment_time: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub notes: String,
    pub status: AppointmentStatus,
}

/// `GET /appointments/hospital/appointments` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentBuckets {
    #[serde(default)]
    pub today: Vec<Appointment>,
    #[serde(default)]
    pub upcoming: Vec<Appointment>,
    #[serde(default)]
    pub past: Vec<Appointment>,
}

impl AppointmentBuckets {
    /// All buckets flattened, today first.
    pub fn into_all(self) -> Vec<Appointment> {
        let mut all = self.today;
        all.extend(self.upcoming);
        all.extend(self.past);
        all
    }
}

// ---- Directory snapshots -------------------------------------------------

/// Denormalized patient fields fetched for display next to an appointment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientSnapshot {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorSnapshot {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub email: String,
}

// ---- Notifications -------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    #[default]
    Info,
    Warning,
    Error,
    Success,
}

/// One entry of the backend's `{notifications: [...]}` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEntry {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: NotificationKind,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub appointment_id: Option<String>,
}

// ---- Availability --------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub id: String,
    pub doctor_id: String,
    #[serde(default)]
    pub doctor_name: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
    #[serde(default)]
    pub is_available: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAvailabilitySlot {
    pub doctor_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoctorStatus {
    Available,
    Busy,
}

/// Day-level doctor status pushed from the dashboard status manager.
#[derive(Debug, Clone, Serialize)]
pub struct DoctorDayStatus {
    pub status: DoctorStatus,
    pub available_from: String,
    pub available_until: String,
    pub date: String,
    pub slots: Vec<String>,
}

// ---- Hospital profile ----------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HospitalProfile {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub staff_position: String,
    #[serde(default)]
    pub hospital_phone: String,
    #[serde(default)]
    pub hospital_email: String,
}
