use mediboard_client::models::{HospitalProfile, NotificationKind};

use crate::fixtures::Harness;

fn sample_profile() -> HospitalProfile {
    HospitalProfile {
        full_name: "St. Mary General".to_string(),
        email: "admin@stmary.example".to_string(),
        registration_number: "REG-4711".to_string(),
        department: "Administration".to_string(),
        license_number: "LIC-0042".to_string(),
        address: "1 Hospital Way".to_string(),
        staff_position: "Administrator".to_string(),
        hospital_phone: "555-0100".to_string(),
        hospital_email: "contact@stmary.example".to_string(),
    }
}

#[tokio::test]
async fn update_persists_remotely_and_locally() {
    let h = Harness::spawn().await;
    assert!(!h.sessions.session().unwrap().profile_complete);

    let profile = sample_profile();
    h.profile.update(&profile).await.unwrap();

    // Backend has it, the local fallback copy has it, and the session is
    // marked complete.
    assert_eq!(h.profile.fetch().await.unwrap(), Some(profile.clone()));
    assert_eq!(h.sessions.store().load_profile(), Some(profile));
    assert!(h.sessions.session().unwrap().profile_complete);
}

#[tokio::test]
async fn fetch_falls_back_to_the_stored_copy() {
    let h = Harness::spawn().await;
    let profile = sample_profile();
    h.profile.update(&profile).await.unwrap();

    h.backend.with_state(|s| s.fail_profile = true);

    assert_eq!(h.profile.fetch().await.unwrap(), Some(profile));
}

#[tokio::test]
async fn fetch_with_no_profile_anywhere_is_none() {
    let h = Harness::spawn().await;
    assert_eq!(h.profile.fetch().await.unwrap(), None);
}

#[tokio::test]
async fn skip_marks_complete_and_leaves_a_reminder() {
    let h = Harness::spawn().await;

    h.profile.skip().unwrap();

    assert!(h.sessions.session().unwrap().profile_complete);
    let list = h.notifications.notifications();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].title, "Complete Your Profile");
    assert_eq!(list[0].kind, NotificationKind::Warning);
    assert_eq!(h.notifications.unread_count(), 1);
}

#[tokio::test]
async fn health_probe_reports_a_live_backend() {
    let h = Harness::spawn().await;
    assert!(h.profile.backend_available().await);
}
