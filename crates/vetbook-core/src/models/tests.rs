use std::str::FromStr;

use super::*;

#[test]
fn test_appointment_status_from_str() {
    assert_eq!(
        AppointmentStatus::from_str("pending").unwrap(),
        AppointmentStatus::Pending
    );
    assert_eq!(
        AppointmentStatus::from_str("Approved").unwrap(),
        AppointmentStatus::Approved
    );
    assert_eq!(
        AppointmentStatus::from_str("no-show").unwrap(),
        AppointmentStatus::NoShow
    );
    assert!(AppointmentStatus::from_str("scheduled").is_err());
}

#[test]
fn test_appointment_status_active_filter() {
    assert!(AppointmentStatus::Pending.is_active());
    assert!(AppointmentStatus::Approved.is_active());
    assert!(AppointmentStatus::Completed.is_active());
    assert!(!AppointmentStatus::Cancelled.is_active());
    assert!(!AppointmentStatus::Rejected.is_active());
}

#[test]
fn test_appointment_status_cancellable() {
    assert!(AppointmentStatus::Pending.is_cancellable());
    assert!(AppointmentStatus::Approved.is_cancellable());
    assert!(!AppointmentStatus::Completed.is_cancellable());
    assert!(!AppointmentStatus::Cancelled.is_cancellable());
}

#[test]
fn test_no_show_wire_name() {
    let json = serde_json::to_string(&AppointmentStatus::NoShow).unwrap();
    assert_eq!(json, "\"No-show\"");

    let parsed: AppointmentStatus = serde_json::from_str("\"No-show\"").unwrap();
    assert_eq!(parsed, AppointmentStatus::NoShow);
}

#[test]
fn test_service_catalog_order_and_size() {
    assert_eq!(Service::CATALOG.len(), 7);
    assert_eq!(Service::CATALOG[0], Service::Consultation);
    assert_eq!(Service::CATALOG[6], Service::Surgery);
}

#[test]
fn test_service_from_str_case_insensitive() {
    assert_eq!(Service::from_str("grooming").unwrap(), Service::Grooming);
    assert_eq!(Service::from_str("GROOMING").unwrap(), Service::Grooming);
    assert!(Service::from_str("teeth whitening").is_err());
}

#[test]
fn test_pet_deserializes_wire_names() {
    let json = r#"{
        "pet_id": 42,
        "pet_name": "Biscuit",
        "species": "Dog",
        "breed": "Corgi",
        "pet_image_url": "/uploads/biscuit.jpg"
    }"#;
    let pet: Pet = serde_json::from_str(json).unwrap();
    assert_eq!(pet.id, 42);
    assert_eq!(pet.name, "Biscuit");
    assert_eq!(pet.breed.as_deref(), Some("Corgi"));
    assert_eq!(pet.gender, None);
    assert_eq!(pet.image_url.as_deref(), Some("/uploads/biscuit.jpg"));
}

#[test]
fn test_appointment_deserializes_timestamped_date() {
    let json = r#"{
        "appointment_id": 7,
        "pet_name": "Biscuit",
        "services": ["Grooming", "Vaccination"],
        "appointment_date": "2025-06-01T00:00:00",
        "appointment_time": "09:30",
        "status": "Pending"
    }"#;
    let appointment: Appointment = serde_json::from_str(json).unwrap();
    assert_eq!(appointment.date, jiff::civil::date(2025, 6, 1));
    assert_eq!(appointment.time, jiff::civil::time(9, 30, 0, 0));
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.notes, None);
}

#[test]
fn test_session_token_omitted_when_absent() {
    let session = Session {
        user: User {
            id: 1,
            name: "Dana".to_string(),
            email: "dana@example.com".to_string(),
        },
        token: None,
    };
    let json = serde_json::to_string(&session).unwrap();
    assert!(!json.contains("token"));
}
