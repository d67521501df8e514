use super::*;

// =============================================================
// User
// =============================================================

#[test]
fn user_parses_with_role() {
    let json = r#"{
        "id": "u1",
        "name": "Asha",
        "email": "asha@example.com",
        "avatar_url": null,
        "role": "doctor"
    }"#;
    let user: User = serde_json::from_str(json).expect("valid user");
    assert_eq!(user.role.as_deref(), Some("doctor"));
}

#[test]
fn user_parses_with_missing_role_field() {
    let json = r#"{
        "id": "u2",
        "name": "Ravi",
        "email": "ravi@example.com",
        "avatar_url": "https://example.com/a.png"
    }"#;
    let user: User = serde_json::from_str(json).expect("valid user");
    assert!(user.role.is_none());
    assert_eq!(user.avatar_url.as_deref(), Some("https://example.com/a.png"));
}

// =============================================================
// Appointment
// =============================================================

#[test]
fn appointment_parses_patient_view_without_patient_name() {
    let json = r#"{
        "id": "a1",
        "doctor_id": "d1",
        "doctor_name": "Dr. Rao",
        "slot": "2026-08-12T10:30",
        "reason": "persistent cough",
        "status": "confirmed"
    }"#;
    let appt: Appointment = serde_json::from_str(json).expect("valid appointment");
    assert_eq!(appt.doctor_name.as_deref(), Some("Dr. Rao"));
    assert!(appt.patient_name.is_none());
    assert_eq!(appt.status, "confirmed");
}

#[test]
fn appointment_parses_doctor_view_without_doctor_name() {
    let json = r#"{
        "id": "a2",
        "doctor_id": "d1",
        "patient_name": "Asha",
        "slot": "2026-08-12T11:00",
        "reason": "follow-up",
        "status": "pending"
    }"#;
    let appt: Appointment = serde_json::from_str(json).expect("valid appointment");
    assert!(appt.doctor_name.is_none());
    assert_eq!(appt.patient_name.as_deref(), Some("Asha"));
}

// =============================================================
// BookingRequest / ChatReply
// =============================================================

#[test]
fn booking_request_serializes_expected_fields() {
    let req = BookingRequest {
        doctor_id: "d1".to_owned(),
        slot: "2026-08-12T10:30".to_owned(),
        reason: "checkup".to_owned(),
    };
    let value = serde_json::to_value(&req).expect("serializable");
    assert_eq!(value["doctor_id"], "d1");
    assert_eq!(value["slot"], "2026-08-12T10:30");
    assert_eq!(value["reason"], "checkup");
}

#[test]
fn chat_reply_parses() {
    let reply: ChatReply =
        serde_json::from_str(r#"{"reply":"Drink water and rest."}"#).expect("valid reply");
    assert_eq!(reply.reply, "Drink water and rest.");
}
