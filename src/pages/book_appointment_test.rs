use super::*;

#[test]
fn validate_booking_requires_practitioner() {
    assert_eq!(
        validate_booking("", "2026-08-12T10:30", "cough"),
        Err("Choose a practitioner.")
    );
}

#[test]
fn validate_booking_requires_slot() {
    assert_eq!(
        validate_booking("d1", "", "cough"),
        Err("Choose a time for the consultation.")
    );
}

#[test]
fn validate_booking_requires_reason_after_trim() {
    assert_eq!(
        validate_booking("d1", "2026-08-12T10:30", "   "),
        Err("Briefly describe the reason for your visit.")
    );
}

#[test]
fn validate_booking_trims_reason_and_keeps_fields() {
    let booking = validate_booking("d1", "2026-08-12T10:30", "  persistent cough  ")
        .expect("valid booking");
    assert_eq!(booking.doctor_id, "d1");
    assert_eq!(booking.slot, "2026-08-12T10:30");
    assert_eq!(booking.reason, "persistent cough");
}
