use super::*;

#[test]
fn login_failed_message_distinguishes_bad_credentials() {
    assert_eq!(login_failed_message(401), "Invalid email or password.");
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[test]
fn booking_failed_message_formats_status() {
    assert_eq!(booking_failed_message(409), "booking failed: 409");
}

#[test]
fn chat_failed_message_formats_status() {
    assert_eq!(chat_failed_message(429), "chat request failed: 429");
}

#[test]
fn request_failed_message_names_the_resource() {
    assert_eq!(request_failed_message("doctors", 500), "doctors request failed: 500");
    assert_eq!(
        request_failed_message("appointments", 502),
        "appointments request failed: 502"
    );
}
