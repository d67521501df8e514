//! REST API helpers for communicating with the Careboard server.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior: a failed session check resolves to anonymous, a
//! failed list fetch surfaces an inline error message.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use gloo_net::http::Request;

use super::types::{Appointment, BookingRequest, ChatReply, Doctor, User};

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or the request fails.
pub async fn fetch_current_session() -> Option<User> {
    let resp = Request::get("/api/auth/me").send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<User>().await.ok()
}

/// Establish a session via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns a display-ready message if the request fails or is rejected.
pub async fn login(email: &str, password: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let resp = Request::post("/api/auth/login")
        .json(&LoginRequest { email, password })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(login_failed_message(resp.status()));
    }
    Ok(())
}

/// End the current session via `POST /api/auth/logout`.
pub async fn logout() {
    let _ = Request::post("/api/auth/logout").send().await;
}

/// Fetch the bookable practitioner directory from `/api/doctors`.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn fetch_doctors() -> Result<Vec<Doctor>, String> {
    let resp = Request::get("/api/doctors")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("doctors", resp.status()));
    }
    resp.json::<Vec<Doctor>>().await.map_err(|e| e.to_string())
}

/// Fetch the session-scoped appointment list from `/api/appointments`.
///
/// Patients get their upcoming bookings, doctors their schedule.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn fetch_appointments() -> Result<Vec<Appointment>, String> {
    let resp = Request::get("/api/appointments")
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("appointments", resp.status()));
    }
    resp.json::<Vec<Appointment>>()
        .await
        .map_err(|e| e.to_string())
}

/// Create an appointment via `POST /api/appointments`.
///
/// # Errors
///
/// Returns a display-ready message if the request fails or is rejected.
pub async fn create_appointment(booking: &BookingRequest) -> Result<Appointment, String> {
    let resp = Request::post("/api/appointments")
        .json(booking)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(booking_failed_message(resp.status()));
    }
    resp.json::<Appointment>().await.map_err(|e| e.to_string())
}

/// Send one symptom-helper prompt via `POST /api/chat` and return the reply.
///
/// # Errors
///
/// Returns a display-ready message if the request fails.
pub async fn send_chat_message(message: &str) -> Result<String, String> {
    let resp = Request::post("/api/chat")
        .json(&serde_json::json!({ "message": message }))
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(chat_failed_message(resp.status()));
    }
    let body: ChatReply = resp.json().await.map_err(|e| e.to_string())?;
    Ok(body.reply)
}

fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Invalid email or password.".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

fn booking_failed_message(status: u16) -> String {
    format!("booking failed: {status}")
}

fn chat_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}
