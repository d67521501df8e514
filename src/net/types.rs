//! Wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror server payloads so serde round-trips
//! stay lossless. Optional and defaulted fields keep the client tolerant of
//! older server versions.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
    /// Raw role string assigned at signup (e.g. `"doctor"`, `"user"`).
    ///
    /// May be absent on accounts created before roles existed; the client
    /// parses it into `state::auth::Role` and treats anything unrecognized
    /// as a distinct unknown-role state.
    #[serde(default)]
    pub role: Option<String>,
}

/// A bookable practitioner as returned by `/api/doctors`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Unique practitioner identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Medical specialty shown in the booking form.
    pub specialty: String,
}

/// An appointment as returned by `/api/appointments`.
///
/// The same shape serves both sides: a patient sees `doctor_name`, a doctor
/// sees `patient_name`; the server omits the field that names the viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique appointment identifier (UUID string).
    pub id: String,
    /// Practitioner the appointment is with (UUID string).
    pub doctor_id: String,
    /// Practitioner display name, if the viewer is the patient.
    #[serde(default)]
    pub doctor_name: Option<String>,
    /// Patient display name, if the viewer is the doctor.
    #[serde(default)]
    pub patient_name: Option<String>,
    /// Scheduled slot as an ISO 8601 local datetime string.
    pub slot: String,
    /// Free-form reason given at booking time.
    pub reason: String,
    /// Lifecycle status (e.g. `"pending"`, `"confirmed"`, `"cancelled"`).
    pub status: String,
}

/// Request body for `POST /api/appointments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Practitioner to book with (UUID string).
    pub doctor_id: String,
    /// Requested slot as an ISO 8601 local datetime string.
    pub slot: String,
    /// Free-form reason for the visit.
    pub reason: String,
}

/// Response body from `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    /// Assistant reply text.
    pub reply: String,
}
