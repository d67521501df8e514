//! Landing-route session resolution and role routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home route doubles as the public marketing page and the entry point
//! for authenticated users, who must land on the dashboard matching their
//! role without ever seeing the public content. All decision logic is kept
//! here as pure functions over `AuthState`; the page applies the decisions
//! through a single reactive effect.

#[cfg(test)]
#[path = "routing_test.rs"]
mod routing_test;

use crate::state::auth::{AuthState, Role};

/// Where the session router can send a resolved viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    DoctorDashboard,
    PatientDashboard,
    /// Anonymous entry point, also the fallback for unknown roles.
    Login,
}

impl Destination {
    /// Route path passed to the navigation facility.
    pub fn path(self) -> &'static str {
        match self {
            Destination::DoctorDashboard => "/doctor-dashboard",
            Destination::PatientDashboard => "/dashboard",
            Destination::Login => "/login",
        }
    }
}

/// Classification of the current session value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    /// Session check still in flight; nothing may render but a spinner.
    Resolving,
    /// Resolved with no user; the public landing content is shown.
    Anonymous,
    Doctor,
    Patient,
    /// Authenticated but the role is absent or unrecognized.
    UnknownRole,
}

/// Classify a session value. Total over every field combination: `loading`
/// wins regardless of identity, and a present user with no parsed role is
/// its own phase rather than an error.
pub fn session_phase(state: &AuthState) -> SessionPhase {
    if state.loading {
        return SessionPhase::Resolving;
    }
    match (&state.user, state.role) {
        (None, _) => SessionPhase::Anonymous,
        (Some(_), Some(Role::Doctor)) => SessionPhase::Doctor,
        (Some(_), Some(Role::Patient)) => SessionPhase::Patient,
        (Some(_), None) => SessionPhase::UnknownRole,
    }
}

/// Redirect target for a phase, if that phase leaves the landing page.
pub fn destination_for(phase: SessionPhase) -> Option<Destination> {
    match phase {
        SessionPhase::Resolving | SessionPhase::Anonymous => None,
        SessionPhase::Doctor => Some(Destination::DoctorDashboard),
        SessionPhase::Patient => Some(Destination::PatientDashboard),
        SessionPhase::UnknownRole => Some(Destination::Login),
    }
}

/// Compute the redirect to issue now, given the last destination already
/// issued for this page instance.
///
/// Returns `None` while resolving, for anonymous viewers, and when the
/// current state's destination was already issued — observing an unchanged
/// session across any number of render passes navigates at most once. A
/// session that resolves to a *different* destination issues exactly one
/// new redirect.
pub fn next_redirect(state: &AuthState, issued: Option<Destination>) -> Option<Destination> {
    let dest = destination_for(session_phase(state))?;
    if issued == Some(dest) { None } else { Some(dest) }
}

/// Whether the public landing content may render.
///
/// True only for resolved anonymous sessions. Resolving sessions and
/// authenticated sessions whose redirect has not completed yet both keep
/// the loading indicator, so an authenticated viewer never sees a flash of
/// public content.
pub fn show_public_landing(state: &AuthState) -> bool {
    matches!(session_phase(state), SessionPhase::Anonymous)
}
