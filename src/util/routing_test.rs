use super::*;
use crate::net::types::User;

fn user(role: Option<&str>) -> Option<User> {
    Some(User {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        avatar_url: None,
        role: role.map(str::to_owned),
    })
}

fn resolved(role: Option<&str>) -> AuthState {
    AuthState::resolved(user(role))
}

// =============================================================
// Phase classification
// =============================================================

#[test]
fn loading_wins_regardless_of_identity_and_role() {
    let mut state = AuthState::resolved(user(Some("doctor")));
    state.loading = true;
    assert_eq!(session_phase(&state), SessionPhase::Resolving);

    assert_eq!(session_phase(&AuthState::resolving()), SessionPhase::Resolving);
}

#[test]
fn resolved_without_user_is_anonymous() {
    assert_eq!(session_phase(&AuthState::resolved(None)), SessionPhase::Anonymous);
}

#[test]
fn resolved_roles_classify_to_their_phase() {
    assert_eq!(session_phase(&resolved(Some("doctor"))), SessionPhase::Doctor);
    assert_eq!(session_phase(&resolved(Some("user"))), SessionPhase::Patient);
}

#[test]
fn authenticated_without_recognizable_role_is_unknown_role() {
    assert_eq!(session_phase(&resolved(None)), SessionPhase::UnknownRole);
    assert_eq!(session_phase(&resolved(Some("admin"))), SessionPhase::UnknownRole);
}

// =============================================================
// Redirect policy
// =============================================================

#[test]
fn no_redirect_while_resolving() {
    assert_eq!(next_redirect(&AuthState::resolving(), None), None);
}

#[test]
fn no_redirect_for_anonymous_viewers() {
    assert_eq!(next_redirect(&AuthState::resolved(None), None), None);
}

#[test]
fn doctor_redirects_to_doctor_dashboard() {
    assert_eq!(
        next_redirect(&resolved(Some("doctor")), None),
        Some(Destination::DoctorDashboard)
    );
}

#[test]
fn patient_redirects_to_patient_dashboard() {
    assert_eq!(
        next_redirect(&resolved(Some("user")), None),
        Some(Destination::PatientDashboard)
    );
}

#[test]
fn unknown_role_falls_back_to_login() {
    assert_eq!(next_redirect(&resolved(None), None), Some(Destination::Login));
}

#[test]
fn unchanged_session_never_redirects_twice() {
    let state = resolved(Some("doctor"));
    let first = next_redirect(&state, None);
    assert_eq!(first, Some(Destination::DoctorDashboard));
    // Same session observed again on later render passes.
    assert_eq!(next_redirect(&state, first), None);
    assert_eq!(next_redirect(&state, first), None);
}

#[test]
fn session_resolving_then_doctor_issues_exactly_one_redirect() {
    // First observation: still resolving.
    let mut issued = None;
    assert_eq!(next_redirect(&AuthState::resolving(), issued), None);

    // Second observation: resolved doctor.
    let state = resolved(Some("doctor"));
    let dest = next_redirect(&state, issued);
    assert_eq!(dest, Some(Destination::DoctorDashboard));
    issued = dest;

    // Further observations of the same resolved state are quiet.
    assert_eq!(next_redirect(&state, issued), None);
}

#[test]
fn role_change_issues_one_new_redirect() {
    let issued = next_redirect(&resolved(Some("doctor")), None);
    assert_eq!(issued, Some(Destination::DoctorDashboard));

    let patient = resolved(Some("user"));
    let dest = next_redirect(&patient, issued);
    assert_eq!(dest, Some(Destination::PatientDashboard));
    assert_eq!(next_redirect(&patient, dest), None);
}

// =============================================================
// Render guard
// =============================================================

#[test]
fn landing_hidden_while_resolving() {
    assert!(!show_public_landing(&AuthState::resolving()));
}

#[test]
fn landing_shown_only_for_resolved_anonymous() {
    assert!(show_public_landing(&AuthState::resolved(None)));
}

#[test]
fn landing_hidden_for_authenticated_viewers_awaiting_redirect() {
    assert!(!show_public_landing(&resolved(Some("doctor"))));
    assert!(!show_public_landing(&resolved(Some("user"))));
    assert!(!show_public_landing(&resolved(None)));
    assert!(!show_public_landing(&resolved(Some("admin"))));
}

// =============================================================
// Destinations
// =============================================================

#[test]
fn destination_paths() {
    assert_eq!(Destination::DoctorDashboard.path(), "/doctor-dashboard");
    assert_eq!(Destination::PatientDashboard.path(), "/dashboard");
    assert_eq!(Destination::Login.path(), "/login");
}
