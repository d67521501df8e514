use super::*;

fn sample_user(role: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.com".to_owned(),
        avatar_url: None,
        role: role.map(str::to_owned),
    }
}

// =============================================================
// AuthState constructors
// =============================================================

#[test]
fn auth_state_default_is_anonymous_and_not_loading() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(state.role.is_none());
    assert!(!state.loading);
}

#[test]
fn resolving_state_is_loading_with_no_identity() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.role.is_none());
}

#[test]
fn resolved_without_user_is_anonymous() {
    let state = AuthState::resolved(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(state.role.is_none());
}

#[test]
fn resolved_parses_doctor_role() {
    let state = AuthState::resolved(Some(sample_user(Some("doctor"))));
    assert!(state.user.is_some());
    assert_eq!(state.role, Some(Role::Doctor));
}

#[test]
fn resolved_parses_patient_role_from_user_wire_value() {
    let state = AuthState::resolved(Some(sample_user(Some("user"))));
    assert_eq!(state.role, Some(Role::Patient));
}

#[test]
fn resolved_with_missing_role_keeps_user_but_no_role() {
    let state = AuthState::resolved(Some(sample_user(None)));
    assert!(state.user.is_some());
    assert!(state.role.is_none());
}

#[test]
fn resolved_with_unrecognized_role_keeps_user_but_no_role() {
    let state = AuthState::resolved(Some(sample_user(Some("admin"))));
    assert!(state.user.is_some());
    assert!(state.role.is_none());
}

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parse_known_values() {
    assert_eq!(Role::parse("doctor"), Some(Role::Doctor));
    assert_eq!(Role::parse("user"), Some(Role::Patient));
}

#[test]
fn role_parse_rejects_unknown_and_case_variants() {
    assert_eq!(Role::parse("Doctor"), None);
    assert_eq!(Role::parse("nurse"), None);
    assert_eq!(Role::parse(""), None);
}
