//! Shared guards for authenticated routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dashboard routes apply identical unauthenticated redirect behavior, and
//! each role dashboard bounces viewers of the other role to their own
//! destination. Predicates are pure; only the installer touches the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AuthState, Role};

/// Whether a guarded route should send the viewer to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Path a role-guarded route should bounce this viewer to, if any.
///
/// Returns `None` while resolving, for anonymous viewers (the unauth guard
/// owns that case), and for viewers already holding the expected role. An
/// authenticated viewer with no recognized role goes to `/login`, the same
/// fallback the landing page applies.
pub fn role_guard_destination(state: &AuthState, expected: Role) -> Option<&'static str> {
    if state.loading || state.user.is_none() {
        return None;
    }
    match state.role {
        Some(actual) if actual == expected => None,
        Some(Role::Doctor) => Some("/doctor-dashboard"),
        Some(Role::Patient) => Some("/dashboard"),
        None => Some("/login"),
    }
}

/// Redirect to `/login` whenever auth has resolved and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/login", NavigateOptions::default());
        }
    });
}

/// Bounce viewers whose role does not match this route's expected role.
pub fn install_role_guard<F>(auth: RwSignal<AuthState>, expected: Role, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some(path) = role_guard_destination(&state, expected) {
            navigate(path, NavigateOptions::default());
        }
    });
}
