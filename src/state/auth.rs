//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once by the session bootstrap in `app` and read by the session
//! router, route guards, and user-aware components. Route components never
//! write it except to clear it on logout.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user, their parsed role, and
/// whether the session check is still in flight.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub role: Option<Role>,
    pub loading: bool,
}

impl AuthState {
    /// State while the `/api/auth/me` check has not completed yet.
    pub fn resolving() -> Self {
        Self {
            user: None,
            role: None,
            loading: true,
        }
    }

    /// State after the session check resolved, authenticated or not.
    ///
    /// The role is parsed from the wire value here so every consumer sees
    /// the same classification; an absent or unrecognized wire role yields
    /// `role: None` even when the user is present.
    pub fn resolved(user: Option<User>) -> Self {
        let role = user
            .as_ref()
            .and_then(|u| u.role.as_deref())
            .and_then(Role::parse);
        Self {
            user,
            role,
            loading: false,
        }
    }
}

/// Classification of an authenticated user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Doctor,
    Patient,
}

impl Role {
    /// Parse a wire role string (`"doctor"` or `"user"`).
    ///
    /// Unrecognized values map to `None`: an authenticated user with an
    /// unknown role is a valid session state the router handles, not a
    /// deserialization error.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "doctor" => Some(Role::Doctor),
            "user" => Some(Role::Patient),
            _ => None,
        }
    }
}
