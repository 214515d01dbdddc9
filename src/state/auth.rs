//! Authentication session state and its pure transitions.
//!
//! INVARIANT
//! =========
//! Token and user are present together or absent together. `set_auth` and
//! `clear_auth` are the only transitions that touch them, and each writes
//! both fields.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AuthResponse, Role, User};

/// Session state: the signed-in user and token, plus the transient loading
/// and error fields the UI observes.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Commit a server-issued session bundle.
    pub fn set_auth(&mut self, auth: &AuthResponse) {
        self.user = Some(auth.user.clone());
        self.token = Some(auth.access_token.clone());
    }

    /// Drop the session and any stale error.
    pub fn clear_auth(&mut self) {
        self.user = None;
        self.token = None;
        self.error = None;
    }

    /// Rebuild state from persisted entries. `None` if the serialized user
    /// is malformed — callers treat that as a dead session.
    pub fn restore(token: String, user_json: &str) -> Option<Self> {
        let user: User = serde_json::from_str(user_json).ok()?;
        Some(Self { user: Some(user), token: Some(token), loading: false, error: None })
    }

    /// True when both token and user are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn is_manager(&self) -> bool {
        self.role() == Some(Role::Manager)
    }

    pub fn is_employee(&self) -> bool {
        self.role() == Some(Role::Employee)
    }

    pub fn is_sponsor(&self) -> bool {
        self.role() == Some(Role::Sponsor)
    }
}
