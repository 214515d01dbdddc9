//! Session store: reactive auth state plus the actions that drive it.
//!
//! The store is an explicitly-scoped, injectable context rather than a
//! global singleton: it owns an `RwSignal<AuthState>` and receives its
//! collaborators (auth API, session cache, event channel) at construction.
//! UI code gets it via Leptos context (see `hooks`).
//!
//! Overlapping calls are not de-duplicated or cancelled; the last response
//! to resolve wins. See DESIGN.md.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::net::auth::AuthApi;
use crate::net::error::ApiError;
use crate::net::types::{
    AuthResponse, EmployeeProfile, LoginCredentials, MessageResponse, RegisterData, Role,
    RoleValidation, User,
};
use crate::session::cache::SessionCache;
use crate::session::events::SessionEvents;
use crate::state::auth::AuthState;

const LOGIN_FAILED: &str = "Failed to sign in";
const REGISTER_FAILED: &str = "Failed to create the account";
const RESET_FAILED: &str = "Failed to request a password reset";

/// Session store shared through context by every auth consumer.
#[derive(Clone)]
pub struct AuthStore {
    state: RwSignal<AuthState>,
    api: Rc<dyn AuthApi>,
    cache: Rc<dyn SessionCache>,
    events: SessionEvents,
}

impl AuthStore {
    pub fn new(api: Rc<dyn AuthApi>, cache: Rc<dyn SessionCache>, events: SessionEvents) -> Self {
        Self { state: RwSignal::new(AuthState::default()), api, cache, events }
    }

    /// The underlying reactive state, for components that track it.
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    pub fn events(&self) -> SessionEvents {
        self.events
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(AuthState::is_authenticated)
    }

    pub fn role(&self) -> Option<Role> {
        self.state.with(AuthState::role)
    }

    pub fn is_manager(&self) -> bool {
        self.state.with(AuthState::is_manager)
    }

    pub fn is_employee(&self) -> bool {
        self.state.with(AuthState::is_employee)
    }

    pub fn is_sponsor(&self) -> bool {
        self.state.with(AuthState::is_sponsor)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.state.with(|s| s.token.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    /// Token currently persisted in the session cache, which may exist
    /// before the store has adopted it (fresh page load).
    pub fn cached_token(&self) -> Option<String> {
        self.cache.token()
    }

    /// Sign in and commit the resulting session.
    ///
    /// # Errors
    ///
    /// Re-raises the [`ApiError`] after recording a user-facing message.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.begin();
        let result = self.api.login(credentials).await;
        match &result {
            Ok(auth) => self.commit(auth),
            Err(error) => self.record_error(error, LOGIN_FAILED),
        }
        self.finish();
        result
    }

    /// Create an account and commit the resulting session.
    ///
    /// # Errors
    ///
    /// Re-raises the [`ApiError`] after recording a user-facing message.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.begin();
        let result = self.api.register(data).await;
        match &result {
            Ok(auth) => self.commit(auth),
            Err(error) => self.record_error(error, REGISTER_FAILED),
        }
        self.finish();
        result
    }

    /// Notify the server, then drop the local session no matter what.
    /// A failed server call is logged, never surfaced; logout must not
    /// leave stale local state behind.
    pub async fn logout(&self) {
        self.state.update(|s| s.loading = true);
        if let Err(error) = self.api.logout().await {
            leptos::logging::warn!("logout request failed: {error}");
        }
        self.clear_auth();
        self.state.update(|s| s.loading = false);
    }

    /// Refresh the user record behind the current token.
    ///
    /// `Ok(None)` when no token is held. A 401 clears the whole session
    /// before re-raising; other errors leave the session untouched.
    ///
    /// # Errors
    ///
    /// Re-raises the [`ApiError`] from the profile fetch.
    pub async fn fetch_current_user(&self) -> Result<Option<User>, ApiError> {
        if self.token().is_none() {
            return Ok(None);
        }
        self.state.update(|s| s.loading = true);
        let result = match self.api.current_user().await {
            Ok(user) => {
                self.state.update(|s| s.user = Some(user.clone()));
                Ok(Some(user))
            }
            Err(error) => {
                if error.is_unauthorized() {
                    self.clear_auth();
                }
                Err(error)
            }
        };
        self.state.update(|s| s.loading = false);
        result
    }

    /// Fire-and-forget password reset request.
    ///
    /// # Errors
    ///
    /// Re-raises the [`ApiError`] after recording a user-facing message.
    pub async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.begin();
        let result = self.api.request_password_reset(email).await;
        if let Err(error) = &result {
            self.record_error(error, RESET_FAILED);
        }
        self.finish();
        result
    }

    /// Ask the server whether the current token carries `role`. Does not
    /// mutate the session; guards interpret the result.
    ///
    /// # Errors
    ///
    /// Re-raises the [`ApiError`] from the validation call.
    pub async fn validate_role(&self, role: Role) -> Result<RoleValidation, ApiError> {
        self.api.validate_role(role).await
    }

    /// Create the employee profile tied to a user. Pass-through, no session
    /// mutation.
    ///
    /// # Errors
    ///
    /// Re-raises the [`ApiError`] from the profile call.
    pub async fn create_employee_profile(
        &self,
        profile: &EmployeeProfile,
    ) -> Result<EmployeeProfile, ApiError> {
        self.api.create_employee_profile(profile).await
    }

    /// Replace the in-memory role with a server-validated one (the persisted
    /// copy is rewritten on the next `set_auth`).
    pub fn reconcile_role(&self, role: Role) {
        self.state.update(|s| {
            if let Some(user) = &mut s.user {
                user.role = role;
            }
        });
    }

    /// Adopt the persisted session, if any. Returns true when a session was
    /// restored and still needs background validation. Malformed or
    /// half-present entries clear everything synchronously.
    pub fn restore_session(&self) -> bool {
        match (self.cache.token(), self.cache.user_json()) {
            (Some(token), Some(user_json)) => match AuthState::restore(token, &user_json) {
                Some(restored) => {
                    self.state.set(restored);
                    true
                }
                None => {
                    self.clear_auth();
                    false
                }
            },
            (None, None) => false,
            // Half a session is no session.
            _ => {
                self.clear_auth();
                false
            }
        }
    }

    /// Validate a restored session against the backend; any failure clears it.
    pub async fn validate_restored(&self) {
        if self.fetch_current_user().await.is_err() {
            self.clear_auth();
        }
    }

    /// Startup sequence: optimistically adopt the persisted session, then
    /// validate it in the background.
    pub fn initialize(&self) {
        let needs_validation = self.restore_session();
        #[cfg(feature = "hydrate")]
        if needs_validation {
            let store = self.clone();
            leptos::task::spawn_local(async move { store.validate_restored().await });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = needs_validation;
    }

    /// Drop the session state and both persisted entries.
    pub fn clear_auth(&self) {
        self.state.update(AuthState::clear_auth);
        self.cache.clear();
    }

    pub fn clear_error(&self) {
        self.state.update(|s| s.error = None);
    }

    fn commit(&self, auth: &AuthResponse) {
        self.state.update(|s| s.set_auth(auth));
        if let Ok(user_json) = serde_json::to_string(&auth.user) {
            self.cache.store(&auth.access_token, &user_json);
        }
    }

    fn begin(&self) {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn finish(&self) {
        self.state.update(|s| s.loading = false);
    }

    fn record_error(&self, error: &ApiError, fallback: &str) {
        let message = error.detail().map_or_else(|| fallback.to_owned(), ToOwned::to_owned);
        self.state.update(|s| s.error = Some(message));
    }
}
