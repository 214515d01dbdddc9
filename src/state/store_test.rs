use super::*;

use async_trait::async_trait;
use futures::executor::block_on;

use crate::session::cache::MemoryCache;

fn user(role: Role) -> User {
    User {
        id: uuid::Uuid::new_v4(),
        email: "a@b.com".to_owned(),
        role,
        created_at: "2025-01-01T00:00:00Z".to_owned(),
        updated_at: "2025-01-01T00:00:00Z".to_owned(),
    }
}

fn auth_response(token: &str, role: Role) -> AuthResponse {
    AuthResponse {
        access_token: token.to_owned(),
        token_type: "bearer".to_owned(),
        expires_in: 3600,
        user: user(role),
    }
}

fn user_json(role: Role) -> String {
    serde_json::to_string(&user(role)).unwrap()
}

/// Canned-response stand-in for the backend.
struct StubApi {
    login: Result<AuthResponse, ApiError>,
    register: Result<AuthResponse, ApiError>,
    current_user: Result<User, ApiError>,
    logout: Result<(), ApiError>,
    password_reset: Result<MessageResponse, ApiError>,
    validate_role: Result<RoleValidation, ApiError>,
}

impl Default for StubApi {
    fn default() -> Self {
        Self {
            login: Err(ApiError::Unsupported),
            register: Err(ApiError::Unsupported),
            current_user: Err(ApiError::Unsupported),
            logout: Ok(()),
            password_reset: Err(ApiError::Unsupported),
            validate_role: Err(ApiError::Unsupported),
        }
    }
}

#[async_trait(?Send)]
impl AuthApi for StubApi {
    async fn login(&self, _credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.login.clone()
    }

    async fn register(&self, _data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.register.clone()
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.current_user.clone()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout.clone()
    }

    async fn request_password_reset(&self, _email: &str) -> Result<MessageResponse, ApiError> {
        self.password_reset.clone()
    }

    async fn validate_role(&self, _role: Role) -> Result<RoleValidation, ApiError> {
        self.validate_role.clone()
    }

    async fn create_employee_profile(
        &self,
        profile: &EmployeeProfile,
    ) -> Result<EmployeeProfile, ApiError> {
        Ok(profile.clone())
    }

    async fn rate_limit_status(&self) -> Result<crate::net::types::RateLimitStatus, ApiError> {
        Err(ApiError::Unsupported)
    }

    async fn health_check(&self) -> Result<MessageResponse, ApiError> {
        Err(ApiError::Unsupported)
    }
}

fn store_with(api: StubApi, cache: Rc<MemoryCache>) -> AuthStore {
    AuthStore::new(Rc::new(api), cache, SessionEvents::new())
}

fn credentials() -> LoginCredentials {
    LoginCredentials { email: "a@b.com".to_owned(), password: "x".to_owned() }
}

// =============================================================
// login / register
// =============================================================

#[test]
fn login_success_commits_session_and_persists_token() {
    let cache = Rc::new(MemoryCache::new());
    let api = StubApi { login: Ok(auth_response("T", Role::Manager)), ..StubApi::default() };
    let store = store_with(api, Rc::clone(&cache));

    let result = block_on(store.login(&credentials()));

    assert!(result.is_ok());
    assert!(store.is_authenticated());
    assert!(store.is_manager());
    assert!(!store.loading());
    assert_eq!(cache.token().as_deref(), Some("T"));
    let persisted: User = serde_json::from_str(&cache.user_json().unwrap()).unwrap();
    assert_eq!(persisted.role, Role::Manager);
}

#[test]
fn login_failure_records_server_detail_and_reraises() {
    let cache = Rc::new(MemoryCache::new());
    let api = StubApi {
        login: Err(ApiError::Status { status: 422, detail: Some("Invalid credentials".to_owned()) }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::clone(&cache));

    let result = block_on(store.login(&credentials()));

    assert!(result.is_err());
    assert_eq!(store.error().as_deref(), Some("Invalid credentials"));
    assert!(!store.is_authenticated());
    assert!(cache.token().is_none());
    assert!(!store.loading());
}

#[test]
fn login_failure_without_detail_uses_generic_message() {
    let api = StubApi { login: Err(ApiError::Network("offline".to_owned())), ..StubApi::default() };
    let store = store_with(api, Rc::new(MemoryCache::new()));

    let _ = block_on(store.login(&credentials()));

    assert_eq!(store.error().as_deref(), Some("Failed to sign in"));
}

#[test]
fn login_clears_previous_error_before_retrying() {
    let api = StubApi { login: Ok(auth_response("T", Role::Employee)), ..StubApi::default() };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    store.state().update(|s| s.error = Some("old".to_owned()));

    let _ = block_on(store.login(&credentials()));

    assert!(store.error().is_none());
}

#[test]
fn register_success_commits_session() {
    let cache = Rc::new(MemoryCache::new());
    let api = StubApi { register: Ok(auth_response("R", Role::Sponsor)), ..StubApi::default() };
    let store = store_with(api, Rc::clone(&cache));

    let data = RegisterData {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
        role: Role::Sponsor,
    };
    let result = block_on(store.register(&data));

    assert!(result.is_ok());
    assert!(store.is_sponsor());
    assert_eq!(cache.token().as_deref(), Some("R"));
}

#[test]
fn register_failure_records_message() {
    let api = StubApi {
        register: Err(ApiError::Status { status: 409, detail: Some("Email taken".to_owned()) }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::new(MemoryCache::new()));

    let data = RegisterData {
        email: "a@b.com".to_owned(),
        password: "x".to_owned(),
        role: Role::Employee,
    };
    assert!(block_on(store.register(&data)).is_err());
    assert_eq!(store.error().as_deref(), Some("Email taken"));
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_on_success() {
    let cache = Rc::new(MemoryCache::new());
    let api = StubApi { login: Ok(auth_response("T", Role::Manager)), ..StubApi::default() };
    let store = store_with(api, Rc::clone(&cache));
    let _ = block_on(store.login(&credentials()));

    block_on(store.logout());

    assert!(!store.is_authenticated());
    assert!(cache.token().is_none());
    assert!(cache.user_json().is_none());
}

#[test]
fn logout_clears_session_even_when_server_call_fails() {
    let cache = Rc::new(MemoryCache::new());
    let api = StubApi {
        login: Ok(auth_response("T", Role::Manager)),
        logout: Err(ApiError::Network("offline".to_owned())),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::clone(&cache));
    let _ = block_on(store.login(&credentials()));

    block_on(store.logout());

    assert!(!store.is_authenticated());
    assert!(cache.token().is_none());
    assert!(!store.loading());
}

// =============================================================
// fetch_current_user
// =============================================================

#[test]
fn fetch_current_user_without_token_is_a_noop() {
    let api = StubApi { current_user: Ok(user(Role::Manager)), ..StubApi::default() };
    let store = store_with(api, Rc::new(MemoryCache::new()));

    let result = block_on(store.fetch_current_user());

    assert_eq!(result, Ok(None));
    assert!(!store.is_authenticated());
}

#[test]
fn fetch_current_user_replaces_the_user_record() {
    let api = StubApi {
        login: Ok(auth_response("T", Role::Employee)),
        current_user: Ok(user(Role::Manager)),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    let _ = block_on(store.login(&credentials()));

    let refreshed = block_on(store.fetch_current_user()).expect("refresh");

    assert_eq!(refreshed.map(|u| u.role), Some(Role::Manager));
    assert!(store.is_manager());
}

#[test]
fn fetch_current_user_401_clears_the_whole_session() {
    let cache = Rc::new(MemoryCache::new());
    let api = StubApi {
        login: Ok(auth_response("T", Role::Manager)),
        current_user: Err(ApiError::Unauthorized { detail: None }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::clone(&cache));
    let _ = block_on(store.login(&credentials()));

    let result = block_on(store.fetch_current_user());

    assert!(result.is_err());
    assert!(!store.is_authenticated());
    assert!(cache.token().is_none());
    assert!(cache.user_json().is_none());
}

#[test]
fn fetch_current_user_other_errors_keep_the_session() {
    let api = StubApi {
        login: Ok(auth_response("T", Role::Manager)),
        current_user: Err(ApiError::Status { status: 500, detail: None }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    let _ = block_on(store.login(&credentials()));

    let result = block_on(store.fetch_current_user());

    assert!(result.is_err());
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("T"));
}

// =============================================================
// restore_session / validate_restored
// =============================================================

#[test]
fn restore_with_valid_entries_is_authenticated_before_validation() {
    let cache = Rc::new(MemoryCache::seeded("T", &user_json(Role::Manager)));
    // Validation would fail, but restore alone must already authenticate.
    let store = store_with(StubApi::default(), Rc::clone(&cache));

    let needs_validation = store.restore_session();

    assert!(needs_validation);
    assert!(store.is_authenticated());
    assert_eq!(store.token().as_deref(), Some("T"));
}

#[test]
fn restore_with_corrupted_user_json_is_anonymous_synchronously() {
    let cache = Rc::new(MemoryCache::seeded("T", "{not json"));
    let store = store_with(StubApi::default(), Rc::clone(&cache));

    let needs_validation = store.restore_session();

    assert!(!needs_validation);
    assert!(!store.is_authenticated());
    assert!(cache.token().is_none());
    assert!(cache.user_json().is_none());
}

#[test]
fn restore_with_half_present_entries_clears_both() {
    let cache = Rc::new(MemoryCache::with_token_only("T"));
    let store = store_with(StubApi::default(), Rc::clone(&cache));

    assert!(!store.restore_session());
    assert!(cache.token().is_none());
}

#[test]
fn restore_with_empty_cache_stays_anonymous() {
    let store = store_with(StubApi::default(), Rc::new(MemoryCache::new()));
    assert!(!store.restore_session());
    assert!(!store.is_authenticated());
}

#[test]
fn validate_restored_clears_session_when_validation_fails() {
    let cache = Rc::new(MemoryCache::seeded("T", &user_json(Role::Manager)));
    let api = StubApi {
        current_user: Err(ApiError::Status { status: 500, detail: None }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::clone(&cache));
    assert!(store.restore_session());

    block_on(store.validate_restored());

    assert!(!store.is_authenticated());
    assert!(cache.token().is_none());
}

#[test]
fn validate_restored_keeps_session_when_validation_succeeds() {
    let cache = Rc::new(MemoryCache::seeded("T", &user_json(Role::Employee)));
    let api = StubApi { current_user: Ok(user(Role::Employee)), ..StubApi::default() };
    let store = store_with(api, Rc::clone(&cache));
    assert!(store.restore_session());

    block_on(store.validate_restored());

    assert!(store.is_authenticated());
    assert!(store.is_employee());
}

// =============================================================
// password reset / role reconciliation / error handling
// =============================================================

#[test]
fn password_reset_failure_sets_error_and_reraises() {
    let api = StubApi {
        password_reset: Err(ApiError::Status { status: 400, detail: Some("Unknown email".to_owned()) }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::new(MemoryCache::new()));

    let result = block_on(store.request_password_reset("a@b.com"));

    assert!(result.is_err());
    assert_eq!(store.error().as_deref(), Some("Unknown email"));
}

#[test]
fn validate_role_does_not_mutate_the_session() {
    let api = StubApi {
        login: Ok(auth_response("T", Role::Employee)),
        validate_role: Err(ApiError::Status { status: 403, detail: None }),
        ..StubApi::default()
    };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    let _ = block_on(store.login(&credentials()));

    let _ = block_on(store.validate_role(Role::Employee));

    assert!(store.is_authenticated());
    assert!(store.is_employee());
    assert!(store.error().is_none());
}

#[test]
fn reconcile_role_replaces_the_in_memory_role() {
    let api = StubApi { login: Ok(auth_response("T", Role::Employee)), ..StubApi::default() };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    let _ = block_on(store.login(&credentials()));

    store.reconcile_role(Role::Manager);

    assert!(store.is_manager());
}

#[test]
fn create_employee_profile_is_a_pass_through() {
    let api = StubApi { login: Ok(auth_response("T", Role::Manager)), ..StubApi::default() };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    let _ = block_on(store.login(&credentials()));

    let profile = EmployeeProfile {
        user_id: store.user().unwrap().id,
        name: "Ada".to_owned(),
        identification: "X-1".to_owned(),
        ..EmployeeProfile::default()
    };
    let created = block_on(store.create_employee_profile(&profile)).expect("profile");

    assert_eq!(created, profile);
    assert!(store.is_authenticated());
}

#[test]
fn clear_error_only_touches_the_error_field() {
    let api = StubApi { login: Ok(auth_response("T", Role::Manager)), ..StubApi::default() };
    let store = store_with(api, Rc::new(MemoryCache::new()));
    let _ = block_on(store.login(&credentials()));
    store.state().update(|s| s.error = Some("stale".to_owned()));

    store.clear_error();

    assert!(store.error().is_none());
    assert!(store.is_authenticated());
}
