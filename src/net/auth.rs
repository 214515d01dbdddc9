//! Typed wrappers for the backend auth endpoints.
//!
//! `AuthApi` is the seam the store and guards depend on; `AuthService` is
//! the real implementation over [`HttpClient`]. Each method maps one domain
//! operation to one REST call with no additional logic.

use async_trait::async_trait;

use crate::net::error::ApiError;
use crate::net::http::HttpClient;
use crate::net::types::{
    AuthResponse, EmployeeProfile, LoginCredentials, MessageResponse, RateLimitStatus,
    RegisterData, Role, RoleValidation, User,
};

/// Backend auth operations, object-safe so consumers can hold
/// `Rc<dyn AuthApi>` and tests can substitute a stub.
#[async_trait(?Send)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError>;
    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError>;
    async fn current_user(&self) -> Result<User, ApiError>;
    async fn logout(&self) -> Result<(), ApiError>;
    async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError>;
    async fn validate_role(&self, role: Role) -> Result<RoleValidation, ApiError>;
    async fn create_employee_profile(
        &self,
        profile: &EmployeeProfile,
    ) -> Result<EmployeeProfile, ApiError>;
    async fn rate_limit_status(&self) -> Result<RateLimitStatus, ApiError>;
    async fn health_check(&self) -> Result<MessageResponse, ApiError>;
}

/// REST implementation of [`AuthApi`].
#[derive(Clone)]
pub struct AuthService {
    http: HttpClient,
}

impl AuthService {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

#[async_trait(?Send)]
impl AuthApi for AuthService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse, ApiError> {
        self.http.post("/api/auth/login", credentials).await
    }

    async fn register(&self, data: &RegisterData) -> Result<AuthResponse, ApiError> {
        self.http.post("/api/auth/register", data).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.http.get("/api/auth/me").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.http.post_empty("/api/auth/logout").await?;
        Ok(())
    }

    async fn request_password_reset(&self, email: &str) -> Result<MessageResponse, ApiError> {
        self.http
            .post("/api/auth/password-reset", &serde_json::json!({ "email": email }))
            .await
    }

    async fn validate_role(&self, role: Role) -> Result<RoleValidation, ApiError> {
        self.http.get(&format!("/api/auth/validate-{role}")).await
    }

    async fn create_employee_profile(
        &self,
        profile: &EmployeeProfile,
    ) -> Result<EmployeeProfile, ApiError> {
        self.http.post("/api/auth/employee-profile", profile).await
    }

    async fn rate_limit_status(&self) -> Result<RateLimitStatus, ApiError> {
        self.http.get("/api/auth/rate-limit-status").await
    }

    async fn health_check(&self) -> Result<MessageResponse, ApiError> {
        self.http.get("/").await
    }
}
