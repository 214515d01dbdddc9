//! Wire types shared with the backend REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account roles recognized by the backend. Serialized lowercase on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Manager,
    Employee,
    Sponsor,
}

impl Role {
    /// Lowercase wire name, as used in `/api/auth/validate-{role}` paths.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "manager",
            Self::Employee => "employee",
            Self::Sponsor => "sponsor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Self::Manager),
            "employee" => Ok(Self::Employee),
            "sponsor" => Ok(Self::Sponsor),
            _ => Err(()),
        }
    }
}

/// Identity record for the signed-in account. Replaced wholesale on refresh,
/// never mutated field-by-field from the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub updated_at: String,
}

/// Server-issued bundle returned by login and register — the sole producer
/// of a new session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user: User,
}

/// Login payload. Transient, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Registration payload. Transient, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Employee profile created after registration. Tied to a user id but not
/// part of the session invariants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub user_id: Uuid,
    pub name: String,
    pub identification: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_type: Option<SalaryType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_hourly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_biweekly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_monthly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProfileStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Pay schedule for an employee profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SalaryType {
    Hourly,
    Biweekly,
    Monthly,
}

/// Employee profile lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Active,
    Inactive,
}

/// Result of a server-side role validation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoleValidation {
    pub message: String,
    pub role: String,
    pub user_id: Uuid,
}

impl RoleValidation {
    /// The validated role, if the server returned a recognized one.
    pub fn validated_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

/// Generic `{message}` acknowledgment body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Rate limiter status reported by `/api/auth/rate-limit-status`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RateLimitStatus {
    pub status: String,
    #[serde(default)]
    pub rate_limiting: serde_json::Value,
}
