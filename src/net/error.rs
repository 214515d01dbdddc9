//! Error taxonomy for backend calls.
//!
//! Transport failures, auth failures (401), rate limiting (429), and other
//! HTTP statuses are kept as distinct variants so the store and guards can
//! react to each differently. The server reports user-facing messages in a
//! `detail` body field; `ApiError::detail` surfaces it.

use thiserror::Error;

/// Error returned by the HTTP client and the auth service.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0}s")]
    Timeout(u32),
    #[error("not authenticated")]
    Unauthorized { detail: Option<String> },
    #[error("rate limited")]
    RateLimited { retry_after_secs: Option<u64> },
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    /// The server-provided `detail` message, when one was returned.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail } | Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// True for 401 responses — the session token is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
