//! Build-time API configuration.
//!
//! SPA builds bake their backend location in at compile time, so the base
//! URL comes from `option_env!` rather than a runtime config file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Fixed per-request timeout in milliseconds.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Backend connection settings for the HTTP client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_ms: u32,
}

impl ApiConfig {
    /// Read the base URL baked in at build time via `STAFFHUB_API_BASE_URL`,
    /// falling back to the local development backend.
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("STAFFHUB_API_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_owned(),
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
