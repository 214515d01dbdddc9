//! HTTP client wrapper with request/response interception.
//!
//! Client-side (hydrate): real calls via `gloo-net` with a fixed timeout.
//! Server-side (SSR): sends return `ApiError::Unsupported` since the
//! backend is only reachable from the browser.
//!
//! INTERCEPTION POLICY
//! ===================
//! Outgoing: `Content-Type: application/json` always; `Authorization:
//! Bearer <token>` from the session cache unless the caller supplied an
//! explicit bearer. Incoming: 401 clears the persisted session and emits a
//! session-invalidated event (once per request — the error still reaches
//! the caller); 429 logs the `retry-after` hint without retrying; other
//! statuses map to `ApiError::Status` unchanged.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::session::cache::SessionCache;
use crate::session::events::SessionEvents;

/// HTTP method for an outgoing API request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// JSON API client bound to one backend and one session cache.
#[derive(Clone)]
pub struct HttpClient {
    config: ApiConfig,
    cache: Rc<dyn SessionCache>,
    events: SessionEvents,
}

impl HttpClient {
    pub fn new(config: ApiConfig, cache: Rc<dyn SessionCache>, events: SessionEvents) -> Self {
        Self { config, cache, events }
    }

    /// GET `path` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses,
    /// or an undecodable body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.send(Method::Get, path, None, None).await?)
    }

    /// POST `body` as JSON to `path` and decode the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses,
    /// or an undecodable body.
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        decode(self.send(Method::Post, path, Some(body), None).await?)
    }

    /// POST to `path` with no request body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for transport failures, non-2xx statuses,
    /// or an undecodable body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        decode(self.send(Method::Post, path, None, None).await?)
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        bearer: Option<String>,
    ) -> Result<Option<Value>, ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        builder = builder.header("Content-Type", "application/json");
        if let Some(token) = bearer_for_request(self.cache.token(), bearer) {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        let request = match body {
            Some(value) => builder.json(&value).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };

        let send = request.send();
        let timeout = gloo_timers::future::TimeoutFuture::new(self.config.timeout_ms);
        futures::pin_mut!(send);
        futures::pin_mut!(timeout);
        let response = match select(send, timeout).await {
            Either::Left((result, _)) => result.map_err(|e| ApiError::Network(e.to_string()))?,
            Either::Right(((), _)) => return Err(ApiError::Timeout(self.config.timeout_ms / 1000)),
        };

        if response.ok() {
            return Ok(response.json::<Value>().await.ok());
        }

        let status = response.status();
        let retry_after = response.headers().get("retry-after");
        let body = response.json::<Value>().await.ok();
        let error = error_from_parts(status, retry_after.as_deref(), body.as_ref());

        // Each response is classified exactly once; there is no retry loop
        // that could re-enter the 401 handling for the same request.
        if should_invalidate(&error, false) {
            self.cache.clear();
            self.events.notify_invalidated();
        }
        if let ApiError::RateLimited { retry_after_secs } = &error {
            match retry_after_secs {
                Some(secs) => leptos::logging::warn!("rate limited; retry after {secs}s"),
                None => leptos::logging::warn!("rate limited"),
            }
        }

        Err(error)
    }

    #[cfg(not(feature = "hydrate"))]
    #[allow(clippy::unused_async)]
    async fn send(
        &self,
        _method: Method,
        _path: &str,
        _body: Option<Value>,
        _bearer: Option<String>,
    ) -> Result<Option<Value>, ApiError> {
        Err(ApiError::Unsupported)
    }
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> Result<T, ApiError> {
    serde_json::from_value(value.unwrap_or(Value::Null))
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Bearer token to attach to a request: an explicit caller-supplied token
/// wins over the stored session token.
pub fn bearer_for_request(stored: Option<String>, explicit: Option<String>) -> Option<String> {
    explicit.or(stored)
}

/// Map a non-2xx response to the error taxonomy.
pub fn error_from_parts(status: u16, retry_after: Option<&str>, body: Option<&Value>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized { detail: error_detail(body) },
        429 => ApiError::RateLimited { retry_after_secs: parse_retry_after(retry_after) },
        _ => ApiError::Status { status, detail: error_detail(body) },
    }
}

/// Whether a response should clear the persisted session. Applies at most
/// once per original request.
pub fn should_invalidate(error: &ApiError, already_handled: bool) -> bool {
    error.is_unauthorized() && !already_handled
}

fn error_detail(body: Option<&Value>) -> Option<String> {
    body?.get("detail")?.as_str().map(ToOwned::to_owned)
}

fn parse_retry_after(value: Option<&str>) -> Option<u64> {
    value?.trim().parse().ok()
}
