//! Network layer: wire types, error taxonomy, HTTP client, auth service.

pub mod auth;
pub mod error;
pub mod http;
pub mod types;
