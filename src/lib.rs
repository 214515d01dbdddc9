//! # staffhub-client
//!
//! Leptos + WASM authentication layer for the StaffHub single-page
//! application: session store, token persistence, HTTP client with
//! interceptors, and route guards.
//!
//! The UI proper lives in its own components; this crate owns the
//! authentication state machine, the token lifecycle, the request and
//! response interception policy, and the route-access decisions.

pub mod app;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
