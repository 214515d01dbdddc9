//! Composable facades over the session context.
//!
//! Convenience re-exports for UI code: `provide_auth` wires the real
//! collaborators together once at the root, `use_auth` and
//! `use_session_events` fetch them from context anywhere below. No logic
//! lives here.

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::auth::{AuthApi, AuthService};
use crate::net::http::HttpClient;
use crate::session::cache::{BrowserCache, SessionCache};
use crate::session::events::SessionEvents;
use crate::state::store::AuthStore;

/// Build the browser-backed auth store and provide it (and its event
/// channel) via context. Call once from the root component.
pub fn provide_auth() -> AuthStore {
    let events = SessionEvents::new();
    let cache: Rc<dyn SessionCache> = Rc::new(BrowserCache::new());
    let http = HttpClient::new(ApiConfig::from_env(), Rc::clone(&cache), events);
    let api: Rc<dyn AuthApi> = Rc::new(AuthService::new(http));
    let store = AuthStore::new(api, cache, events);

    provide_context(events);
    // The store holds Rc collaborators, so it lives in thread-local storage
    // behind a Send + Sync handle.
    provide_context(StoredValue::new_local(store.clone()));
    store
}

/// The session store provided by [`provide_auth`].
///
/// # Panics
///
/// Panics when called outside a subtree that ran [`provide_auth`].
pub fn use_auth() -> AuthStore {
    expect_context::<StoredValue<AuthStore, LocalStorage>>().get_value()
}

/// The session event channel provided by [`provide_auth`].
///
/// # Panics
///
/// Panics when called outside a subtree that ran [`provide_auth`].
pub fn use_session_events() -> SessionEvents {
    expect_context::<SessionEvents>()
}
