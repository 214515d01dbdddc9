//! Route guards: pure decision functions consulted before a navigation
//! completes. Errors never escape a guard — they collapse into redirects.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::net::types::Role;
use crate::router::{GuardOutcome, routes};
use crate::state::store::AuthStore;

/// Require a live session. A persisted token gets one chance to resolve the
/// current user before the navigation is bounced to the login page.
pub async fn auth_guard(store: &AuthStore) -> GuardOutcome {
    if store.is_authenticated() {
        return GuardOutcome::Allow;
    }

    if store.cached_token().is_some() {
        if let Ok(Some(_)) = store.fetch_current_user().await {
            return GuardOutcome::Allow;
        }
        store.clear_auth();
    }

    GuardOutcome::Redirect(routes::LOGIN)
}

/// Keep signed-in users away from login/register pages.
pub fn guest_guard(store: &AuthStore) -> GuardOutcome {
    if store.is_authenticated() {
        GuardOutcome::Redirect(routes::HOME)
    } else {
        GuardOutcome::Allow
    }
}

/// Require one of `allowed`. When the locally cached role is outside the
/// set, the server gets the final word: its validated role is compared
/// against `allowed` and reconciled into the store on success.
pub async fn role_guard(store: &AuthStore, allowed: &[Role]) -> GuardOutcome {
    if !store.is_authenticated() {
        return GuardOutcome::Redirect(routes::LOGIN);
    }

    let Some(role) = store.role() else {
        return GuardOutcome::Redirect(routes::UNAUTHORIZED);
    };
    if allowed.contains(&role) {
        return GuardOutcome::Allow;
    }

    match store.validate_role(role).await {
        Ok(validation) => match validation.validated_role() {
            Some(validated) if allowed.contains(&validated) => {
                store.reconcile_role(validated);
                GuardOutcome::Allow
            }
            _ => GuardOutcome::Redirect(routes::UNAUTHORIZED),
        },
        Err(_) => GuardOutcome::Redirect(routes::UNAUTHORIZED),
    }
}
