//! Home page shell behind the auth guard.

use leptos::prelude::*;

use crate::hooks::use_auth;

/// Home page — requires a live session; anonymous visitors are sent to the
/// login page by the auth guard.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_auth();

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        let guard_store = store.clone();
        Effect::new(move || {
            // Track the session so the guard re-runs when it changes.
            let _ = guard_store.state().get();
            let store = guard_store.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::router::guards::auth_guard(&store).await.enforce(&navigate);
            });
        });
    }

    let state = store.state();
    let email = move || state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    let logout_store = store.clone();
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let store = logout_store.clone();
            leptos::task::spawn_local(async move {
                store.logout().await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &logout_store;
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"StaffHub"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <p class="home-page__user">{email}</p>
        </div>
    }
}
