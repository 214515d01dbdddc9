//! Login page: guest-guarded email/password form.

use leptos::prelude::*;

use crate::hooks::use_auth;

/// Login page — submits credentials through the session store. Signed-in
/// visitors are bounced back to the home page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_auth();

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        let guard_store = store.clone();
        Effect::new(move || {
            crate::router::guards::guest_guard(&guard_store).enforce(&navigate);
        });
    }

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit_store = store.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            let store = submit_store.clone();
            let credentials = crate::net::types::LoginCredentials {
                email: email.get(),
                password: password.get(),
            };
            leptos::task::spawn_local(async move {
                // Failures land in store.error(), rendered below.
                let _ = store.login(&credentials).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &submit_store;
        }
    };

    let state = store.state();

    view! {
        <div class="login-page">
            <h1>"StaffHub"</h1>
            <form class="login-form" on:submit=on_submit>
                <label class="login-form__label">
                    "Email"
                    <input
                        class="login-form__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__label">
                    "Password"
                    <input
                        class="login-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="login-form__error">
                        {move || state.with(|s| s.error.clone().unwrap_or_default())}
                    </p>
                </Show>
                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || state.with(|s| s.loading)
                >
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
