//! Unauthorized page, the role guard's redirect target.

use leptos::prelude::*;

/// Shown when a navigation was denied for the current role.
#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="unauthorized-page">
            <h1>"Not authorized"</h1>
            <p>"Your account does not have access to this page."</p>
            <a href="/" class="btn">
                "Back to home"
            </a>
        </div>
    }
}
