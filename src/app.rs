//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::hooks::{provide_auth, use_auth, use_session_events};
use crate::pages::{home::HomePage, login::LoginPage, unauthorized::UnauthorizedPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, restores any persisted session, and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = provide_auth();
    store.initialize();

    view! {
        <Stylesheet id="leptos" href="/pkg/staffhub.css"/>
        <Title text="StaffHub"/>

        <Router>
            <SessionWatcher/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Subscribes to session-invalidated events and routes to the login page.
/// Keeps navigation out of the HTTP layer.
#[component]
fn SessionWatcher() -> impl IntoView {
    let events = use_session_events();
    let store = use_auth();

    #[cfg(feature = "hydrate")]
    {
        let navigate = leptos_router::hooks::use_navigate();
        Effect::new(move || {
            if events.invalidation_count() > 0 {
                // The cache is already cleared by the interceptor; drop the
                // in-memory half too before leaving the page.
                store.clear_auth();
                navigate(crate::router::routes::LOGIN, leptos_router::NavigateOptions::default());
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (events, &store);
    }

    ()
}
