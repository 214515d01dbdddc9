//! Navigation decisions for the client-side router.

pub mod guards;

/// Route paths the guards redirect to.
pub mod routes {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const UNAUTHORIZED: &str = "/unauthorized";
}

/// Outcome of a guard, evaluated once per navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(&'static str),
}

impl GuardOutcome {
    /// Apply the outcome with the router's navigate handle.
    #[cfg(feature = "hydrate")]
    pub fn enforce(self, navigate: &impl Fn(&str, leptos_router::NavigateOptions)) {
        if let Self::Redirect(to) = self {
            navigate(to, leptos_router::NavigateOptions::default());
        }
    }
}
