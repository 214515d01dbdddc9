//! Session lifecycle notifications.
//!
//! The HTTP layer does not navigate; when a 401 invalidates the session it
//! bumps a reactive counter here, and navigation code subscribes to it.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use leptos::prelude::*;

/// Reactive session-invalidated notification channel.
#[derive(Clone, Copy, Debug)]
pub struct SessionEvents {
    invalidated: RwSignal<u64>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self { invalidated: RwSignal::new(0) }
    }

    /// Record that the current session was invalidated (e.g. a 401).
    pub fn notify_invalidated(&self) {
        self.invalidated.update(|count| *count += 1);
    }

    /// Reactive read; subscribers re-run when a new invalidation arrives.
    pub fn invalidation_count(&self) -> u64 {
        self.invalidated.get()
    }
}

impl Default for SessionEvents {
    fn default() -> Self {
        Self::new()
    }
}
