//! Navigation intent carried across the login redirect.
//!
//! The auth gate records the path an unauthenticated visitor tried to reach;
//! the next successful login consumes it exactly once and lands there
//! instead of the default dashboard. Nothing is persisted, so a hard reload
//! of the login page falls back to the default destination.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos::prelude::*;

/// Context-provided holder for the originally requested protected path.
#[derive(Clone, Copy)]
pub struct NavigationIntent(RwSignal<Option<String>>);

impl NavigationIntent {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(None))
    }

    /// Record the path the visitor was turned away from, replacing any
    /// earlier intent.
    pub fn remember(&self, path: String) {
        self.0.set(Some(path));
    }

    /// Consume the pending intent, leaving nothing behind for later logins.
    pub fn take(&self) -> Option<String> {
        self.0.try_update(Option::take).flatten()
    }
}

impl Default for NavigationIntent {
    fn default() -> Self {
        Self::new()
    }
}
