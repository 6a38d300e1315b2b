//! Toast notification state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided at the application root so a sign-in completion that lands after
//! the login page unmounts can still surface its toast, and so toasts
//! survive the navigation that follows a successful login. Entries
//! auto-dismiss in the browser after [`DISMISS_AFTER_MS`]; on the native
//! target dismissal is manual.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;
use uuid::Uuid;

/// How long a toast stays visible before auto-dismissal.
pub const DISMISS_AFTER_MS: u32 = 9_000;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    /// Title line shown on the toast.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Error => "ERROR",
        }
    }
}

/// A single toast entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

/// Context handle over the visible notification stack.
#[derive(Clone, Copy)]
pub struct Notifications {
    entries: RwSignal<Vec<Notification>>,
}

impl Notifications {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
        }
    }

    /// Reactive read access to the visible entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> ReadSignal<Vec<Notification>> {
        self.entries.read_only()
    }

    /// Push a success toast.
    pub fn success(&self, message: impl Into<String>) {
        self.push(Severity::Success, message.into());
    }

    /// Push an error toast.
    pub fn error(&self, message: impl Into<String>) {
        self.push(Severity::Error, message.into());
    }

    fn push(&self, severity: Severity, message: String) {
        let id = Uuid::new_v4();
        self.entries.update(|entries| {
            entries.push(Notification {
                id,
                severity,
                message,
            });
        });
        schedule_dismiss(*self, id);
    }

    /// Remove one entry. Unknown ids are a no-op, so the auto-dismiss timer
    /// and the close button can race without harm.
    pub fn dismiss(&self, id: Uuid) {
        // try_update: the dismiss timer can outlive the reactive owner.
        let _ = self.entries.try_update(|entries| {
            entries.retain(|notification| notification.id != id);
        });
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

/// Dismiss `id` after the fixed display duration. Browser only; native
/// callers dismiss explicitly.
fn schedule_dismiss(notifications: Notifications, id: Uuid) {
    #[cfg(target_arch = "wasm32")]
    {
        let display = std::time::Duration::from_millis(u64::from(DISMISS_AFTER_MS));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(display).await;
            notifications.dismiss(id);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = (notifications, id);
    }
}
