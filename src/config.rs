//! Build-time configuration and shared constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser has no runtime environment to read, so the API base address
//! is resolved at compile time from `ADMIN_API_BASE_URL`. Everything else is
//! a fixed constant shared between the router, the session store, and the
//! API client so the three never drift apart.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Fallback API base address when `ADMIN_API_BASE_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Sign-in endpoint path on the external API.
pub const SIGN_IN_PATH: &str = "/login";

/// Upper bound on any single API request before it fails with a timeout.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Route serving the login form.
pub const LOGIN_ROUTE: &str = "/login";

/// Default protected route, where a fresh login lands.
pub const DASHBOARD_ROUTE: &str = "/";

/// Cookie key holding the session credential.
pub const AUTH_COOKIE: &str = "auth_token";

/// `localStorage` key persisting the dark mode choice.
pub const THEME_STORAGE_KEY: &str = "admin_console_dark";

/// External API base address, baked in at compile time.
#[must_use]
pub fn api_base_url() -> &'static str {
    option_env!("ADMIN_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL)
}
