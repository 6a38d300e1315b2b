//! # admin-console
//!
//! Leptos + WASM single-page admin application: a login screen backed by an
//! external sign-in API, and a dashboard shell gated behind a client-side
//! session credential.
//!
//! ARCHITECTURE
//! ============
//! `app` owns routing, context providers, and the auth gate. `pages` are
//! route-level screens, `components` render chrome and form controls,
//! `state` holds the context-provided session/notification/intent models,
//! `net` speaks to the external API, and `util` isolates browser-specific
//! concerns behind no-op native fallbacks so unit tests run on the host.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point invoked by the generated WASM loader.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
