//! Left navigation rail: brand, nav links, theme toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the logout action: clearing the session credential and returning to
//! the login screen. Logout is purely client-side, no server round-trip.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config;
use crate::state::session::Session;
use crate::util::theme;

/// Fixed navigation rail on the left edge of the protected layout.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();
    let navigate = use_navigate();

    let dark = RwSignal::new(theme::read_preference());
    theme::apply(dark.get_untracked());

    let on_toggle_theme = move |_| {
        let next = theme::toggle(dark.get_untracked());
        dark.set(next);
    };

    let on_logout = move |_| {
        session.clear();
        navigate(config::LOGIN_ROUTE, NavigateOptions::default());
    };

    let dashboard_current = move || {
        (location.pathname.get() == config::DASHBOARD_ROUTE).then_some("page")
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__top">
                <span class="sidebar__brand">"Admin Console"</span>
                <button
                    class="sidebar__theme"
                    on:click=on_toggle_theme
                    title="Toggle dark mode"
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
            </div>
            <nav class="sidebar__nav">
                <a href=config::DASHBOARD_ROUTE aria-current=dashboard_current>
                    "My Dashboard"
                </a>
            </nav>
            <button class="sidebar__logout" on:click=on_logout>
                "Log Out"
            </button>
        </aside>
    }
}
