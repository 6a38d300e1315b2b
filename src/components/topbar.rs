//! Header strip above the routed content.

use leptos::prelude::*;

/// Purely presentational top bar showing the signed-in account label.
#[component]
pub fn Topbar() -> impl IntoView {
    view! {
        <header class="topbar">
            <span class="topbar__account">"Admin"</span>
            <span class="topbar__avatar" aria-hidden="true">
                "A"
            </span>
        </header>
    }
}
