//! Application chrome wrapped around every protected view.

use leptos::prelude::*;

use super::sidebar::Sidebar;
use super::topbar::Topbar;

/// Sidebar + topbar shell with the routed content in the middle.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <div class="layout__main">
                <Topbar/>
                <main class="layout__content">{children()}</main>
            </div>
        </div>
    }
}
