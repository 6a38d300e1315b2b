//! Dashboard page shown behind the auth gate.

use leptos::prelude::*;

/// Placeholder stat cards rendered in the metrics row.
const STAT_CARD_COUNT: usize = 5;

/// Protected landing page. The surrounding chrome comes from the auth
/// gate's `Layout`; this renders only the placeholder metrics row.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard">
            <div class="dashboard__stats">
                {(0..STAT_CARD_COUNT)
                    .map(|_| {
                        view! {
                            <div class="stat-card">
                                <span class="stat-card__badge" aria-hidden="true">
                                    "👤"
                                </span>
                                <div class="stat-card__body">
                                    <span class="stat-card__label">"Account"</span>
                                    <span class="stat-card__value">"666"</span>
                                </div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
