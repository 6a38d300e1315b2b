//! Toast stack rendering the shared notification state.

use leptos::prelude::*;

use crate::state::notifications::{Notifications, Severity};

/// Fixed-position host for active notifications, stacked top-right.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifications = expect_context::<Notifications>();

    view! {
        <div class="toast-host">
            {move || {
                notifications
                    .entries()
                    .get()
                    .into_iter()
                    .map(|notification| {
                        let id = notification.id;
                        let modifier = match notification.severity {
                            Severity::Success => "toast--success",
                            Severity::Error => "toast--error",
                        };
                        view! {
                            <div class=format!("toast {modifier}")>
                                <div class="toast__body">
                                    <span class="toast__title">
                                        {notification.severity.title()}
                                    </span>
                                    <span class="toast__message">{notification.message.clone()}</span>
                                </div>
                                <button
                                    class="toast__close"
                                    on:click=move |_| notifications.dismiss(id)
                                    aria-label="Dismiss notification"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
