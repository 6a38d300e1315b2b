//! Login page: credential form, sign-in dispatch, and post-login routing.
//!
//! DESIGN
//! ======
//! Validation runs before submission and blocks it entirely; the busy flag
//! serializes at most one in-flight sign-in per form instance. After the
//! await, page-local signals are only written through `try_*` accessors
//! because the page may already be unmounted when the response lands.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_input::TextInput;
use crate::config;
use crate::net::api::ApiClient;
use crate::net::types::SignInRequest;
use crate::state::nav::NavigationIntent;
use crate::state::notifications::Notifications;
use crate::state::session::Session;
use crate::util::validate;

/// Toast text after a successful sign-in.
const SIGNED_IN_MESSAGE: &str = "You can access your dashboard now!";

/// Where a successful login lands: the recorded intent, else the dashboard.
fn post_login_destination(intent: Option<String>) -> String {
    intent.unwrap_or_else(|| config::DASHBOARD_ROUTE.to_owned())
}

/// Credential entry screen for unauthenticated visitors.
#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let notifications = expect_context::<Notifications>();
    let intent = expect_context::<NavigationIntent>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password_error = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }

        let request = SignInRequest {
            email: email.get().trim().to_owned(),
            password: password.get(),
        };
        let errors = validate::validate_sign_in(&request);
        email_error.set(errors.email);
        password_error.set(errors.password);
        if !errors.is_clear() {
            return;
        }

        busy.set(true);
        let api = api.clone();
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api.sign_in(&request).await;
            // The form may be gone by the time the response lands.
            let _ = busy.try_set(false);
            match result {
                Ok(response) => {
                    session.set_token(&response.data.token);
                    notifications.success(SIGNED_IN_MESSAGE);
                    navigate(
                        &post_login_destination(intent.take()),
                        NavigateOptions::default(),
                    );
                }
                Err(error) => {
                    leptos::logging::warn!("sign-in failed: {error}");
                    notifications.error(error.to_string());
                }
            }
        });
    };

    view! {
        <div class="login">
            <div class="login__brand">
                <span class="login__version">"v1.0.0"</span>
            </div>
            <div class="login__main">
                <form class="login__form" on:submit=on_submit>
                    <h1 class="login__heading">"Log In"</h1>
                    <TextInput
                        id="email"
                        placeholder="Username"
                        value=email
                        error=email_error
                    />
                    <TextInput
                        id="password"
                        placeholder="Password"
                        input_type="password"
                        value=password
                        error=password_error
                    />
                    <button class="login__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Log In" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
