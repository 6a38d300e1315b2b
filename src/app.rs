//! Root application component with routing, context providers, and the
//! auth gate for protected routes.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{layout::Layout, toast::ToastHost};
use crate::config;
use crate::net::api::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::{nav::NavigationIntent, notifications::Notifications, session::Session};

/// Root application component.
///
/// Provides the shared session, API client, notification, and
/// navigation-intent contexts, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::browser();
    provide_context(session.clone());
    provide_context(ApiClient::new(config::api_base_url(), session));
    provide_context(Notifications::new());
    provide_context(NavigationIntent::new());

    view! {
        <Title text="Admin Console"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage/>
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </Router>

        <ToastHost/>
    }
}

/// Auth gate for protected routes.
///
/// Reads the session store once at render time. With a credential present
/// the requested view renders inside the application chrome; otherwise the
/// attempted path is recorded as navigation intent and the visitor is sent
/// to the login screen, replacing the current history entry so the blocked
/// URL does not linger behind the back button. Presence of the credential
/// is the entire check; nothing validates it against the server.
#[component]
fn RequireAuth(children: Children) -> impl IntoView {
    let session = expect_context::<Session>();
    let intent = expect_context::<NavigationIntent>();
    let location = use_location();
    let navigate = use_navigate();

    let authenticated = session.is_authenticated();

    // Navigation must not run while the router is still rendering.
    Effect::new(move || {
        if !authenticated {
            intent.remember(location.pathname.get_untracked());
            navigate(
                config::LOGIN_ROUTE,
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });

    authenticated.then(|| {
        view! { <Layout>{children()}</Layout> }
    })
}
