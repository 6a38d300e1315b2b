//! HTTP client for the external admin API.
//!
//! Browser builds issue real requests via `gloo-net`; on the native target
//! (unit tests) calls resolve to a transport error instead of attempting
//! I/O.
//!
//! ERROR HANDLING
//! ==============
//! Callers see [`ApiError`] and nothing else: connection and decode
//! problems become `Transport`, the fixed deadline becomes `Timeout`, and
//! non-2xx statuses become `Http` carrying the server's message when the
//! body supplied one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, target_arch = "wasm32"))]
use super::types::ErrorBody;
use super::types::{ApiError, SignInRequest, SignInResponse};
use crate::state::session::Session;

/// Header carrying the session credential on authenticated calls.
pub const AUTH_HEADER: &str = "x-access-token";

/// Strip trailing `/` so joining an endpoint path stays single-slash.
fn normalize_base_url(raw: &str) -> String {
    raw.trim_end_matches('/').to_owned()
}

/// Fallback failure line when the server sent no message body.
#[cfg(any(test, target_arch = "wasm32"))]
fn http_failure_message(status: u16) -> String {
    format!("request failed with status {status}")
}

/// Map a non-2xx status and optional error body to an [`ApiError`].
#[cfg(any(test, target_arch = "wasm32"))]
fn error_from_status(status: u16, body: Option<ErrorBody>) -> ApiError {
    let message = body
        .and_then(|body| body.message)
        .unwrap_or_else(|| http_failure_message(status));
    ApiError::Http { status, message }
}

/// Credential header for an outgoing request, when the session holds one.
/// Absent and empty credentials attach nothing.
#[cfg(any(test, target_arch = "wasm32"))]
fn auth_header(session: &Session) -> Option<(&'static str, String)> {
    session.token().map(|token| (AUTH_HEADER, token))
}

/// Race `future` against `deadline`. Returns `None` when the deadline
/// fires first; the abandoned future is dropped, not cancelled at its
/// source.
#[cfg(any(test, target_arch = "wasm32"))]
async fn first_of<F, D>(future: F, deadline: D) -> Option<F::Output>
where
    F: std::future::Future,
    D: std::future::Future<Output = ()>,
{
    use futures::future::{Either, select};

    futures::pin_mut!(future, deadline);
    match select(future, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}

/// Client for the external API: a base address plus the shared session
/// handle used to attach credentials.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Build a client for `base_url`, attaching credentials from `session`.
    #[must_use]
    pub fn new(base_url: &str, session: Session) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            session,
        }
    }

    /// Absolute URL of the sign-in endpoint.
    #[must_use]
    pub fn sign_in_url(&self) -> String {
        format!("{}{}", self.base_url, crate::config::SIGN_IN_PATH)
    }

    /// Exchange credentials for a session token. Exactly one POST per call,
    /// no retries.
    ///
    /// # Errors
    ///
    /// [`ApiError::Transport`] on connection or decode failure,
    /// [`ApiError::Timeout`] when the deadline elapses before the response
    /// body is fully decoded, and [`ApiError::Http`] for any non-2xx
    /// response.
    pub async fn sign_in(&self, request: &SignInRequest) -> Result<SignInResponse, ApiError> {
        #[cfg(target_arch = "wasm32")]
        {
            self.post_json(&self.sign_in_url(), request).await
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }

    /// POST `body` as JSON, attaching the session credential when present,
    /// and decode a 2xx response body as `T`.
    #[cfg(target_arch = "wasm32")]
    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: serde::Serialize,
        T: serde::de::DeserializeOwned,
    {
        let mut builder = gloo_net::http::Request::post(url);
        if let Some((name, value)) = auth_header(&self.session) {
            builder = builder.header(name, &value);
        }
        let request = builder
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // The deadline spans send and body decode; a stalled body times
        // out exactly like a stalled connect.
        let exchange = async {
            let response = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !response.ok() {
                let status = response.status();
                let error_body = response.json::<ErrorBody>().await.ok();
                return Err(error_from_status(status, error_body));
            }
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))
        };
        let deadline = gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
            crate::config::REQUEST_TIMEOUT_MS,
        )));
        match first_of(exchange, deadline).await {
            Some(outcome) => outcome,
            None => Err(ApiError::Timeout),
        }
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
