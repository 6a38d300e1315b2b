//! Wire schema and error taxonomy for the external authentication API.
//!
//! ERROR HANDLING
//! ==============
//! Every API failure folds into the closed [`ApiError`] enum before it
//! reaches a caller, so the UI matches on three shapes instead of
//! optional-chaining through untyped server payloads: `Timeout` and
//! `Transport` for connection-level failures, `Http` for non-2xx responses
//! carrying the server's status and message.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Credentials submitted to the sign-in endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Successful sign-in envelope: `{ "data": { "token": ... }, "message": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInResponse {
    pub data: SignInData,
    pub message: String,
}

/// Payload of a successful sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignInData {
    pub token: String,
}

/// Error payload the server may attach to a non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure modes of an API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request exceeded the fixed request deadline.
    #[error("request timed out")]
    Timeout,
    /// Connection-level failure: unreachable host, aborted transfer, or an
    /// undecodable success body.
    #[error("network error: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Http { status: u16, message: String },
}
