//! Client-side validation for the sign-in form.
//!
//! Both fields are required, the email gets a basic syntax check, and the
//! password is capped at [`PASSWORD_MAX_CHARS`] characters. The message
//! constants are the exact strings rendered inline under each field.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::net::types::SignInRequest;

/// Longest accepted password, in characters.
pub const PASSWORD_MAX_CHARS: usize = 15;

/// Message for an empty required field.
pub const REQUIRED: &str = "Required";

/// Message for a malformed email address.
pub const INVALID_EMAIL: &str = "Invalid email address";

/// Message for an over-length password.
pub const PASSWORD_TOO_LONG: &str = "Must be 15 characters or less";

/// Per-field outcome of validating the sign-in form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    /// True when submission may proceed.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate an assembled request. Submission is blocked unless the result
/// `is_clear`.
#[must_use]
pub fn validate_sign_in(request: &SignInRequest) -> FieldErrors {
    FieldErrors {
        email: email_error(&request.email),
        password: password_error(&request.password),
    }
}

/// Inline error for the email field, if any.
#[must_use]
pub fn email_error(email: &str) -> Option<&'static str> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some(REQUIRED);
    }
    if !has_email_syntax(trimmed) {
        return Some(INVALID_EMAIL);
    }
    None
}

/// Inline error for the password field, if any.
#[must_use]
pub fn password_error(password: &str) -> Option<&'static str> {
    if password.is_empty() {
        return Some(REQUIRED);
    }
    if password.chars().count() > PASSWORD_MAX_CHARS {
        return Some(PASSWORD_TOO_LONG);
    }
    None
}

/// Syntax check only: exactly one `@` separating a non-empty local part and
/// domain, with no interior whitespace. Deliverability is the server's
/// problem.
fn has_email_syntax(email: &str) -> bool {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}
