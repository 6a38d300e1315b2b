use super::*;

use crate::net::types::SignInRequest;

// =============================================================
// email_error
// =============================================================

#[test]
fn accepts_a_plain_address() {
    assert_eq!(email_error("admin@example.com"), None);
}

#[test]
fn empty_email_is_required() {
    assert_eq!(email_error(""), Some(REQUIRED));
    assert_eq!(email_error("   "), Some(REQUIRED));
}

#[test]
fn missing_at_sign_is_invalid() {
    assert_eq!(email_error("admin.example.com"), Some(INVALID_EMAIL));
}

#[test]
fn empty_local_part_is_invalid() {
    assert_eq!(email_error("@example.com"), Some(INVALID_EMAIL));
}

#[test]
fn empty_domain_is_invalid() {
    assert_eq!(email_error("admin@"), Some(INVALID_EMAIL));
}

#[test]
fn double_at_sign_is_invalid() {
    assert_eq!(email_error("admin@corp@example.com"), Some(INVALID_EMAIL));
}

#[test]
fn interior_whitespace_is_invalid() {
    assert_eq!(email_error("ad min@example.com"), Some(INVALID_EMAIL));
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(email_error("  admin@example.com "), None);
}

// =============================================================
// password_error
// =============================================================

#[test]
fn empty_password_is_required() {
    assert_eq!(password_error(""), Some(REQUIRED));
}

#[test]
fn password_at_the_cap_passes() {
    assert_eq!(password_error(&"a".repeat(PASSWORD_MAX_CHARS)), None);
}

#[test]
fn password_over_the_cap_is_rejected() {
    assert_eq!(
        password_error(&"a".repeat(PASSWORD_MAX_CHARS + 1)),
        Some(PASSWORD_TOO_LONG)
    );
}

#[test]
fn password_cap_counts_characters_not_bytes() {
    // 15 two-byte characters stay within the cap.
    let password = "é".repeat(PASSWORD_MAX_CHARS);
    assert!(password.len() > PASSWORD_MAX_CHARS);
    assert_eq!(password_error(&password), None);
}

// =============================================================
// validate_sign_in
// =============================================================

fn request(email: &str, password: &str) -> SignInRequest {
    SignInRequest {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

#[test]
fn valid_credentials_are_clear() {
    let errors = validate_sign_in(&request("admin@example.com", "hunter2"));
    assert_eq!(errors, FieldErrors::default());
    assert!(errors.is_clear());
}

#[test]
fn an_invalid_email_blocks_submission() {
    let errors = validate_sign_in(&request("not-an-email", "hunter2"));
    assert_eq!(errors.email, Some(INVALID_EMAIL));
    assert!(!errors.is_clear());
}

#[test]
fn both_fields_report_independently() {
    let errors = validate_sign_in(&request("", &"a".repeat(16)));
    assert_eq!(errors.email, Some(REQUIRED));
    assert_eq!(errors.password, Some(PASSWORD_TOO_LONG));
}

#[test]
fn inline_messages_match_the_form_copy() {
    assert_eq!(REQUIRED, "Required");
    assert_eq!(INVALID_EMAIL, "Invalid email address");
    assert_eq!(PASSWORD_TOO_LONG, "Must be 15 characters or less");
}
