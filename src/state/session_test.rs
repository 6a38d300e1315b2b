use super::*;

// =============================================================
// MemoryStore
// =============================================================

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::default();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_set_then_get_round_trips() {
    let store = MemoryStore::default();
    store.set("tok-123");
    assert_eq!(store.get().as_deref(), Some("tok-123"));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryStore::default();
    store.set("first");
    store.set("second");
    assert_eq!(store.get().as_deref(), Some("second"));
}

#[test]
fn memory_store_clear_removes_value() {
    let store = MemoryStore::default();
    store.set("tok-123");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clear_when_empty_is_a_no_op() {
    let store = MemoryStore::default();
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

// =============================================================
// Session
// =============================================================

#[test]
fn fresh_session_is_unauthenticated() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn set_token_authenticates() {
    let session = Session::in_memory();
    session.set_token("tok-123");
    assert!(session.is_authenticated());
    assert_eq!(session.token().as_deref(), Some("tok-123"));
}

#[test]
fn empty_stored_token_counts_as_absent() {
    let session = Session::in_memory();
    session.set_token("");
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn clear_always_leaves_the_store_empty() {
    let session = Session::in_memory();
    session.set_token("tok-123");
    session.clear();
    assert!(!session.is_authenticated());
    session.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn cloned_sessions_share_one_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.set_token("tok-shared");
    assert_eq!(other.token().as_deref(), Some("tok-shared"));
    other.clear();
    assert!(!session.is_authenticated());
}

#[test]
fn debug_output_never_contains_the_token() {
    let session = Session::in_memory();
    session.set_token("tok-secret");
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("tok-secret"));
    assert!(rendered.contains("authenticated"));
}

// =============================================================
// credential_from_cookie_header
// =============================================================

#[test]
fn cookie_parser_finds_the_named_cookie() {
    let header = "theme=dark; auth_token=tok-123; lang=en";
    assert_eq!(
        credential_from_cookie_header(header, "auth_token").as_deref(),
        Some("tok-123")
    );
}

#[test]
fn cookie_parser_returns_none_when_absent() {
    assert_eq!(credential_from_cookie_header("theme=dark", "auth_token"), None);
}

#[test]
fn cookie_parser_handles_an_empty_header() {
    assert_eq!(credential_from_cookie_header("", "auth_token"), None);
}

#[test]
fn cookie_parser_trims_surrounding_whitespace() {
    assert_eq!(
        credential_from_cookie_header("a=1;  auth_token=tok-123 ", "auth_token").as_deref(),
        Some("tok-123")
    );
}

#[test]
fn cookie_parser_requires_an_exact_name_match() {
    let header = "xauth_token=evil; auth_token_extra=evil2";
    assert_eq!(credential_from_cookie_header(header, "auth_token"), None);
}

#[test]
fn cookie_parser_keeps_equals_signs_inside_the_value() {
    // Base64-ish tokens can end in `=`; only the first `=` splits key/value.
    assert_eq!(
        credential_from_cookie_header("auth_token=abc==", "auth_token").as_deref(),
        Some("abc==")
    );
}

// =============================================================
// Cookie value encoding
// =============================================================

#[test]
fn encode_cookie_value_escapes_the_separator_characters() {
    let encoded = encode_cookie_value("a;b=c d,e");
    assert!(!encoded.contains(';'));
    assert!(!encoded.contains('='));
    assert!(!encoded.contains(' '));
    assert!(!encoded.contains(','));
}

#[test]
fn encode_cookie_value_leaves_plain_tokens_alone() {
    assert_eq!(encode_cookie_value("tok-123.abc_DEF~x"), "tok-123.abc_DEF~x");
}

#[test]
fn cookie_value_round_trips_an_arbitrary_credential() {
    // The credential is opaque; it may hold separators, percents, quotes,
    // or non-ASCII text and must come back byte for byte.
    let token = "a;b=c d%e\"f\\g\u{fc}";
    let header = format!("auth_token={}", encode_cookie_value(token));
    assert_eq!(
        credential_from_cookie_header(&header, "auth_token").as_deref(),
        Some(token)
    );
}

#[test]
fn cookie_parser_decodes_percent_sequences() {
    assert_eq!(
        credential_from_cookie_header("auth_token=tok%3B123", "auth_token").as_deref(),
        Some("tok;123")
    );
}
