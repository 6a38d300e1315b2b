use super::*;

#[test]
fn default_base_url_has_no_trailing_slash() {
    assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
}

#[test]
fn sign_in_path_is_rooted() {
    assert!(SIGN_IN_PATH.starts_with('/'));
}

#[test]
fn login_and_dashboard_routes_are_distinct() {
    assert_ne!(LOGIN_ROUTE, DASHBOARD_ROUTE);
}

#[test]
fn api_base_url_is_never_empty() {
    assert!(!api_base_url().is_empty());
}

#[test]
fn persisted_keys_stay_stable_across_releases() {
    // Renaming either key silently discards what users already stored.
    assert_eq!(AUTH_COOKIE, "auth_token");
    assert_eq!(THEME_STORAGE_KEY, "admin_console_dark");
}
