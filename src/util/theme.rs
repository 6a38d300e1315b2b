//! Dark mode preference handling.
//!
//! The choice is resolved once at mount and applied as a `data-theme`
//! attribute on `<html>` that the stylesheet keys its custom properties
//! off. The sidebar toggle flips it and persists the choice under
//! [`crate::config::THEME_STORAGE_KEY`].
//!
//! DESIGN
//! ======
//! Precedence is split from browser I/O: [`resolve`] is a pure function
//! over the stored string and the system flag, so the rules are testable
//! on the native target, where the storage and media query reads compile
//! to a constant `false`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Decide the starting state. An explicit stored choice (`"true"` or
/// `"false"`, as written by [`toggle`]) wins; any other or missing value
/// follows the system preference.
#[cfg(any(test, target_arch = "wasm32"))]
fn resolve(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => system_dark,
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn stored_choice() -> Option<String> {
    local_storage()?
        .get_item(crate::config::THEME_STORAGE_KEY)
        .ok()
        .flatten()
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .is_some_and(|query| query.matches())
}

#[cfg(target_arch = "wasm32")]
fn persist(dark: bool) {
    if let Some(storage) = local_storage() {
        let value = if dark { "true" } else { "false" };
        let _ = storage.set_item(crate::config::THEME_STORAGE_KEY, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(dark: bool) {
    let _ = dark;
}

/// Dark mode state to start from, before any toggle this visit.
#[must_use]
pub fn read_preference() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        resolve(stored_choice().as_deref(), system_prefers_dark())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        false
    }
}

/// Mark the active theme on `<html>` for the stylesheet.
pub fn apply(dark: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.document_element());
        if let Some(root) = root {
            let theme = if dark { "dark" } else { "light" };
            let _ = root.set_attribute("data-theme", theme);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, persist the choice, and return the new state.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    persist(next);
    next
}
