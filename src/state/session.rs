//! Session credential storage and the auth-gate read model.
//!
//! DESIGN
//! ======
//! The credential lives behind the [`CredentialStore`] trait so the route
//! guard, the API client, and the logout action all share one injectable
//! handle ([`Session`]) instead of reaching into the browser cookie jar
//! directly. Browser builds use [`CookieStore`]; tests and native builds
//! substitute [`MemoryStore`].
//!
//! A session counts as authenticated iff a non-empty credential is present.
//! No expiry is tracked and no server round-trip validates the token, so a
//! stale credential is indistinguishable from a live one until an API call
//! rejects it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(any(test, target_arch = "wasm32"))]
use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use std::sync::{Arc, Mutex, PoisonError};

/// Pluggable persistence for the single session credential.
pub trait CredentialStore: Send + Sync {
    /// Synchronous read of the persisted credential, if any.
    fn get(&self) -> Option<String>;

    /// Overwrite any existing credential with `token`.
    fn set(&self, token: &str);

    /// Remove the credential. Clearing an absent credential is not an error.
    fn clear(&self);
}

/// Bytes that may not appear raw inside a cookie value. `%` is included so
/// decoding stays lossless for credentials that already contain one.
#[cfg(any(test, target_arch = "wasm32"))]
const COOKIE_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b',')
    .add(b';')
    .add(b'=')
    .add(b'\\');

/// Percent-encode a credential for `document.cookie`. The token is opaque,
/// so no character can be assumed cookie-safe.
#[cfg(any(test, target_arch = "wasm32"))]
fn encode_cookie_value(raw: &str) -> String {
    utf8_percent_encode(raw, COOKIE_UNSAFE).to_string()
}

/// Extract the value of the cookie named `name` from a raw cookie header
/// and percent-decode it. Only the first `=` in a pair splits key from
/// value, so bare `=` inside a value survives.
#[cfg(any(test, target_arch = "wasm32"))]
fn credential_from_cookie_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| {
            percent_decode_str(value.trim())
                .decode_utf8_lossy()
                .into_owned()
        })
    })
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

#[cfg(target_arch = "wasm32")]
fn write_cookie(cookie: &str) {
    if let Some(doc) = html_document() {
        let _ = doc.set_cookie(cookie);
    }
}

/// Browser store: one session cookie on `path=/`, no expiry, dropped when
/// the browser session ends. Values are percent-encoded on write and
/// decoded on read.
#[derive(Debug, Default, Clone, Copy)]
pub struct CookieStore;

impl CredentialStore for CookieStore {
    fn get(&self) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            let header = html_document().and_then(|doc| doc.cookie().ok())?;
            credential_from_cookie_header(&header, crate::config::AUTH_COOKIE)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            write_cookie(&format!(
                "{}={}; path=/; samesite=lax",
                crate::config::AUTH_COOKIE,
                encode_cookie_value(token)
            ));
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            write_cookie(&format!("{}=; path=/; max-age=0", crate::config::AUTH_COOKIE));
        }
    }
}

/// In-memory store for unit tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: Mutex<Option<String>>,
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Cloneable handle to the shared credential store, provided via context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// Session backed by the browser cookie store.
    #[must_use]
    pub fn browser() -> Self {
        Self::with_store(Arc::new(CookieStore))
    }

    /// Session backed by an explicit store implementation.
    #[must_use]
    pub fn with_store(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Session over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::default()))
    }

    /// Current credential. An empty stored value counts as absent so the
    /// auth gate and the header attachment always agree.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|token| !token.is_empty())
    }

    /// Whether a credential is present. Presence is the entire check.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Store a freshly issued credential, replacing any previous one.
    pub fn set_token(&self, token: &str) {
        self.store.set(token);
    }

    /// Drop the credential. Safe to call with no credential stored.
    pub fn clear(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for Session {
    // The raw credential stays out of logs.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
