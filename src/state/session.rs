//! Auth token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only state that outlives a page load. Screens get
//! it through a [`SessionStore`] passed in explicitly (the app provides a
//! [`BrowserSession`] via context) instead of reaching for `localStorage`
//! themselves.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort: a blocked or missing `localStorage` reads
//! as signed-out and failed writes are logged, never raised.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "csr")]
use crate::config::TOKEN_STORAGE_KEY;

/// Read/write/clear access to the persisted auth token.
pub trait SessionStore {
    /// Current token; empty values read as `None`.
    fn read(&self) -> Option<String>;
    /// Persist `token`, replacing any previous one.
    fn write(&self, token: &str);
    /// Remove the token.
    fn clear(&self);

    fn is_signed_in(&self) -> bool {
        self.read().is_some()
    }
}

/// [`SessionStore`] backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserSession;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSession {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let token = local_storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()?;
            non_empty(token)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn write(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not saved");
                return;
            };
            if storage.set_item(TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to save session token");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                if storage.remove_item(TOKEN_STORAGE_KEY).is_err() {
                    log::warn!("failed to clear session token");
                }
            }
        }
    }
}

/// `Some(token)` unless the token is empty.
pub fn non_empty(token: String) -> Option<String> {
    if token.is_empty() { None } else { Some(token) }
}
