//! Session store holding the bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only piece of session state. It lives in one fixed
//! `localStorage` slot in the browser; everything else reads it through the
//! `SessionStore` trait so tests and embedders can swap the backend.
//!
//! INVARIANTS
//! ==========
//! - At most one token is stored at any time; `save` overwrites.
//! - `clear` is idempotent.
//! - Presence of a token is the only authorization signal on the client.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{PoisonError, RwLock};

use crate::config::TOKEN_STORAGE_KEY;

/// Synchronous get/set/remove over the single token slot.
pub trait SessionStore: Send + Sync {
    /// Write `token` into the slot, replacing any previous value.
    fn save(&self, token: &str);

    /// The stored token, if any.
    fn read(&self) -> Option<String>;

    /// Remove the stored token. No-op when the slot is already empty.
    fn clear(&self);
}

// =============================================================
// Browser localStorage backend
// =============================================================

/// `window.localStorage` backed store.
///
/// Inert outside the `hydrate` build: reads return `None` and writes are
/// dropped, since the server never sees the browser's storage.
#[derive(Clone, Debug)]
pub struct BrowserSessionStore {
    key: String,
}

impl Default for BrowserSessionStore {
    fn default() -> Self {
        Self::new(TOKEN_STORAGE_KEY)
    }
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = local_storage() else {
                return;
            };
            if storage.set_item(&self.key, token).is_ok() {
                leptos::logging::log!("session token saved");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(&self.key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(&self.key);
                leptos::logging::log!("session token cleared");
            }
        }
    }
}

// =============================================================
// In-memory backend
// =============================================================

/// Process-local store. Used by tests and by hosts without a browser.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: RwLock<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: RwLock::new(Some(token.into())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn read(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn clear(&self) {
        self.token.write().unwrap_or_else(PoisonError::into_inner).take();
    }
}

// =============================================================
// Derived session status
// =============================================================

/// Authentication state derived from the store at a point in time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Unauthenticated,
    Authenticated { token: String },
}

impl SessionStatus {
    /// Snapshot the store. The token is not validated here; the server
    /// decides validity when it is presented. An empty slot value counts as
    /// no token.
    pub fn from_store(store: &dyn SessionStore) -> Self {
        match store.read() {
            Some(token) if !token.is_empty() => Self::Authenticated { token },
            _ => Self::Unauthenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Self::Authenticated { token } => Some(token),
            Self::Unauthenticated => None,
        }
    }
}
