//! Session-token persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only credential the client holds. Its presence alone means
//! "authenticated"; there is no expiry or refresh handling on this side. Pages,
//! the auth gate, and the API client all reach the token through a `Session`
//! handle provided via context, never through ambient storage lookups, so the
//! whole auth flow can be exercised in tests with `MemoryTokenStore`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

/// Backing storage for the session token.
pub trait TokenStore: Send + Sync {
    /// Read the raw stored value, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn store(&self, token: &str);
    /// Remove the stored value.
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
///
/// Without the `csr` feature there is no browser storage, so the store is
/// always empty and writes are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(crate::config::TOKEN_STORAGE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; session token not persisted");
                return;
            };
            if storage.set_item(crate::config::TOKEN_STORAGE_KEY, token).is_err() {
                log::warn!("failed to persist session token");
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
                let _ = storage.remove_item(crate::config::TOKEN_STORAGE_KEY);
            }
        }
    }
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Shared handle to the session token.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// Session persisted in browser local storage.
    pub fn local() -> Self {
        Self::new(Arc::new(LocalStorageTokenStore))
    }

    /// Session held in memory, starting empty.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    /// The current token. Empty or whitespace-only values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a token issued by login or registration. Blank tokens are ignored.
    pub fn sign_in(&self, token: &str) {
        if token.trim().is_empty() {
            return;
        }
        self.store.store(token);
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
