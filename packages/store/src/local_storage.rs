//! # Browser `localStorage` token store
//!
//! [`LocalStorage`] is the [`TokenStore`] used on the **web platform**. The
//! token is kept in `window.localStorage` under a single key, so it survives
//! page reloads and is shared by every tab on the same origin.
//!
//! ## Handle management
//!
//! The struct only remembers the key. It looks up `window.localStorage` on
//! every call because `web_sys::Storage` is not `Send` and the browser hands
//! out the same object anyway.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, disabled cookies, quota). Reads
//! then return `None` and writes are dropped with a warning, so the app falls
//! back to asking the user to sign in.

use web_sys::Storage;

use crate::token::{non_empty, TokenStore, TOKEN_KEY};

/// `localStorage`-backed TokenStore for the web platform.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    /// Create a store under the default [`TOKEN_KEY`].
    pub fn new() -> Self {
        Self::with_key(TOKEN_KEY)
    }

    /// Create a store under a custom key.
    pub fn with_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
        }
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl Default for LocalStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for LocalStorage {
    fn load(&self) -> Option<String> {
        let storage = Self::storage()?;
        storage.get_item(&self.key).ok()?.and_then(non_empty)
    }

    fn save(&self, token: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session token not persisted");
            return;
        };
        if storage.set_item(&self.key, token).is_err() {
            tracing::warn!("Failed to write session token to localStorage");
        }
    }

    fn clear(&self) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.remove_item(&self.key).is_err() {
            tracing::warn!("Failed to remove session token from localStorage");
        }
    }
}
