//! # Session token persistence
//!
//! The session token issued by the auth server is the only piece of state Mesto
//! keeps across reloads. [`TokenStore`] abstracts where it lives so the same
//! session logic works against browser `localStorage` ([`crate::LocalStorage`]),
//! a file under the platform data directory ([`crate::FileStore`]), or memory
//! ([`crate::MemoryStore`]) in tests.
//!
//! Every backend stores a single string under [`TOKEN_KEY`]. Reads of an empty or
//! whitespace-only string are reported as "no token".

/// Fixed key under which the session token is stored.
pub const TOKEN_KEY: &str = "jwt";

/// Durable storage for the session token.
///
/// Implementations swallow their own I/O failures: a store that cannot be
/// read behaves like an empty one, and a failed write is logged and dropped.
pub trait TokenStore {
    /// Return the stored token, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    fn save(&self, token: &str);

    /// Remove the stored token.
    fn clear(&self);
}

/// Treat blank values as absent. Anything else comes back exactly as stored.
pub(crate) fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
