//! Platform token store.
//!
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Desktop / Mobile** (native): a file under the user data dir via [`store::FileStore`]

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStore = store::FileStore;

/// Without a browser backend the session lasts as long as the page.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the token store for the current platform.
///
/// On native targets the token lives at `<data_dir>/mesto/jwt`.
pub fn make_token_store() -> PlatformStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStorage::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("mesto");
        store::FileStore::new(base)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
}
