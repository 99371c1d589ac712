//! # Filesystem-backed token store
//!
//! [`FileStore`] persists the session token as a plain file. It is used on
//! native targets to keep the user signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── jwt          # the session token, no trailing newline
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/mesto/` |
//! | Linux | `~/.local/share/mesto/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\mesto\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::fs;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::token::{non_empty, TokenStore, TOKEN_KEY};

/// Filesystem-backed TokenStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(TOKEN_KEY)
    }

    fn write(&self, token: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base)?;
        let path = self.token_path();
        fs::write(&path, token)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }
}

impl TokenStore for FileStore {
    fn load(&self) -> Option<String> {
        fs::read_to_string(self.token_path()).ok().and_then(non_empty)
    }

    fn save(&self, token: &str) {
        if let Err(e) = self.write(token) {
            tracing::warn!("Failed to persist session token: {}", e);
        }
    }

    fn clear(&self) {
        match fs::remove_file(self.token_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session token: {}", e),
        }
    }
}
