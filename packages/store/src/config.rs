//! # Client configuration: `mesto.toml`
//!
//! Holds the endpoints and credentials the HTTP clients need. Nothing here is a
//! compile-time constant any more: values are layered with the [`config`] crate.
//!
//! ## Sources, lowest priority first
//!
//! 1. Built-in defaults (the public Mesto practicum servers, no API key).
//! 2. An optional TOML document. Native builds read it from a file, the web
//!    build embeds it with `include_str!`.
//! 3. Environment variables prefixed with `MESTO_` (native only in practice),
//!    after loading a `.env` file through `dotenvy`.
//!
//! ## Structure
//!
//! ```toml
//! base_url = "https://mesto.nomoreparties.co/v1/cohort-44"
//! auth_base_url = "https://auth.nomoreparties.co"
//! # api_key = "..."   # only used while no session token is present
//! ```
//!
//! | Key | Env var | Purpose |
//! |-----|---------|---------|
//! | `base_url` | `MESTO_BASE_URL` | Resource API root (`/users/me`, `/cards`, ...). |
//! | `api_key` | `MESTO_API_KEY` | Static `authorization` header for the resource API. |
//! | `auth_base_url` | `MESTO_AUTH_BASE_URL` | Auth API root (`/signup`, `/signin`, `/users/me`). |

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

pub const DEFAULT_BASE_URL: &str = "https://mesto.nomoreparties.co/v1/cohort-44";
pub const DEFAULT_AUTH_BASE_URL: &str = "https://auth.nomoreparties.co";

/// Endpoints and credentials for the resource and auth clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MestoConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Static key for the resource API. A session token takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_auth_base_url")]
    pub auth_base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_auth_base_url() -> String {
    DEFAULT_AUTH_BASE_URL.to_string()
}

impl Default for MestoConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            auth_base_url: default_auth_base_url(),
        }
    }
}

impl MestoConfig {
    /// Create a config pointing both clients at explicit roots.
    pub fn new(base_url: impl Into<String>, auth_base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            auth_base_url: auth_base_url.into(),
        }
    }

    /// Builder method to set the static API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "mesto.toml"
    }

    /// Defaults overlaid with a TOML document. Environment is ignored.
    pub fn from_toml(s: &str) -> Result<Self, StoreError> {
        let config = Self::defaults()?
            .add_source(File::from_str(s, FileFormat::Toml))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Full layered load: defaults, optional TOML, then `MESTO_*` variables.
    pub fn load(toml: Option<&str>) -> Result<Self, StoreError> {
        #[cfg(not(target_arch = "wasm32"))]
        dotenvy::dotenv().ok();

        let mut builder = Self::defaults()?;
        if let Some(s) = toml {
            builder = builder.add_source(File::from_str(s, FileFormat::Toml));
        }
        let config = builder
            .add_source(Environment::with_prefix("MESTO"))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load from `mesto.toml` in the working directory if it exists.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file() -> Result<Self, StoreError> {
        match std::fs::read_to_string(Self::filename()) {
            Ok(s) => Self::load(Some(&s)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::load(None),
            Err(e) => Err(e.into()),
        }
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, StoreError> {
        Ok(Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("auth_base_url", DEFAULT_AUTH_BASE_URL)?)
    }
}
