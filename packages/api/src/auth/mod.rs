//! # Auth client: accounts and the session token
//!
//! [`Auth`] wraps the separate authentication server and the durable store that
//! keeps the issued token between visits.
//!
//! | Method | Verb | Path | Returns |
//! |--------|------|------|---------|
//! | [`sign_up`](Auth::sign_up) | `POST` | `/signup` | [`Account`] |
//! | [`sign_in`](Auth::sign_in) | `POST` | `/signin` | [`SignIn`] (the token) |
//! | [`check_token`](Auth::check_token) | `GET` | `/users/me` | [`Account`] |
//!
//! [`persist_token`](Auth::persist_token), [`load_token`](Auth::load_token) and
//! [`clear_token`](Auth::clear_token) delegate to the [`TokenStore`]. A stored
//! token proves nothing until [`check_token`](Auth::check_token) accepts it.

mod session;

pub use session::{Credentials, SignIn};

use reqwest::{Method, RequestBuilder};
use store::{MestoConfig, TokenStore};
use url::Url;

use crate::error::Result;
use crate::http::{endpoint, json, parse_base};
use crate::models::{Account, Envelope};

/// HTTP client for the auth API plus token persistence.
#[derive(Debug, Clone)]
pub struct Auth<S> {
    http: reqwest::Client,
    base: Url,
    tokens: S,
}

impl<S: TokenStore> Auth<S> {
    /// Create a client for `config.auth_base_url` backed by `tokens`.
    pub fn new(config: &MestoConfig, tokens: S) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), config, tokens)
    }

    pub fn with_client(http: reqwest::Client, config: &MestoConfig, tokens: S) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base(&config.auth_base_url)?,
            tokens,
        })
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = endpoint(&self.base, path)?;
        Ok(self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json"))
    }

    /// Register a new account. No token is issued.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<Account> {
        credentials.validate()?;
        let response = self
            .request(Method::POST, "signup")?
            .json(credentials)
            .send()
            .await?;
        let envelope: Envelope<Account> = json(response).await?;
        tracing::info!("Registered account {}", envelope.data.email);
        Ok(envelope.data)
    }

    /// Exchange credentials for a session token.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<SignIn> {
        credentials.validate()?;
        let response = self
            .request(Method::POST, "signin")?
            .json(credentials)
            .send()
            .await?;
        json(response).await
    }

    /// Ask the server who owns `token`. Fails if the token is no longer valid.
    pub async fn check_token(&self, token: &str) -> Result<Account> {
        let response = self
            .request(Method::GET, "users/me")?
            .bearer_auth(token)
            .send()
            .await?;
        let envelope: Envelope<Account> = json(response).await?;
        Ok(envelope.data)
    }

    pub fn persist_token(&self, token: &str) {
        self.tokens.save(token);
    }

    pub fn load_token(&self) -> Option<String> {
        self.tokens.load()
    }

    pub fn clear_token(&self) {
        self.tokens.clear();
    }
}
