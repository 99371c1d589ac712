//! # Resource client: profile and cards
//!
//! [`Api`] talks to the Mesto resource server. It is cheap to clone (the inner
//! `reqwest::Client` is reference counted), so the UI keeps one per session and
//! derives authorized copies with [`Api::authorized`].
//!
//! ## Endpoints
//!
//! | Method | Verb | Path | Returns |
//! |--------|------|------|---------|
//! | [`get_current_user`](Api::get_current_user) | `GET` | `/users/me` | [`UserProfile`] |
//! | [`update_profile`](Api::update_profile) | `PATCH` | `/users/me` | [`UserProfile`] |
//! | [`update_avatar`](Api::update_avatar) | `PATCH` | `/users/me/avatar` | [`UserProfile`] |
//! | [`list_cards`](Api::list_cards) | `GET` | `/cards` | `Vec<`[`Card`]`>` |
//! | [`create_card`](Api::create_card) | `POST` | `/cards` | [`Card`] |
//! | [`delete_card`](Api::delete_card) | `DELETE` | `/cards/{id}` | `()` |
//! | [`set_like`](Api::set_like) | `PUT` / `DELETE` | `/cards/likes/{id}` | [`Card`] |
//!
//! ## Authorization
//!
//! Requests carry a [`Credential`]. A session token is sent as
//! `Authorization: Bearer <token>`; without one the configured static key is
//! sent verbatim in the `authorization` header, which is what the practicum
//! server expects.
//!
//! Request bodies are validated first; a rejected body yields
//! [`Error::Validation`](crate::Error::Validation) without touching the network.
//! Non-2xx responses become [`Error::Http`](crate::Error::Http). Nothing is
//! retried here.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use store::MestoConfig;
use url::Url;

use crate::error::Result;
use crate::http::{check_status, endpoint, json, parse_base};
use crate::models::{AvatarUpdate, Card, NewCard, ProfileUpdate, UserProfile};

/// How resource requests are authorized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Anonymous,
    ApiKey(String),
    Bearer(String),
}

/// HTTP client for the resource API.
#[derive(Debug, Clone)]
pub struct Api {
    http: reqwest::Client,
    base: Url,
    api_key: Option<String>,
    credential: Credential,
}

impl Api {
    /// Create a client for `config.base_url`.
    pub fn new(config: &MestoConfig) -> Result<Self> {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a client sharing an existing connection pool.
    pub fn with_client(http: reqwest::Client, config: &MestoConfig) -> Result<Self> {
        let api_key = config.api_key.clone().filter(|k| !k.trim().is_empty());
        let credential = match &api_key {
            Some(key) => Credential::ApiKey(key.clone()),
            None => Credential::Anonymous,
        };
        Ok(Self {
            http,
            base: parse_base(&config.base_url)?,
            api_key,
            credential,
        })
    }

    /// A copy authorized by the session token, or by the static key without one.
    pub fn authorized(&self, token: Option<&str>) -> Self {
        let credential = match (token, &self.api_key) {
            (Some(token), _) => Credential::Bearer(token.to_string()),
            (None, Some(key)) => Credential::ApiKey(key.clone()),
            (None, None) => Credential::Anonymous,
        };
        Self {
            credential,
            ..self.clone()
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = endpoint(&self.base, path)?;
        let builder = self.http.request(method, url);
        Ok(match &self.credential {
            Credential::Anonymous => builder,
            Credential::ApiKey(key) => builder.header(AUTHORIZATION, key),
            Credential::Bearer(token) => builder.bearer_auth(token),
        })
    }

    /// Fetch the current user's profile.
    pub async fn get_current_user(&self) -> Result<UserProfile> {
        let response = self.request(Method::GET, "users/me")?.send().await?;
        json(response).await
    }

    /// Replace name and about. The server echoes the full profile.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile> {
        update.validate()?;
        tracing::debug!("Updating profile name to {:?}", update.name);
        let response = self
            .request(Method::PATCH, "users/me")?
            .json(update)
            .send()
            .await?;
        json(response).await
    }

    /// Replace the avatar URL only.
    pub async fn update_avatar(&self, update: &AvatarUpdate) -> Result<UserProfile> {
        update.validate()?;
        let response = self
            .request(Method::PATCH, "users/me/avatar")?
            .json(update)
            .send()
            .await?;
        json(response).await
    }

    /// Fetch every card.
    pub async fn list_cards(&self) -> Result<Vec<Card>> {
        let response = self.request(Method::GET, "cards")?.send().await?;
        json(response).await
    }

    /// Create a card; the result carries the server-assigned id.
    pub async fn create_card(&self, card: &NewCard) -> Result<Card> {
        card.validate()?;
        let response = self
            .request(Method::POST, "cards")?
            .json(card)
            .send()
            .await?;
        json(response).await
    }

    /// Delete a card. Any confirmation body is ignored.
    pub async fn delete_card(&self, id: &str) -> Result<()> {
        let response = self
            .request(Method::DELETE, &format!("cards/{id}"))?
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Like (`PUT`) or unlike (`DELETE`) a card and return it updated.
    pub async fn set_like(&self, id: &str, liked: bool) -> Result<Card> {
        let method = if liked { Method::PUT } else { Method::DELETE };
        let response = self
            .request(method, &format!("cards/likes/{id}"))?
            .send()
            .await?;
        json(response).await
    }

    /// Fetch the profile and the cards concurrently. Each result stands alone.
    pub async fn load_gallery(&self) -> (Result<UserProfile>, Result<Vec<Card>>) {
        futures::join!(self.get_current_user(), self.list_cards())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use httpmock::prelude::*;
    use httpmock::Method::PATCH;
    use serde_json::json;

    fn api(server: &MockServer) -> Api {
        Api::new(&MestoConfig::new(server.url("/v1/cohort-44"), server.base_url())).unwrap()
    }

    fn card_json(id: &str, likes: &[&str]) -> serde_json::Value {
        json!({
            "_id": id,
            "name": "Baikal",
            "link": "https://example.com/baikal.jpg",
            "owner": "u1",
            "likes": likes,
        })
    }

    #[tokio::test]
    async fn test_get_current_user() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cohort-44/users/me");
                then.status(200).json_body(json!({
                    "_id": "u1",
                    "name": "Jacques",
                    "about": "Explorer",
                    "avatar": "https://example.com/a.jpg"
                }));
            })
            .await;

        let profile = api(&server).get_current_user().await.unwrap();
        mock.assert_async().await;
        assert_eq!(profile.name, "Jacques");
    }

    #[tokio::test]
    async fn test_static_key_header() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/cohort-44/cards")
                    .header("authorization", "static-key");
                then.status(200).json_body(json!([]));
            })
            .await;

        let config = MestoConfig::new(server.url("/v1/cohort-44"), server.base_url())
            .with_api_key("static-key");
        let cards = Api::new(&config).unwrap().list_cards().await.unwrap();
        mock.assert_async().await;
        assert!(cards.is_empty());
    }

    #[tokio::test]
    async fn test_session_token_wins_over_key() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/cohort-44/cards")
                    .header("authorization", "Bearer session-token");
                then.status(200).json_body(json!([card_json("c1", &[])]));
            })
            .await;

        let config = MestoConfig::new(server.url("/v1/cohort-44"), server.base_url())
            .with_api_key("static-key");
        let api = Api::new(&config).unwrap().authorized(Some("session-token"));
        assert_eq!(api.credential(), &Credential::Bearer("session-token".into()));

        let cards = api.list_cards().await.unwrap();
        mock.assert_async().await;
        assert_eq!(cards.len(), 1);

        // Dropping the token falls back to the key
        assert_eq!(
            api.authorized(None).credential(),
            &Credential::ApiKey("static-key".into())
        );
    }

    #[tokio::test]
    async fn test_update_profile_sends_json() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/v1/cohort-44/users/me")
                    .header("content-type", "application/json")
                    .json_body(json!({ "name": "Marie", "about": "Physicist" }));
                then.status(200).json_body(json!({
                    "_id": "u1",
                    "name": "Marie",
                    "about": "Physicist",
                    "avatar": "https://example.com/a.jpg"
                }));
            })
            .await;

        let profile = api(&server)
            .update_profile(&ProfileUpdate {
                name: "Marie".into(),
                about: "Physicist".into(),
            })
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(profile.about, "Physicist");
    }

    #[tokio::test]
    async fn test_update_avatar() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(PATCH)
                    .path("/v1/cohort-44/users/me/avatar")
                    .json_body(json!({ "avatar": "https://example.com/new.png" }));
                then.status(200).json_body(json!({
                    "_id": "u1",
                    "name": "Marie",
                    "about": "Physicist",
                    "avatar": "https://example.com/new.png"
                }));
            })
            .await;

        let profile = api(&server)
            .update_avatar(&AvatarUpdate {
                avatar_url: "https://example.com/new.png".into(),
            })
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(profile.avatar_url, "https://example.com/new.png");
    }

    #[tokio::test]
    async fn test_create_card_returns_server_card() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/cohort-44/cards")
                    .json_body(json!({ "name": "Baikal", "link": "https://example.com/baikal.jpg" }));
                then.status(201).json_body(card_json("server-id", &[]));
            })
            .await;

        let card = api(&server)
            .create_card(&NewCard {
                title: "Baikal".into(),
                image_url: "https://example.com/baikal.jpg".into(),
            })
            .await
            .unwrap();
        mock.assert_async().await;
        assert_eq!(card.id, "server-id");
    }

    #[tokio::test]
    async fn test_delete_card_ignores_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/v1/cohort-44/cards/c1");
                then.status(200).json_body(json!({ "message": "Пост удалён" }));
            })
            .await;

        api(&server).delete_card("c1").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_like_dispatches_verb() {
        let server = MockServer::start_async().await;
        let like = server
            .mock_async(|when, then| {
                when.method(PUT).path("/v1/cohort-44/cards/likes/c1");
                then.status(200).json_body(card_json("c1", &["u1"]));
            })
            .await;
        let unlike = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/v1/cohort-44/cards/likes/c1");
                then.status(200).json_body(card_json("c1", &[]));
            })
            .await;

        let api = api(&server);
        let liked = api.set_like("c1", true).await.unwrap();
        assert!(liked.is_liked_by("u1"));
        let unliked = api.set_like("c1", false).await.unwrap();
        assert!(!unliked.is_liked_by("u1"));

        like.assert_async().await;
        unlike.assert_async().await;
    }

    #[tokio::test]
    async fn test_invalid_card_is_not_sent() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/cohort-44/cards");
                then.status(201).json_body(card_json("c1", &[]));
            })
            .await;

        let err = api(&server)
            .create_card(&NewCard {
                title: "   ".into(),
                image_url: "https://example.com/baikal.jpg".into(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_error_status_is_http_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(DELETE).path("/v1/cohort-44/cards/c1");
                then.status(403).body("Forbidden: not the owner");
            })
            .await;

        let err = api(&server).delete_card("c1").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Http(403));
        match err {
            Error::Http { message, .. } => assert_eq!(message, "Forbidden: not the owner"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cohort-44/users/me");
                then.status(200).body("<html>oops</html>");
            })
            .await;

        let err = api(&server).get_current_user().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let config = MestoConfig::new("http://127.0.0.1:1", "http://127.0.0.1:1");
        let err = Api::new(&config).unwrap().list_cards().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_load_gallery_results_are_independent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cohort-44/users/me");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/cohort-44/cards");
                then.status(200).json_body(json!([card_json("c1", &[]), card_json("c2", &[])]));
            })
            .await;

        let (profile, cards) = api(&server).load_gallery().await;
        assert_eq!(profile.unwrap_err().kind(), ErrorKind::Http(500));
        assert_eq!(cards.unwrap().len(), 2);
    }
}
