//! # User models
//!
//! Two views of a Mesto user exist on the wire:
//!
//! ## [`UserProfile`]
//!
//! The resource API's `/users/me` document: `_id`, `name`, `about`, `avatar`
//! (plus a `cohort` field we ignore). It is the singleton "current user" of a
//! session and is replaced wholesale by every profile or avatar edit.
//!
//! ## [`Account`]
//!
//! The auth API's identity record: `_id` and `email`. Both `/signup` and the
//! token check on `/users/me` wrap it as `{ "data": { ... } }`, which
//! [`Envelope`] unwraps.
//!
//! ## [`UserRef`]
//!
//! Card owners and likers arrive either as a bare id string or as a full user
//! object depending on the backend. `UserRef` accepts both and exposes
//! [`UserRef::id`].

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The current user's public profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub about: String,
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

/// Identity returned by the auth server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub email: String,
}

/// `{ "data": T }` wrapper used by the auth server.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

/// A user reference embedded in a card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum UserRef {
    Id(String),
    Profile(UserProfile),
}

impl UserRef {
    pub fn id(&self) -> &str {
        match self {
            UserRef::Id(id) => id,
            UserRef::Profile(profile) => &profile.id,
        }
    }
}

/// Body of `PATCH /users/me`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProfileUpdate {
    pub name: String,
    pub about: String,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.about.trim().is_empty() {
            return Err(Error::validation("name and about are required"));
        }
        Ok(())
    }
}

/// Body of `PATCH /users/me/avatar`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AvatarUpdate {
    #[serde(rename = "avatar")]
    pub avatar_url: String,
}

impl AvatarUpdate {
    pub fn validate(&self) -> Result<()> {
        validate_url(&self.avatar_url)
    }
}

/// Reject blank or non-http(s) image links before they reach the server.
pub(crate) fn validate_url(link: &str) -> Result<()> {
    let parsed = url::Url::parse(link.trim())
        .map_err(|_| Error::validation(format!("{link:?} is not a valid URL")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(Error::validation(format!("unsupported URL scheme {scheme:?}"))),
    }
}
