use serde::{Deserialize, Serialize};

use super::user::{validate_url, UserRef};
use crate::error::{Error, Result};

/// A photo card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "name")]
    pub title: String,
    #[serde(rename = "link")]
    pub image_url: String,
    pub owner: UserRef,
    #[serde(default)]
    pub likes: Vec<UserRef>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Card {
    pub fn owner_id(&self) -> &str {
        self.owner.id()
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.owner_id() == user_id
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.likes.iter().any(|u| u.id() == user_id)
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

/// Body of `POST /cards`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewCard {
    #[serde(rename = "name")]
    pub title: String,
    #[serde(rename = "link")]
    pub image_url: String,
}

impl NewCard {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(Error::validation("title is required"));
        }
        validate_url(&self.image_url)
    }
}
