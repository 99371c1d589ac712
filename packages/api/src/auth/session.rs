//! Session data types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Email and password submitted to `/signup` and `/signin`.
#[derive(Clone, Serialize, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Both fields are required; the email must at least look like one.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err(Error::validation("email and password are required"));
        }
        if !email.contains('@') {
            return Err(Error::validation("email is not valid"));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `/signin` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SignIn {
    pub token: String,
}
