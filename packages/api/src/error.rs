//! Unified error type for the Mesto clients.
//!
//! Every client call returns [`Result`]. Failures fall into the categories the
//! UI cares about: the request never completed ([`Error::Network`]), the server
//! refused it ([`Error::Http`]), the input was rejected before sending
//! ([`Error::Validation`]), or the response could not be understood
//! ([`Error::Decode`]). [`Error::kind`] projects any error onto the `Copy`
//! [`ErrorKind`] so UI state can hold it.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Network/protocol failure from reqwest (DNS, TLS, connection reset, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server returned a non-success status.
    #[error("Server responded with {status}: {message}")]
    Http {
        status: StatusCode,
        /// Response body, or the canonical reason when the body is unreadable.
        message: String,
    },

    /// Input rejected client-side; no request was issued.
    #[error("Invalid input: {0}")]
    Validation(String),

    /// Response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A configured base URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Coarse, copyable classification of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Http(u16),
    Validation,
    Decode,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Network(_) => ErrorKind::Network,
            Error::Http { status, .. } => ErrorKind::Http(status.as_u16()),
            Error::Validation(_) | Error::Url(_) => ErrorKind::Validation,
            Error::Decode(_) => ErrorKind::Decode,
        }
    }

    /// HTTP status if the server answered with an error.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Network => write!(f, "network failure"),
            ErrorKind::Http(status) => write!(f, "HTTP {status}"),
            ErrorKind::Validation => write!(f, "invalid input"),
            ErrorKind::Decode => write!(f, "unexpected response"),
        }
    }
}

/// A specialized `Result` type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
