//! Errors raised by the storage and configuration layer.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file-backed store failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be assembled from its sources.
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),
}
