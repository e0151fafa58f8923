//! Error types for restoplan-store

use thiserror::Error;

/// Errors raised by artifact storage backends
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend is misconfigured; fatal before any scoring is attempted
    #[error("Store configuration error: {0}")]
    Config(String),

    /// Filesystem IO failure
    #[error("Artifact IO failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failure against the cloud backend
    #[error("Cloud request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Cloud backend answered with a non-success status
    #[error("Cloud backend returned {status} for '{object}'")]
    CloudStatus { status: u16, object: String },

    /// Listing response could not be decoded
    #[error("Failed to decode listing response: {0}")]
    Listing(#[from] serde_json::Error),

    /// A named bundle file is missing from the backend
    #[error("Artifact not found: {0}")]
    NotFound(String),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
