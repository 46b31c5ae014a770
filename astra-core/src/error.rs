//! Error types for the AstraAI gateway

use thiserror::Error;

/// The main error type for gateway operations
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or empty user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration errors (missing credential, bad config file)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upstream provider errors (transport failure or non-success status)
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Provider responses that are not JSON or lack the expected fields
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// A specialized Result type for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
