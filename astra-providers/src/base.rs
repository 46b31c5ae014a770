//! Error types shared by provider clients

use thiserror::Error;

/// Error type for provider operations
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type ProviderResult<T> = Result<T, ProviderError>;

impl From<ProviderError> for astra_core::Error {
    fn from(e: ProviderError) -> Self {
        match e {
            ProviderError::Http(err) => astra_core::Error::Upstream(err.to_string()),
            ProviderError::Api(msg) => astra_core::Error::Upstream(msg),
            ProviderError::MalformedResponse(msg) => astra_core::Error::MalformedResponse(msg),
            ProviderError::Config(msg) => astra_core::Error::Config(msg),
        }
    }
}
