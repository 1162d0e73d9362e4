//! Error types for service testing and configuration access.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration or testing a service.
///
/// Expected precondition failures (missing service, unknown service, no
/// tester) are not errors: they are reported as a [`TestResult`](crate::TestResult).
/// An `Error` means a tester failed in a way it could not describe itself.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request to a provider failed before a response arrived.
    #[error("request failed: {0}")]
    Request(String),

    /// Endpoint in the provider settings could not be turned into a URL.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// Provider configuration file could not be parsed.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // URLs may carry path tokens
        let err = err.without_url();
        if err.is_builder() {
            Self::InvalidEndpoint(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::ConfigParse(err.to_string())
    }
}
