//! Error handling for the latency probe crate.

use std::time::Duration;

/// A specialized `Result` type for latency probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// The main error type for latency probe operations.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// HTTP request failed or its body could not be read
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Document store operation failed
    #[error("Storage error: {0}")]
    Storage(#[from] mongodb::error::Error),

    /// The document store did not answer the handshake in time
    #[error("Timed out after {0:?} connecting to the document store")]
    ConnectTimeout(Duration),

    /// A service answered with an empty body
    #[error("Empty response from {0}")]
    EmptyResponse(String),

    /// Statistics were requested over zero measurements
    #[error("No successful probes, statistics are unavailable")]
    NoSamples,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ProbeError {
    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new empty-response error for the given URL
    pub fn empty_response(url: impl Into<String>) -> Self {
        Self::EmptyResponse(url.into())
    }
}
