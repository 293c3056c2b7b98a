//! Error types for the morning quotation client

use thiserror::Error;

/// Description reported for every payload that fails structural decode
pub const UNEXPECTED_RESULT: &str = "unexpected result";

/// Errors that can occur when fetching or decoding a morning quotation
#[derive(Debug, Error)]
pub enum QuoteError {
    /// A remote fetch was requested but no API token is configured
    #[error("API token is missing")]
    TokenMissing,

    /// The bundled example fixture could not be read
    #[error("Example file is unavailable: {0}")]
    FileUnavailable(#[source] std::io::Error),

    /// No cached payload exists or it could not be read
    #[error("Cached response is unavailable: {0}")]
    CacheUnavailable(#[source] std::io::Error),

    /// The payload did not match the expected response shape
    ///
    /// The API answers failures (such as an invalid token) with a differently
    /// shaped envelope, so every decode failure lands here.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl QuoteError {
    /// The coarse decode failure reported for any malformed payload
    pub fn unexpected_result() -> Self {
        QuoteError::InvalidResponse(UNEXPECTED_RESULT.to_string())
    }
}
