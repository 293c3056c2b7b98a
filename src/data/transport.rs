//! HTTP GET capability used for remote fetches

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::error::QuoteError;

/// Performs a single GET and returns the raw body bytes
///
/// Errors are passed through to the caller as-is.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, QuoteError>;
}

/// Transport backed by a `reqwest::Client`
///
/// Any response that delivers a body counts as success, whatever its status.
/// The API reports failures such as an invalid token inside the body, and
/// those are caught at decode time.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a new ReqwestTransport with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Create a new ReqwestTransport with a custom HTTP client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> Result<Vec<u8>, QuoteError> {
        let response = self.client.get(url.clone()).send().await?;
        let body = response.bytes().await?;
        Ok(body.to_vec())
    }
}
