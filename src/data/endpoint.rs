//! TianAPI morning quotation endpoint
//!
//! Builds the request URL from an API token. The URL is derived on demand, so
//! two endpoints with the same token always produce the same URL.

use reqwest::Url;
use serde::{Deserialize, Serialize};

/// Scheme and host of the TianAPI service
const API_BASE_URL: &str = "https://api.tianapi.com";

/// Fixed path of the morning quotation resource
const API_PATH: &str = "/txapi/zaoan/index";

/// Query parameter carrying the API token
const TOKEN_PARAM: &str = "key";

/// Remote resource locator for the morning quotation API
///
/// Serializes as `{"token": ...}`; the URL itself is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// API token, absent until configured
    pub token: Option<String>,
    /// Scheme and host the fixed path is appended to
    #[serde(skip, default = "default_base_url")]
    base_url: Url,
}

fn default_base_url() -> Url {
    Url::parse(API_BASE_URL).expect("API_BASE_URL is a valid URL")
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Endpoint {
    /// Builds the endpoint for a token. Never fails, even without a token.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token,
            base_url: default_base_url(),
        }
    }

    /// Overrides scheme and host, keeping the fixed path and token parameter
    ///
    /// Useful for testing against a local server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Returns the token if one is configured and non-empty
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Fully-qualified request URL
    ///
    /// Without a token the `key` parameter is empty and the URL is unusable;
    /// remote fetches check for that before any network call.
    pub fn url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(API_PATH);
        url.query_pairs_mut()
            .clear()
            .append_pair(TOKEN_PARAM, self.token.as_deref().unwrap_or_default());
        url
    }
}
