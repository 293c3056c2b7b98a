//! Core data models for the morning quotation client
//!
//! This module contains the wire types returned by the TianAPI morning
//! quotation endpoint and the request orchestration built around them.

pub mod endpoint;
pub mod request;
pub mod transport;

pub use endpoint::Endpoint;
pub use request::{Completion, QuotationRequest, DEFAULT_EXPIRATION};
pub use transport::{ReqwestTransport, Transport};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Where a payload is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// The cached copy of the last successful remote fetch
    Local,
    /// The TianAPI service
    Remote,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Local => write!(f, "local"),
            DataSource::Remote => write!(f, "remote"),
        }
    }
}

/// Decoded morning quotation response
///
/// Field names are mapped to the fixed wire keys `msg`, `code` and `newslist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Status message from the API
    #[serde(rename = "msg")]
    pub status: String,
    /// Result code
    pub code: i64,
    /// Quotation entries in payload order
    #[serde(rename = "newslist")]
    pub results: Vec<QuoteEntry>,
}

impl Response {
    /// Text of the first quotation, if any
    pub fn first_content(&self) -> Option<&str> {
        self.results.first().map(|entry| entry.content.as_str())
    }
}

/// A single quotation entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteEntry {
    /// The quotation text
    pub content: String,
    /// Any other fields the API returns, kept so re-encoding loses nothing
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuoteEntry {
    /// Creates an entry with only the `content` field
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            extra: Map::new(),
        }
    }
}
