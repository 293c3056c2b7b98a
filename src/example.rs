//! Bundled example payload
//!
//! A recorded morning quotation response that stands in for the API when no
//! network or token is available.

use std::path::Path;

use crate::error::QuoteError;

/// Raw bytes of the bundled `MorningQuotation.json`
pub const EXAMPLE_PAYLOAD: &[u8] = include_bytes!("../assets/MorningQuotation.json");

/// Reads an example payload from disk
///
/// # Returns
/// * `Ok(Vec<u8>)` - The file contents
/// * `Err(QuoteError::FileUnavailable)` - If the file cannot be read
pub async fn load(path: impl AsRef<Path>) -> Result<Vec<u8>, QuoteError> {
    tokio::fs::read(path).await.map_err(QuoteError::FileUnavailable)
}
