//! Morning Quotation Library
//!
//! Fetches the TianAPI daily morning quotation, keeps the last successful
//! response in a local cache and decodes payloads into typed values.

pub mod cache;
pub mod cli;
pub mod data;
pub mod error;
pub mod example;

pub use data::{Completion, DataSource, Endpoint, QuotationRequest, QuoteEntry, Response};
pub use error::QuoteError;
