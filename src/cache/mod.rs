//! Cache module for storing the last API response on disk
//!
//! The cache holds the raw bytes of the most recent successful remote fetch
//! in a single fixed file. It is read only when the caller asks for the local
//! data source.

mod manager;

pub use manager::{CacheManager, CACHE_FILE_NAME};
