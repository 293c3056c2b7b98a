//! Command-line interface parsing for the morning quotation CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a `StartupConfig` that picks the data source and builds the request.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::cache::CacheManager;
use crate::data::{QuotationRequest, DEFAULT_EXPIRATION};

/// Morning Quotation CLI - Print today's morning quotation from TianAPI
#[derive(Parser, Debug)]
#[command(name = "morningquote")]
#[command(about = "Print today's morning quotation from TianAPI")]
#[command(version)]
pub struct Cli {
    /// TianAPI key used for remote requests
    #[arg(long, env = "TIANAPI_KEY", hide_env_values = true)]
    pub token: Option<String>,

    /// Read the cached response instead of calling the API
    #[arg(long, conflicts_with_all = ["prefer_cache", "example"])]
    pub local: bool,

    /// Use the cached response while it is younger than --expiration
    #[arg(long, conflicts_with = "example")]
    pub prefer_cache: bool,

    /// Decode the bundled example response without touching network or cache
    #[arg(long)]
    pub example: bool,

    /// Directory holding the cached response
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Cache expiration in seconds, used by --prefer-cache
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_EXPIRATION.as_secs())]
    pub expiration: u64,

    /// Print the decoded response as JSON
    #[arg(long)]
    pub json: bool,
}

/// How the binary obtains its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Always call the API
    #[default]
    Remote,
    /// Always read the cache
    Local,
    /// Read the cache while fresh, otherwise call the API
    PreferCache,
    /// Decode the bundled example payload
    Example,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: SourceMode,
    pub token: Option<String>,
    /// Custom cache directory, platform default when `None`
    pub cache_dir: Option<PathBuf>,
    pub expiration: Duration,
    pub json: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            mode: SourceMode::default(),
            token: None,
            cache_dir: None,
            expiration: DEFAULT_EXPIRATION,
            json: false,
        }
    }
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        let mode = if cli.example {
            SourceMode::Example
        } else if cli.local {
            SourceMode::Local
        } else if cli.prefer_cache {
            SourceMode::PreferCache
        } else {
            SourceMode::Remote
        };

        StartupConfig {
            mode,
            token: cli.token.clone(),
            cache_dir: cli.cache_dir.clone(),
            expiration: Duration::from_secs(cli.expiration),
            json: cli.json,
        }
    }

    /// Builds the request context described by this configuration
    pub fn build_request(&self) -> QuotationRequest {
        let request =
            QuotationRequest::new(self.token.clone()).with_expiration(self.expiration);

        match &self.cache_dir {
            Some(dir) => request.with_cache(CacheManager::with_dir(dir.clone())),
            None => request,
        }
    }
}
