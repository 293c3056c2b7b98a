//! Morning Quotation CLI - Print today's morning quotation
//!
//! Fetches the TianAPI morning quotation (or reads the cached copy) and
//! prints it to stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use morning_quote::cli::{Cli, SourceMode, StartupConfig};
use morning_quote::{DataSource, QuotationRequest, Response};

/// Installs a stderr logger filtered by `RUST_LOG`, defaulting to warnings
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Obtains and decodes the payload selected by the startup configuration
async fn load_response(config: &StartupConfig) -> Result<Response, morning_quote::QuoteError> {
    let request = config.build_request();
    if config.mode == SourceMode::Example {
        return QuotationRequest::decode(&request.fetch_example());
    }

    let use_cache = match config.mode {
        SourceMode::Local => true,
        SourceMode::PreferCache => request.cache_is_fresh().await,
        SourceMode::Remote | SourceMode::Example => false,
    };
    let source = if use_cache {
        DataSource::Local
    } else {
        DataSource::Remote
    };

    let completion = request.load(source).await;
    debug!(source = %completion.source, "morning quotation loaded");
    completion.result
}

/// Writes the response to stdout, one quotation per line or as JSON
fn print_response(response: &Response, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        for entry in &response.results {
            println!("{}", entry.content);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    let response = match load_response(&config).await {
        Ok(response) => response,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = print_response(&response, config.json) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
