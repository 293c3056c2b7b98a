//! Integration tests for CLI argument handling
//!
//! Runs the built binary against temporary cache directories. No test here
//! reaches the network: remote requests either lack a token or are skipped.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_morningquote"))
        .args(args)
        .env_remove("TIANAPI_KEY")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute morningquote")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success(), "Expected --help to exit successfully");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("morningquote"), "Help should mention morningquote");
    assert!(stdout.contains("--local"), "Help should mention --local flag");
}

#[test]
fn test_example_prints_quotation() {
    let output = run_cli(&["--example"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("用努力去喂养梦想，愿跌倒不哭，明媚如初，早安。"));
}

#[test]
fn test_example_json_uses_wire_keys() {
    let output = run_cli(&["--example", "--json"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"msg\""));
    assert!(stdout.contains("\"newslist\""));
}

#[test]
fn test_local_and_example_conflict() {
    let output = run_cli(&["--local", "--example"]);
    assert!(!output.status.success());
}

#[test]
fn test_local_without_cache_fails() {
    let cache_dir = TempDir::new().unwrap();
    let output = run_cli(&["--local", "--cache-dir", path_arg(cache_dir.path())]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Cached response is unavailable"),
        "Should report missing cache: {}",
        stderr
    );
}

#[test]
fn test_local_reads_cached_payload() {
    let cache_dir = TempDir::new().unwrap();
    std::fs::write(
        cache_dir.path().join("MorningQuotation"),
        r#"{"msg":"ok","code":200,"newslist":[{"content":"早安"}]}"#,
    )
    .unwrap();

    let output = run_cli(&["--local", "--cache-dir", path_arg(cache_dir.path())]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "早安");
}

#[test]
fn test_remote_without_token_fails() {
    let cache_dir = TempDir::new().unwrap();
    let output = run_cli(&["--cache-dir", path_arg(cache_dir.path())]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API token is missing"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_prefer_cache_uses_fresh_cache() {
    let cache_dir = TempDir::new().unwrap();
    std::fs::write(
        cache_dir.path().join("MorningQuotation"),
        r#"{"msg":"ok","code":200,"newslist":[{"content":"cached"}]}"#,
    )
    .unwrap();

    let output = run_cli(&["--prefer-cache", "--cache-dir", path_arg(cache_dir.path())]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "cached");
}

#[test]
fn test_prefer_cache_with_expired_cache_goes_remote() {
    let cache_dir = TempDir::new().unwrap();
    std::fs::write(
        cache_dir.path().join("MorningQuotation"),
        r#"{"msg":"ok","code":200,"newslist":[{"content":"cached"}]}"#,
    )
    .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(10));

    let output = run_cli(&[
        "--prefer-cache",
        "--expiration",
        "0",
        "--cache-dir",
        path_arg(cache_dir.path()),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("API token is missing"), "Unexpected stderr: {}", stderr);
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use morning_quote::cli::{Cli, SourceMode, StartupConfig};

    #[test]
    fn test_cli_no_args_is_remote() {
        let cli = Cli::parse_from(["morningquote", "--token", "t"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.mode, SourceMode::Remote);
        assert_eq!(config.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_cli_example_wins_over_defaults() {
        let cli = Cli::parse_from(["morningquote", "--example", "--json"]);
        let config = StartupConfig::from_cli(&cli);
        assert_eq!(config.mode, SourceMode::Example);
        assert!(config.json);
    }
}
