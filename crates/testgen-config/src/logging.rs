//! Centralized logging initialization with environment variable support

use crate::config::{AppConfig, LogFormat};
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize tracing subscriber with environment variable support
///
/// Environment variables (in priority order):
/// - `RUST_LOG`: Standard Rust log filter (takes precedence over all)
/// - `LOG_LEVEL`: Set log level (trace, debug, info, warn, error)
/// - `LOG_FORMAT`: Override format (json, pretty)
///
/// # Examples
///
/// ```bash
/// # Watch escalation rounds
/// LOG_LEVEL=debug testgen names --input batch.json
///
/// # Only the naming core, as JSON
/// RUST_LOG=testgen_naming=trace LOG_FORMAT=json testgen names --input batch.json
/// ```
pub fn initialize(config: &AppConfig) {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(tracing::Level::WARN);

    // RUST_LOG takes precedence over the configured level
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let format = std::env::var("LOG_FORMAT")
        .ok()
        .and_then(|f| parse_format(&f))
        .unwrap_or_else(|| config.logging.format.clone());

    // Always write to stderr to keep stdout clean for command output
    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn parse_format(value: &str) -> Option<LogFormat> {
    match value.to_lowercase().as_str() {
        "json" => Some(LogFormat::Json),
        "pretty" | "human" => Some(LogFormat::Pretty),
        _ => None,
    }
}

/// Span wrapping one CLI command, so nested logs carry the command name
pub fn command_span(command: &str) -> tracing::Span {
    tracing::info_span!("command", command = %command)
}
