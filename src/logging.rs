//! Logging configuration for ragchat

use std::path::Path;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

use crate::Result;

/// Initialize logging system with file output
pub fn init_logging() -> Result<()> {
    init_logging_with_config(None)
}

/// Initialize logging with configuration
pub fn init_logging_with_config(config: Option<&crate::config::AppConfig>) -> Result<()> {
    let level = config.map_or("info", |c| c.logging.level.as_str());
    init_logging_with_level(level)
}

/// Initialize logging with custom log level
pub fn init_logging_with_level(level: &str) -> Result<()> {
    // Create logs directory if it doesn't exist
    let logs_dir = Path::new("logs");
    if !logs_dir.exists() {
        std::fs::create_dir_all(logs_dir)?;
    }

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},ragchat={level}")));

    // Set up file appender for all logs
    let file_appender = tracing_appender::rolling::daily("logs", "ragchat.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    // Set up console appender with colors
    let console_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    // Set up file layer
    let file_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(non_blocking)
        .with_ansi(false); // No colors in file

    Registry::default()
        .with(env_filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!(
        "Logging initialized with level: {} - console and file output enabled",
        level
    );
    tracing::info!("Log files will be saved to: logs/ragchat.log.YYYY-MM-DD");

    // The appender guard must outlive the process or buffered lines are lost
    std::mem::forget(_guard);

    Ok(())
}

/// Initialize simple logging for testing
pub fn init_simple_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_max_level(tracing::Level::INFO)
        .init();

    tracing::info!("Simple logging initialized");
    Ok(())
}
