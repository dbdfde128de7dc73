//! Diagnostics go to stderr; stdout carries only the rendered page.

use tracing_subscriber::EnvFilter;

use crate::cli::LogLevel;

/// Install the global subscriber. `RUST_LOG`, when set, takes precedence.
pub fn init_logging(level: LogLevel) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(format!(
            "error,tct_catalog={level},tct_common={level},tct_cli={level}",
            level = level.as_filter_str()
        ))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
