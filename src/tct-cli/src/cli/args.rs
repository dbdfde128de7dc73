//! CLI argument structures and parsing.

use clap::Parser;
use std::path::PathBuf;

use tct_common::{CatalogConfig, OutputFormat};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors (default)
    #[default]
    Warn,
    /// Show informational messages, warnings, and errors
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Render the Team Communication Toolkit feature catalog.
///
/// Fetches the feature metadata once and writes the rendered page to stdout.
/// A failed fetch still renders the page with an empty table.
#[derive(Debug, Parser)]
#[command(name = "tct-features")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Metadata endpoint to fetch the catalog from
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(long, short = 'f', value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ~/.tct/config.toml when present)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Shorthand for --log-level debug
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Effective log level after `--verbose`.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }

    /// Apply command-line overrides on top of loaded configuration.
    pub fn apply_overrides(&self, mut config: CatalogConfig) -> CatalogConfig {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }
}
