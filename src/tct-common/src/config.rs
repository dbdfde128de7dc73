//! Viewer configuration.
//!
//! Configuration is optional. The default location is `~/.tct/config.toml`;
//! a missing default file means built-in defaults. An explicitly named file
//! must exist and parse.
//!
//! ```toml
//! endpoint = "https://example.org/features"
//! timeout_secs = 10
//! format = "text"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed metadata endpoint the catalog is fetched from.
pub const DEFAULT_ENDPOINT: &str =
    "https://5f9vk2anlb.execute-api.us-east-2.amazonaws.com/team-comm-tools-features/team-comm-tools";

/// Home directory name on Linux/macOS
pub const HOME_DIR_NAME: &str = ".tct";

/// Config file name inside [`HOME_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config value for `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
}

/// How the rendered page is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Complete HTML document with the page prose and the features table
    #[default]
    Html,
    /// Only the `<table>` element
    Table,
    /// Aligned plain-text table
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Table => "table",
            Self::Text => "text",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for one viewer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Metadata endpoint (defaults to [`DEFAULT_ENDPOINT`])
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    crate::http_client::DEFAULT_TIMEOUT.as_secs()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            format: OutputFormat::Html,
        }
    }
}

/// Location of the default config file, if a home directory is known.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HOME_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl CatalogConfig {
    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> ConfigResult<Self> {
        match default_config_path().filter(|path| path.exists()) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "endpoint",
                message: "must not be empty".to_string(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.format, OutputFormat::Html);
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_config("format = \"text\"\n");
        let config = CatalogConfig::load_from(file.path()).unwrap();
        assert_eq!(
            config,
            CatalogConfig {
                format: OutputFormat::Text,
                ..CatalogConfig::default()
            }
        );
    }

    #[test]
    fn test_load_full_file() {
        let file = write_config(
            "endpoint = \"http://localhost:9000/features\"\ntimeout_secs = 5\nformat = \"table\"\n",
        );
        let config = CatalogConfig::load_from(file.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/features");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.format, OutputFormat::Table);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CatalogConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config("endpoint = [unterminated");
        let err = CatalogConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let file = write_config("timeout_secs = 0\n");
        let err = CatalogConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_empty_endpoint_rejected() {
        let file = write_config("endpoint = \"  \"\n");
        let err = CatalogConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "endpoint", .. }));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Html.to_string(), "html");
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Text.to_string(), "text");
    }
}
