//! Common plumbing shared by the feature catalog crates.
//!
//! - [`http_client`] builds the one `reqwest::Client` configuration every
//!   outbound request uses.
//! - [`config`] loads the optional TOML configuration file.

pub mod config;
pub mod http_client;

pub use config::{
    CONFIG_FILE_NAME, CatalogConfig, ConfigError, ConfigResult, DEFAULT_ENDPOINT, HOME_DIR_NAME,
    OutputFormat, default_config_path,
};
pub use http_client::{
    DEFAULT_TIMEOUT, POOL_IDLE_TIMEOUT, USER_AGENT, create_client_builder,
    create_client_with_timeout, create_default_client,
};
