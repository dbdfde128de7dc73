//! Feature catalog HTTP client.

use async_trait::async_trait;
use reqwest::Client;
use tct_common::{
    CatalogConfig, DEFAULT_ENDPOINT, create_client_builder, create_client_with_timeout,
};

use crate::error::CatalogResult;
use crate::model::FeatureCatalog;

/// Anything that can produce a feature catalog snapshot.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch one catalog snapshot. Each call is a single best-effort attempt.
    async fn fetch_catalog(&self) -> CatalogResult<FeatureCatalog>;
}

/// Client for the feature metadata endpoint.
#[derive(Clone)]
pub struct FeatureCatalogClient {
    client: Client,
    endpoint: String,
}

impl FeatureCatalogClient {
    /// Create a client for the default endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client for a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let client = create_client_builder()
            .build()
            .unwrap_or_else(|_| Client::new());
        Self::with_client(client, endpoint)
    }

    /// Create a client around a preconfigured `reqwest::Client`.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &CatalogConfig) -> Self {
        let client = create_client_with_timeout(config.timeout()).unwrap_or_else(|e| {
            tracing::warn!("{e}; falling back to a default HTTP client");
            Client::new()
        });
        Self::with_client(client, config.endpoint.clone())
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for FeatureCatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogSource for FeatureCatalogClient {
    async fn fetch_catalog(&self) -> CatalogResult<FeatureCatalog> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching feature catalog");

        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            // The body may still be a usable catalog.
            tracing::warn!(%status, "Catalog endpoint returned a non-success status");
        }

        let body = response.bytes().await?;
        let catalog = FeatureCatalog::from_json_slice(&body)?;

        tracing::debug!(records = catalog.len(), "Fetched feature catalog");
        Ok(catalog)
    }
}
