//! Feature catalog for the Team Communication Toolkit "How It Works" page.
//!
//! This crate fetches the feature metadata document from the remote
//! endpoint and renders it as a fixed eight-column table.
//!
//! # Example
//!
//! ```rust,ignore
//! use tct_catalog::{CatalogPage, FeatureCatalogClient};
//!
//! let mut page = CatalogPage::new(FeatureCatalogClient::new());
//! page.load().await;
//! println!("{}", page.render().to_html());
//! ```

mod client;
mod document;
mod error;
mod model;
mod page;
mod render;

pub use client::{CatalogSource, FeatureCatalogClient};
pub use document::render_document;
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use model::{FeatureCatalog, FeatureRecord};
pub use page::{
    ActivationHook, CatalogPage, FetchOutcome, LoadFailure, LoadState, PAGE_TITLE, PageChrome,
    PendingFetch,
};
pub use render::{
    COLUMNS_PLACEHOLDER, COLUMNS_SEPARATOR, FeatureRow, FeatureTable, HEADERS, LinkCell,
    escape_html, render,
};
pub use tct_common::DEFAULT_ENDPOINT;
