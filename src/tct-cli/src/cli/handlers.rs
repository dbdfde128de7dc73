//! Run the page once and write the result.

use std::io::Write;

use anyhow::{Context, Result};
use tct_catalog::{CatalogPage, CatalogSource, FeatureCatalogClient, render_document};
use tct_common::{CatalogConfig, OutputFormat};

use super::Cli;

/// Load configuration from `--config` or the default location, then apply
/// command-line overrides.
pub fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let config = match &cli.config {
        Some(path) => CatalogConfig::load_from(path)?,
        None => CatalogConfig::load_default()?,
    };
    Ok(cli.apply_overrides(config))
}

/// Produce the output for the page's current state.
pub fn render_output<S: CatalogSource>(page: &CatalogPage<S>, format: OutputFormat) -> String {
    let table = page.render();
    match format {
        OutputFormat::Html => render_document(page.hook(), &table),
        OutputFormat::Table => table.to_html(),
        OutputFormat::Text => table.to_text(),
    }
}

/// Mount the page, let its single fetch settle, print it, unmount.
pub async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    tracing::debug!(endpoint = %config.endpoint, format = %config.format, "Rendering feature catalog");

    let mut page = CatalogPage::new(FeatureCatalogClient::from_config(&config));
    page.load().await;
    if let Some(failure) = page.state().failure() {
        tracing::warn!(kind = %failure.kind, "Rendering empty feature table: {}", failure.message);
    }

    let output = render_output(&page, config.format);
    page.unmount();

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .context("Failed to write rendered page to stdout")?;
    Ok(())
}
