//! The catalog page: page-local load state, the once-per-mount fetch, and
//! re-rendering from whatever the state currently holds.
//!
//! State flows `Idle -> Loading -> Loaded | Failed`. A fetch result is
//! applied only if it belongs to the current mount; results that arrive after
//! [`CatalogPage::unmount`] carry an old generation and are dropped.

use std::sync::Arc;

use crate::client::CatalogSource;
use crate::error::{CatalogError, CatalogResult, ErrorKind};
use crate::model::FeatureCatalog;
use crate::render::{FeatureTable, render};

/// Document title set when the page activates.
pub const PAGE_TITLE: &str = "How It Works | Team Communication Toolkit";

/// Why the last fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CatalogError> for LoadFailure {
    fn from(err: &CatalogError) -> Self {
        Self {
            kind: err.kind(),
            message: err.message().to_string(),
        }
    }
}

/// Page-local catalog state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(FeatureCatalog),
    Failed(LoadFailure),
}

impl LoadState {
    /// The catalog, once loaded. Every other state reads as empty.
    pub fn catalog(&self) -> Option<&FeatureCatalog> {
        match self {
            Self::Loaded(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            Self::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Loaded(_) => "loaded",
            Self::Failed(_) => "failed",
        }
    }
}

/// Presentation side effects run once per mount, before the fetch is issued.
pub trait ActivationHook: Send {
    fn on_activate(&mut self);
}

/// Title and scroll position of the hosting view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageChrome {
    title: Option<String>,
    scroll_position: (u32, u32),
}

impl PageChrome {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn scroll_position(&self) -> (u32, u32) {
        self.scroll_position
    }

    pub fn scroll_to(&mut self, x: u32, y: u32) {
        self.scroll_position = (x, y);
    }
}

impl ActivationHook for PageChrome {
    fn on_activate(&mut self) {
        self.title = Some(PAGE_TITLE.to_string());
        self.scroll_to(0, 0);
    }
}

/// A fetch issued by [`CatalogPage::activate`], not yet awaited.
pub struct PendingFetch<S> {
    source: Arc<S>,
    generation: u64,
}

impl<S: CatalogSource> PendingFetch<S> {
    /// Perform the fetch. This is the only suspension point of a page load.
    pub async fn resolve(self) -> FetchOutcome {
        let result = self.source.fetch_catalog().await;
        FetchOutcome {
            generation: self.generation,
            result,
        }
    }
}

/// A settled fetch, tagged with the mount generation that issued it.
#[derive(Debug)]
pub struct FetchOutcome {
    generation: u64,
    result: CatalogResult<FeatureCatalog>,
}

impl FetchOutcome {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn result(&self) -> &CatalogResult<FeatureCatalog> {
        &self.result
    }
}

/// Feature catalog page component.
pub struct CatalogPage<S, H = PageChrome> {
    source: Arc<S>,
    hook: H,
    state: LoadState,
    generation: u64,
    mounted: bool,
    activated: bool,
}

impl<S: CatalogSource> CatalogPage<S, PageChrome> {
    /// Create a mounted page with the default chrome.
    pub fn new(source: S) -> Self {
        Self::with_hook(source, PageChrome::default())
    }
}

impl<S: CatalogSource, H: ActivationHook> CatalogPage<S, H> {
    /// Create a mounted page with a custom activation hook.
    pub fn with_hook(source: S, hook: H) -> Self {
        Self {
            source: Arc::new(source),
            hook,
            state: LoadState::Idle,
            generation: 0,
            mounted: true,
            activated: false,
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn hook(&self) -> &H {
        &self.hook
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Run the activation hook and issue the fetch for this mount.
    ///
    /// Returns `None` when the page is unmounted or already activated in the
    /// current mount.
    pub fn activate(&mut self) -> Option<PendingFetch<S>> {
        if !self.mounted || self.activated {
            return None;
        }
        self.activated = true;
        self.hook.on_activate();
        self.state = LoadState::Loading;
        tracing::debug!(generation = self.generation, "Catalog page activated");
        Some(PendingFetch {
            source: Arc::clone(&self.source),
            generation: self.generation,
        })
    }

    /// Store a settled fetch. Returns `false` if the outcome was stale and
    /// discarded.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if !self.mounted || outcome.generation != self.generation {
            tracing::debug!(
                outcome_generation = outcome.generation,
                current_generation = self.generation,
                "Discarding catalog result for a previous mount"
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(catalog) => {
                tracing::info!(records = catalog.len(), "Feature catalog loaded");
                LoadState::Loaded(catalog)
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind(), "Failed to load feature catalog: {err}");
                LoadState::Failed(LoadFailure::from(&err))
            }
        };
        true
    }

    /// Activate, wait for the fetch, and apply it.
    pub async fn load(&mut self) -> &LoadState {
        if let Some(pending) = self.activate() {
            let outcome = pending.resolve().await;
            self.apply(outcome);
        }
        &self.state
    }

    /// Render the table from the current state.
    pub fn render(&self) -> FeatureTable {
        match self.state.catalog() {
            Some(catalog) => render(catalog),
            None => render(&FeatureCatalog::new()),
        }
    }

    /// Tear down the view. Any fetch still in flight becomes stale.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Idle;
        tracing::debug!(generation = self.generation, "Catalog page unmounted");
    }

    /// Start a fresh mount cycle with empty state.
    pub fn mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;
        self.activated = false;
        self.state = LoadState::Idle;
    }
}
