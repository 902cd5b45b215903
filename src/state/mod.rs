//! Application state container
//!
//! `AppState` holds the catalog, the facet selection, the free-text query
//! and everything derived from them. It is an explicit value passed to the
//! caller; all mutation goes through [`reduce`] / [`AppState::dispatch`].
//!
//! # Workflow
//!
//! ```text
//! Action ──▶ reduce ──▶ mutate selection / query / catalog
//!                            │
//!                 (remove, clear, apply, or any edit in live mode)
//!                            ▼
//!                  derive labels ──▶ filter catalog
//! ```
//!
//! A successful load is the exception: it shows the whole new catalog
//! without touching the applied labels.

pub mod actions;
mod reducer;

pub use actions::Action;
pub use reducer::reduce;

use crate::catalog::{CatalogError, CatalogSource, CatalogStore, Product};
use crate::facets::FacetSelection;
use serde::{Deserialize, Serialize};

/// When edits to the facet controls take effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyMode {
    /// Re-filter after every intent
    Live,
    /// Edits wait for `ApplyFilters`; removal and clear-all still
    /// re-filter immediately
    #[default]
    Explicit,
}

/// Single explicit state object for a search session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    catalog: CatalogStore,
    facets: FacetSelection,
    search_query: String,
    /// Query as of the last recomputation
    applied_query: String,
    active_labels: Vec<String>,
    filtered: Vec<Product>,
    advanced_open: bool,
    apply_mode: ApplyMode,
}

impl AppState {
    /// Empty state with no catalog loaded yet
    #[must_use]
    pub fn new(apply_mode: ApplyMode) -> Self {
        Self {
            apply_mode,
            ..Self::default()
        }
    }

    /// State with an already-loaded catalog and nothing filtered out
    #[must_use]
    pub fn with_catalog(products: Vec<Product>, apply_mode: ApplyMode) -> Self {
        reduce(Self::new(apply_mode), Action::LoadSucceeded(products))
    }

    /// Apply one action in place
    pub fn dispatch(&mut self, action: Action) {
        reducer::apply(self, action);
    }

    /// Run a full load cycle through the reducer
    ///
    /// Calling this again after a failure is the retry.
    ///
    /// # Errors
    ///
    /// Returns the source's `CatalogError` after recording it as the load
    /// failure.
    pub fn load_catalog(&mut self, source: &dyn CatalogSource) -> Result<usize, CatalogError> {
        tracing::debug!(source = %source.describe(), "loading catalog");
        self.dispatch(Action::LoadStarted);
        match source.fetch() {
            Ok(products) => {
                let count = products.len();
                self.dispatch(Action::LoadSucceeded(products));
                Ok(count)
            }
            Err(e) => {
                self.dispatch(Action::LoadFailed(e.to_string()));
                Err(e)
            }
        }
    }

    /// The catalog store and its load state
    #[must_use]
    pub const fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Raw facet choices, applied or not
    #[must_use]
    pub const fn facets(&self) -> &FacetSelection {
        &self.facets
    }

    /// Free text as last edited
    #[must_use]
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Labels as of the last recomputation
    #[must_use]
    pub fn active_labels(&self) -> &[String] {
        &self.active_labels
    }

    /// Filtered products as of the last recomputation
    #[must_use]
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    /// Whether the advanced-filter panel is open
    #[must_use]
    pub const fn advanced_open(&self) -> bool {
        self.advanced_open
    }

    /// When facet edits take effect
    #[must_use]
    pub const fn apply_mode(&self) -> ApplyMode {
        self.apply_mode
    }

    /// True when an applied query or label is narrowing the results
    #[must_use]
    pub fn is_filtering(&self) -> bool {
        !self.applied_query.is_empty() || !self.active_labels.is_empty()
    }

    /// True when edits are waiting for `ApplyFilters`
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.search_query != self.applied_query
            || self.facets.active_labels() != self.active_labels
    }
}
