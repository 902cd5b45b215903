//! Catalog store and load state machine
//!
//! ```text
//! Idle ──begin_load──▶ Pending ──finish_load──▶ Loaded
//!                         │
//!                         └────fail_load─────▶ Failed ──begin_load──▶ Pending
//! ```
//!
//! Entering `Pending` drops whatever catalog was held, and a failure never
//! keeps a partial one.

use super::types::Product;

/// Where the catalog load currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// A fetch is in flight
    Pending,
    /// Catalog populated
    Loaded,
    /// Last fetch failed with this message
    Failed(String),
}

/// Owns the full, unfiltered product list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    state: LoadState,
}

impl CatalogStore {
    /// Empty store in the idle state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the pending state, clearing any previous catalog or error
    pub fn begin_load(&mut self) {
        self.products.clear();
        self.state = LoadState::Pending;
    }

    /// Replace the catalog wholesale
    pub fn finish_load(&mut self, products: Vec<Product>) {
        self.products = products;
        self.state = LoadState::Loaded;
    }

    /// Record a failed fetch
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.products.clear();
        self.state = LoadState::Failed(message.into());
    }

    /// Full catalog in load order
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Current load state
    #[must_use]
    pub const fn state(&self) -> &LoadState {
        &self.state
    }

    /// True while a fetch is pending
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Pending)
    }

    /// Error message of the last failed load, if the store is in `Failed`
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Number of products held
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True if no products are held
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
