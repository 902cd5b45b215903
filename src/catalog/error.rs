//! Catalog-specific error types
//!
//! Errors raised while fetching or decoding a product catalog. A failed load
//! never leaves a partial catalog behind; the store records the message and
//! waits for a retry.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("Failed to read catalog '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog contents were not a valid product list
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two products share the same id
    #[error("Duplicate product id '{0}'")]
    DuplicateId(String),

    /// The data source could not be reached
    #[error("Failed to fetch alcohol products: {0}")]
    Fetch(String),
}
