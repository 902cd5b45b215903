//! Catalog data sources
//!
//! The core never talks to a backend directly. Anything that can hand over a
//! list of products implements [`CatalogSource`]; the store only sees the
//! outcome of [`CatalogSource::fetch`].

use super::error::CatalogError;
use super::sample::sample_products;
use super::types::Product;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Trait for anything that can produce a full product list
///
/// A fetch either returns the whole catalog or fails; there is no partial
/// result. Retrying means calling `fetch` again from scratch.
pub trait CatalogSource {
    /// Fetch the complete catalog
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the products cannot be retrieved or decoded.
    fn fetch(&self) -> Result<Vec<Product>, CatalogError>;

    /// Short human-readable description used in log output
    fn describe(&self) -> String;
}

/// The built-in sample catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl CatalogSource for SampleCatalog {
    fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(sample_products())
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

/// A JSON file containing an array of products
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading the JSON array at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for JsonFileSource {
    fn fetch(&self) -> Result<Vec<Product>, CatalogError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        parse_products(&contents)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Parse a JSON product array, rejecting duplicate ids
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed JSON and
/// `CatalogError::DuplicateId` if two products share an id.
pub fn parse_products(json: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(json)?;

    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(product.id.as_str()) {
            return Err(CatalogError::DuplicateId(product.id.clone()));
        }
    }

    Ok(products)
}

/// Pick the source for an optional catalog path
///
/// Falls back to the sample catalog when no path is configured.
#[must_use]
pub fn source_for(path: Option<&Path>) -> Box<dyn CatalogSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleCatalog),
    }
}
