//! Product catalog
//!
//! Holds the full product list and the state of the load that produced it.
//! Products are immutable once loaded; filtering always works on borrowed
//! slices of the store.

pub mod error;
pub mod sample;
pub mod source;
pub mod store;
pub mod types;

pub use error::CatalogError;
pub use sample::sample_products;
pub use source::{CatalogSource, JsonFileSource, SampleCatalog, parse_products, source_for};
pub use store::{CatalogStore, LoadState};
pub use types::Product;
