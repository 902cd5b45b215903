//! AddiLess - beverage catalog search with additive-aware filtering
//!
//! This library filters a catalog of alcoholic beverages by free text and by
//! facet labels (additive condition, manufacturer, genre), and keeps the
//! active-filter state in a single reducer-driven [`state::AppState`].

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod facets;
pub mod output;
pub mod query;
pub mod state;
pub mod tags;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum AddilessError {
    /// Catalog could not be loaded
    #[error("Catalog error: {0}")]
    Catalog(#[from] catalog::CatalogError),
    /// Facet value could not be parsed
    #[error("Facet error: {0}")]
    Facet(#[from] facets::FacetError),
    /// Terminal interaction failed
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Products could not be rendered in the requested format
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
