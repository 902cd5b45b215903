//! Error types for facet input parsing

use thiserror::Error;

/// Errors that can occur while turning user input into facet values
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FacetError {
    /// Unknown additive mode name
    #[error("Invalid additive mode '{0}' (expected has, none, dont-care or unspecified)")]
    InvalidAdditiveMode(String),
}
