//! Facet state
//!
//! The user's facet choices (additive mode and chosen additives,
//! manufacturer, genres) and the rules that turn them into active filter
//! labels and back.
//!
//! # Examples
//!
//! ```
//! use addiless::facets::{AdditiveMode, FacetSelection};
//!
//! let mut selection = FacetSelection::new();
//! selection.set_additive_mode(AdditiveMode::None);
//! selection.toggle_genre("ビール");
//!
//! assert_eq!(selection.active_labels(), vec!["添加物なし", "ビール"]);
//!
//! selection.remove_label("添加物なし");
//! assert_eq!(selection.active_labels(), vec!["ビール"]);
//! ```

pub mod error;
pub mod labels;
pub mod types;
pub mod vocab;

pub use error::FacetError;
pub use labels::{derive_active_labels, remove_label};
pub use types::{AdditiveMode, FacetSelection};
pub use vocab::{
    ADDITIVES, ALL_MANUFACTURERS, GENRES, LabelClass, MANUFACTURERS, NO_ADDITIVES_LABEL,
    Vocabulary,
};
