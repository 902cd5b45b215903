//! Filter tag presenter
//!
//! Turns active labels into removable tags. A tag only carries its label and
//! the facet it was classified into; removal goes back through
//! [`FacetSelection::remove_label`] so the selection stays the single source
//! of truth.

use crate::facets::{FacetSelection, LabelClass};
use std::fmt;

/// One removable active-filter tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTag {
    pub label: String,
    pub class: LabelClass,
}

impl FilterTag {
    /// Tag for `label`, classified against the vocabularies
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let class = LabelClass::of(&label);
        Self { label, class }
    }

    /// Clear this tag's facet in `selection`
    ///
    /// Returns true if the selection changed.
    pub fn remove_from(&self, selection: &mut FacetSelection) -> bool {
        selection.remove_label(&self.label)
    }
}

impl fmt::Display for FilterTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ×", self.label)
    }
}

/// Build tags for a list of active labels, keeping their order
#[must_use]
pub fn tags_for_labels(labels: &[String]) -> Vec<FilterTag> {
    labels.iter().map(FilterTag::new).collect()
}

/// Badge text for the advanced-filter header, e.g. `3件適用中`
///
/// `None` when no facet control has been touched.
#[must_use]
pub fn applied_badge(selection: &FacetSelection, active_count: usize) -> Option<String> {
    selection
        .has_active_facets()
        .then(|| format!("{active_count}件適用中"))
}
