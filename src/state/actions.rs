//! User and loader intents understood by the reducer

use crate::catalog::Product;
use crate::facets::AdditiveMode;

/// Everything that can change [`super::AppState`]
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetFreeText(String),
    SetAdditiveMode(AdditiveMode),
    ToggleAdditive(String),
    SetChosenAdditives(Vec<String>),
    SetManufacturer(String),
    ToggleGenre(String),
    SetGenres(Vec<String>),
    /// Remove one active filter tag
    RemoveFilterLabel(String),
    /// Reset facets and free text
    ClearAll,
    /// Re-derive labels and re-filter from the current selection
    ApplyFilters,
    SetAdvancedOpen(bool),
    /// Catalog fetch started
    LoadStarted,
    /// Catalog fetch returned these products; all of them are shown
    LoadSucceeded(Vec<Product>),
    /// Catalog fetch failed with this message
    LoadFailed(String),
}

impl Action {
    /// True for intents that only edit facet controls or the search box
    ///
    /// Under [`super::ApplyMode::Explicit`] these do not re-filter by
    /// themselves.
    #[must_use]
    pub const fn is_edit(&self) -> bool {
        matches!(
            self,
            Self::SetFreeText(_)
                | Self::SetAdditiveMode(_)
                | Self::ToggleAdditive(_)
                | Self::SetChosenAdditives(_)
                | Self::SetManufacturer(_)
                | Self::ToggleGenre(_)
                | Self::SetGenres(_)
        )
    }

    /// Short name for log output
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SetFreeText(_) => "set_free_text",
            Self::SetAdditiveMode(_) => "set_additive_mode",
            Self::ToggleAdditive(_) => "toggle_additive",
            Self::SetChosenAdditives(_) => "set_chosen_additives",
            Self::SetManufacturer(_) => "set_manufacturer",
            Self::ToggleGenre(_) => "toggle_genre",
            Self::SetGenres(_) => "set_genres",
            Self::RemoveFilterLabel(_) => "remove_filter_label",
            Self::ClearAll => "clear_all",
            Self::ApplyFilters => "apply_filters",
            Self::SetAdvancedOpen(_) => "set_advanced_open",
            Self::LoadStarted => "load_started",
            Self::LoadSucceeded(_) => "load_succeeded",
            Self::LoadFailed(_) => "load_failed",
        }
    }
}
