//! Reducer: `(state, action) → state'`
//!
//! Every recomputation runs in the same order: derive labels from the full
//! selection, then filter the full catalog with them. Nothing is patched
//! incrementally. A successful load shows the whole new catalog and leaves
//! the applied labels as they were.

use super::actions::Action;
use super::{AppState, ApplyMode};
use crate::query::filter_catalog;
use crate::tags::FilterTag;

/// Apply `action` to `state`, returning the next state
#[must_use]
pub fn reduce(mut state: AppState, action: Action) -> AppState {
    apply(&mut state, action);
    state
}

/// In-place form of [`reduce`]
pub(super) fn apply(state: &mut AppState, action: Action) {
    tracing::debug!(action = action.name(), "dispatch");

    let edit = action.is_edit();
    match action {
        Action::SetFreeText(text) => state.search_query = text,
        Action::SetAdditiveMode(mode) => state.facets.set_additive_mode(mode),
        Action::ToggleAdditive(additive) => {
            state.facets.toggle_additive(&additive);
        }
        Action::SetChosenAdditives(additives) => state.facets.set_chosen_additives(additives),
        Action::SetManufacturer(manufacturer) => state.facets.set_manufacturer(manufacturer),
        Action::ToggleGenre(genre) => {
            state.facets.toggle_genre(&genre);
        }
        Action::SetGenres(genres) => state.facets.set_genres(genres),
        Action::RemoveFilterLabel(label) => {
            let tag = FilterTag::new(label);
            if !tag.remove_from(&mut state.facets) {
                tracing::debug!(
                    label = %tag.label,
                    class = ?tag.class,
                    "label matched no facet field"
                );
            }
            refresh(state);
        }
        Action::ClearAll => {
            state.facets.clear();
            state.search_query.clear();
            refresh(state);
        }
        Action::ApplyFilters => refresh(state),
        Action::SetAdvancedOpen(open) => state.advanced_open = open,
        Action::LoadStarted => {
            state.catalog.begin_load();
            state.filtered.clear();
        }
        Action::LoadSucceeded(products) => {
            tracing::debug!(count = products.len(), "catalog loaded");
            state.catalog.finish_load(products);
            state.filtered = state.catalog.products().to_vec();
        }
        Action::LoadFailed(message) => {
            tracing::warn!(error = %message, "catalog load failed");
            state.catalog.fail_load(message);
            state.filtered.clear();
        }
    }

    if edit && state.apply_mode == ApplyMode::Live {
        refresh(state);
    }
}

/// Derive labels, then filter
fn refresh(state: &mut AppState) {
    state.active_labels = state.facets.active_labels();
    state.applied_query.clone_from(&state.search_query);
    state.filtered = filter_catalog(
        state.catalog.products(),
        &state.search_query,
        &state.active_labels,
    );
    tracing::debug!(
        labels = ?state.active_labels,
        shown = state.filtered.len(),
        total = state.catalog.len(),
        "filters applied"
    );
}
