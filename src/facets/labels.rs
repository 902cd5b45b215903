//! Active filter label derivation and removal
//!
//! Labels are a projection of [`FacetSelection`]. Display order is fixed:
//! additive labels first, then the manufacturer, then genres. Removing a
//! label writes back into the one field it came from; callers then derive
//! the label list again instead of patching it.

use super::types::{AdditiveMode, FacetSelection};
use super::vocab::NO_ADDITIVES_LABEL;

/// Derive the ordered list of active filter labels
#[must_use]
pub fn derive_active_labels(selection: &FacetSelection) -> Vec<String> {
    let mut labels = Vec::new();

    match selection.additive_mode {
        AdditiveMode::None => labels.push(NO_ADDITIVES_LABEL.to_string()),
        AdditiveMode::Has => labels.extend(selection.chosen_additives.iter().cloned()),
        AdditiveMode::DontCare | AdditiveMode::Unspecified => {}
    }

    if let Some(manufacturer) = selection.effective_manufacturer() {
        labels.push(manufacturer.to_string());
    }

    labels.extend(selection.genres.iter().cloned());
    labels
}

/// Clear the facet field that produced `label`
///
/// Returns the updated selection. A label that maps to no field leaves the
/// selection unchanged.
#[must_use]
pub fn remove_label(mut selection: FacetSelection, label: &str) -> FacetSelection {
    selection.remove_label(label);
    selection
}

impl FacetSelection {
    /// Derive the active labels for this selection
    #[must_use]
    pub fn active_labels(&self) -> Vec<String> {
        derive_active_labels(self)
    }

    /// In-place form of [`remove_label`]
    ///
    /// Rules are tried in order and the first match wins. Returns true if a
    /// field changed.
    pub fn remove_label(&mut self, label: &str) -> bool {
        if label == NO_ADDITIVES_LABEL {
            self.additive_mode = AdditiveMode::Unspecified;
            true
        } else if let Some(pos) = self.chosen_additives.iter().position(|a| a == label) {
            self.chosen_additives.remove(pos);
            true
        } else if !self.manufacturer.is_empty() && self.manufacturer == label {
            self.manufacturer.clear();
            true
        } else if let Some(pos) = self.genres.iter().position(|g| g == label) {
            self.genres.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    fn full_selection(mode: AdditiveMode) -> FacetSelection {
        FacetSelection {
            additive_mode: mode,
            chosen_additives: strings(&["着色料", "香料"]),
            manufacturer: "サントリー".to_string(),
            genres: strings(&["チューハイ", "カクテル"]),
        }
    }

    #[test]
    fn test_default_selection_has_no_labels() {
        assert!(derive_active_labels(&FacetSelection::default()).is_empty());
    }

    #[test]
    fn test_label_order_with_has_mode() {
        let labels = derive_active_labels(&full_selection(AdditiveMode::Has));
        assert_eq!(
            labels,
            strings(&["着色料", "香料", "サントリー", "チューハイ", "カクテル"])
        );
    }

    #[test]
    fn test_none_mode_ignores_chosen_additives() {
        let labels = derive_active_labels(&full_selection(AdditiveMode::None));
        assert_eq!(
            labels,
            strings(&["添加物なし", "サントリー", "チューハイ", "カクテル"])
        );
    }

    #[test]
    fn test_none_mode_emits_exactly_one_sentinel() {
        for additives in [vec![], strings(&["香料"]), strings(&["香料", "保存料"])] {
            let selection = FacetSelection {
                additive_mode: AdditiveMode::None,
                chosen_additives: additives,
                ..FacetSelection::default()
            };
            assert_eq!(derive_active_labels(&selection), strings(&["添加物なし"]));
        }
    }

    #[test]
    fn test_has_mode_without_additives_emits_nothing() {
        let selection = FacetSelection {
            additive_mode: AdditiveMode::Has,
            ..FacetSelection::default()
        };
        assert!(derive_active_labels(&selection).is_empty());
    }

    #[test]
    fn test_other_modes_never_emit_additive_labels() {
        for mode in [AdditiveMode::DontCare, AdditiveMode::Unspecified] {
            let labels = derive_active_labels(&full_selection(mode));
            assert_eq!(labels, strings(&["サントリー", "チューハイ", "カクテル"]));
        }
    }

    #[test]
    fn test_all_manufacturers_sentinel_is_not_a_label() {
        let selection = FacetSelection {
            manufacturer: "all".to_string(),
            ..FacetSelection::default()
        };
        assert!(derive_active_labels(&selection).is_empty());
    }

    #[test]
    fn test_remove_no_additives_resets_mode() {
        let selection = remove_label(full_selection(AdditiveMode::None), "添加物なし");
        assert_eq!(selection.additive_mode, AdditiveMode::Unspecified);
        assert_eq!(selection.chosen_additives, strings(&["着色料", "香料"]));
    }

    #[test]
    fn test_remove_additive_keeps_mode() {
        let selection = remove_label(full_selection(AdditiveMode::Has), "香料");
        assert_eq!(selection.additive_mode, AdditiveMode::Has);
        assert_eq!(selection.chosen_additives, strings(&["着色料"]));
    }

    #[test]
    fn test_remove_manufacturer() {
        let selection = remove_label(full_selection(AdditiveMode::Has), "サントリー");
        assert!(selection.manufacturer.is_empty());
    }

    #[test]
    fn test_remove_genre() {
        let selection = remove_label(full_selection(AdditiveMode::Has), "チューハイ");
        assert_eq!(selection.genres, strings(&["カクテル"]));
    }

    #[test]
    fn test_remove_unknown_label_is_noop() {
        let before = full_selection(AdditiveMode::Has);
        let after = remove_label(before.clone(), "ウォッカ");
        assert_eq!(before, after);
    }

    #[test]
    fn test_removed_label_is_never_re_emitted() {
        for mode in AdditiveMode::ALL {
            let selection = full_selection(mode);
            for label in derive_active_labels(&selection) {
                let after = remove_label(selection.clone(), &label);
                assert!(
                    !derive_active_labels(&after).contains(&label),
                    "{label} re-emitted in mode {mode}"
                );
            }
        }
    }

    #[test]
    fn test_remove_label_reports_change() {
        let mut selection = full_selection(AdditiveMode::Has);
        assert!(selection.remove_label("カクテル"));
        assert!(!selection.remove_label("カクテル"));
    }
}
