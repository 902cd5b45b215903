//! Facet selection data structures
//!
//! `FacetSelection` is the raw record of what the user picked in the facet
//! controls. Active filter labels are always derived from it, never stored
//! alongside it as a second source of truth.

use super::error::FacetError;
use super::vocab::ALL_MANUFACTURERS;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the additive facet constrains results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AdditiveMode {
    /// Require the chosen additives (あり)
    Has,
    /// Only additive-free products (なし)
    None,
    /// Explicitly indifferent (ありでない)
    DontCare,
    /// No choice made (指定しない)
    #[default]
    Unspecified,
}

impl AdditiveMode {
    pub const ALL: [Self; 4] = [Self::Has, Self::None, Self::DontCare, Self::Unspecified];

    /// Label shown on the radio option
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Has => "添加物あり",
            Self::None => "添加物なし",
            Self::DontCare => "こだわらない",
            Self::Unspecified => "指定しない",
        }
    }
}

impl fmt::Display for AdditiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Has => "has",
            Self::None => "none",
            Self::DontCare => "dont-care",
            Self::Unspecified => "unspecified",
        };
        f.write_str(name)
    }
}

impl FromStr for AdditiveMode {
    type Err = FacetError;

    /// Accepts the English names as well as the form values used by the web UI
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "has" | "あり" => Ok(Self::Has),
            "none" | "なし" => Ok(Self::None),
            "dont-care" | "dont_care" | "ありでない" => Ok(Self::DontCare),
            "unspecified" | "指定しない" | "" => Ok(Self::Unspecified),
            other => Err(FacetError::InvalidAdditiveMode(other.to_string())),
        }
    }
}

/// The user's raw facet choices
///
/// `chosen_additives` and `genres` behave as insertion-ordered sets: adding a
/// value twice keeps the first position.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FacetSelection {
    #[serde(default)]
    pub additive_mode: AdditiveMode,
    #[serde(default)]
    pub chosen_additives: Vec<String>,
    /// Empty or `"all"` means no manufacturer filter
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl FacetSelection {
    /// Selection with every facet at its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the additive condition, keeping the chosen additives
    pub const fn set_additive_mode(&mut self, mode: AdditiveMode) {
        self.additive_mode = mode;
    }

    /// Add the additive if absent, remove it if present
    ///
    /// Returns true if the additive is now chosen.
    pub fn toggle_additive(&mut self, additive: &str) -> bool {
        toggle(&mut self.chosen_additives, additive)
    }

    /// Replace the chosen additives, dropping duplicates
    pub fn set_chosen_additives(&mut self, additives: impl IntoIterator<Item = String>) {
        self.chosen_additives = dedup(additives);
    }

    /// Set the manufacturer; `"all"` or empty means no filter
    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = manufacturer.into();
    }

    /// Add the genre if absent, remove it if present
    ///
    /// Returns true if the genre is now selected.
    pub fn toggle_genre(&mut self, genre: &str) -> bool {
        toggle(&mut self.genres, genre)
    }

    /// Replace the selected genres, dropping duplicates
    pub fn set_genres(&mut self, genres: impl IntoIterator<Item = String>) {
        self.genres = dedup(genres);
    }

    /// The manufacturer that actually filters, if any
    #[must_use]
    pub fn effective_manufacturer(&self) -> Option<&str> {
        let m = self.manufacturer.as_str();
        (!m.is_empty() && m != ALL_MANUFACTURERS).then_some(m)
    }

    /// True if any facet control differs from its default
    ///
    /// This is looser than "has active labels": the "has" mode with nothing
    /// chosen, or a manufacturer of `"all"`, counts as touched.
    #[must_use]
    pub fn has_active_facets(&self) -> bool {
        self.additive_mode != AdditiveMode::Unspecified
            || !self.manufacturer.is_empty()
            || !self.genres.is_empty()
            || !self.chosen_additives.is_empty()
    }

    /// Reset every field to its default
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn toggle(set: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = set.iter().position(|v| v == value) {
        set.remove(pos);
        false
    } else {
        set.push(value.to_string());
        true
    }
}

fn dedup(values: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection() {
        let selection = FacetSelection::default();
        assert_eq!(selection.additive_mode, AdditiveMode::Unspecified);
        assert!(selection.chosen_additives.is_empty());
        assert!(selection.manufacturer.is_empty());
        assert!(selection.genres.is_empty());
        assert!(!selection.has_active_facets());
    }

    #[test]
    fn test_toggle_genre_preserves_insertion_order() {
        let mut selection = FacetSelection::new();
        assert!(selection.toggle_genre("ワイン"));
        assert!(selection.toggle_genre("ビール"));
        assert!(selection.toggle_genre("焼酎"));
        assert!(!selection.toggle_genre("ビール"));

        assert_eq!(selection.genres, vec!["ワイン", "焼酎"]);
    }

    #[test]
    fn test_toggle_additive() {
        let mut selection = FacetSelection::new();
        assert!(selection.toggle_additive("香料"));
        assert!(!selection.toggle_additive("香料"));
        assert!(selection.chosen_additives.is_empty());
    }

    #[test]
    fn test_set_lists_drop_duplicates() {
        let mut selection = FacetSelection::new();
        selection.set_chosen_additives(["香料", "着色料", "香料"].map(String::from));
        selection.set_genres(["ビール", "ビール"].map(String::from));

        assert_eq!(selection.chosen_additives, vec!["香料", "着色料"]);
        assert_eq!(selection.genres, vec!["ビール"]);
    }

    #[test]
    fn test_effective_manufacturer() {
        let mut selection = FacetSelection::new();
        assert_eq!(selection.effective_manufacturer(), None);

        selection.set_manufacturer("all");
        assert_eq!(selection.effective_manufacturer(), None);
        assert!(selection.has_active_facets());

        selection.set_manufacturer("本条");
        assert_eq!(selection.effective_manufacturer(), Some("本条"));
    }

    #[test]
    fn test_has_mode_alone_counts_as_touched() {
        let mut selection = FacetSelection::new();
        selection.set_additive_mode(AdditiveMode::Has);
        assert!(selection.has_active_facets());
    }

    #[test]
    fn test_additive_mode_from_str() {
        assert_eq!("has".parse::<AdditiveMode>(), Ok(AdditiveMode::Has));
        assert_eq!("なし".parse::<AdditiveMode>(), Ok(AdditiveMode::None));
        assert_eq!("ありでない".parse::<AdditiveMode>(), Ok(AdditiveMode::DontCare));
        assert_eq!("指定しない".parse::<AdditiveMode>(), Ok(AdditiveMode::Unspecified));
        assert_eq!(
            "maybe".parse::<AdditiveMode>(),
            Err(FacetError::InvalidAdditiveMode("maybe".to_string()))
        );
    }

    #[test]
    fn test_additive_mode_display_round_trips() {
        for mode in AdditiveMode::ALL {
            assert_eq!(mode.to_string().parse::<AdditiveMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut selection = FacetSelection {
            additive_mode: AdditiveMode::None,
            chosen_additives: vec!["香料".to_string()],
            manufacturer: "スミノフ".to_string(),
            genres: vec!["カクテル".to_string()],
        };
        selection.clear();
        assert_eq!(selection, FacetSelection::default());
    }
}
