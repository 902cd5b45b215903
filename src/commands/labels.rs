//! Labels command - show which filter labels a facet selection produces

use crate::cli::FacetArgs;
use crate::state::{Action, AppState};
use crate::tags::tags_for_labels;
use crate::ui::OutputWriter;

/// Print the active labels for `facets`, one per line
///
/// Unless quiet, each label is followed by the facet it filters on.
pub fn execute(facets: &FacetArgs, quiet: bool, out: &dyn OutputWriter) {
    let mut state = AppState::default();
    for action in facets.to_actions() {
        state.dispatch(action);
    }
    state.dispatch(Action::ApplyFilters);

    let tags = tags_for_labels(state.active_labels());
    if tags.is_empty() {
        out.info("No active filters");
        return;
    }

    for tag in tags {
        if quiet {
            out.write(&tag.label);
        } else {
            out.write(&format!("  {} ({})", tag.label, tag.class.heading()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::AdditiveMode;
    use crate::ui::BufferedWriter;

    #[test]
    fn test_labels_in_display_order() {
        let out = BufferedWriter::new();
        let facets = FacetArgs {
            additive_mode: Some(AdditiveMode::Has),
            additives: vec!["保存料".to_string()],
            manufacturer: Some("宝酒造".to_string()),
            genres: vec!["焼酎".to_string()],
        };

        execute(&facets, true, &out);
        assert_eq!(out.lines(), vec!["保存料", "宝酒造", "焼酎"]);
    }

    #[test]
    fn test_labels_with_headings() {
        let out = BufferedWriter::new();
        let facets = FacetArgs {
            additive_mode: Some(AdditiveMode::None),
            ..FacetArgs::default()
        };

        execute(&facets, false, &out);
        assert_eq!(out.lines(), vec!["  添加物なし (添加物)"]);
    }

    #[test]
    fn test_has_mode_alone_has_no_labels() {
        let out = BufferedWriter::new();
        let facets = FacetArgs {
            additive_mode: Some(AdditiveMode::Has),
            manufacturer: Some("all".to_string()),
            ..FacetArgs::default()
        };

        execute(&facets, false, &out);
        assert_eq!(out.lines(), vec!["No active filters"]);
    }
}
