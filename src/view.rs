//! View composition
//!
//! Reduces an [`AppState`] to what a front-end has to show: a loading
//! screen, a load error with a retry action, or a result summary with its
//! filter tags and, when nothing matched, the empty-state guidance.

use crate::state::AppState;
use crate::tags::{FilterTag, applied_badge, tags_for_labels};

pub const LOADING_MESSAGE: &str = "お酒のデータを読み込み中...";
pub const ERROR_TITLE: &str = "エラーが発生しました";
pub const RETRY_ACTION: &str = "再読み込み";
pub const RESULTS_HEADING: &str = "検索結果";
pub const FILTERING_INDICATOR: &str = "フィルター適用中";
pub const CLEAR_ALL_ACTION: &str = "すべての条件をクリア";

/// Guidance shown when no product matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
    pub hints_heading: &'static str,
    pub hints: [&'static str; 3],
    pub clear_action: &'static str,
}

impl Default for EmptyState {
    fn default() -> Self {
        Self {
            title: "検索結果が見つかりませんでした",
            message: "検索条件を変更するか、フィルターを調整して再度お試しください",
            hints_heading: "検索のヒント",
            hints: [
                "別のキーワードや短いキーワードを試してみてください",
                "フィルターの条件を緩めてみてください",
                "すべてのフィルターをクリアしてみてください",
            ],
            clear_action: CLEAR_ALL_ACTION,
        }
    }
}

/// Result summary for a loaded catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    /// Products currently shown
    pub shown: usize,
    /// Products in the catalog
    pub total: usize,
    /// Query or labels are narrowing the results
    pub filtering: bool,
    pub tags: Vec<FilterTag>,
    /// Advanced-filter header badge, e.g. `2件適用中`
    pub badge: Option<String>,
    pub empty_state: Option<EmptyState>,
}

impl ResultView {
    /// `{n}件見つかりました`
    #[must_use]
    pub fn count_text(&self) -> String {
        format!("{}件見つかりました", self.shown)
    }

    /// `{n}商品`
    #[must_use]
    pub fn total_text(&self) -> String {
        format!("{}商品", self.total)
    }
}

/// What the front-end should render
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Loading,
    Error { message: String },
    Results(ResultView),
}

impl View {
    /// Compose the view for `state`
    #[must_use]
    pub fn compose(state: &AppState) -> Self {
        let catalog = state.catalog();
        if catalog.is_loading() {
            return Self::Loading;
        }
        if let Some(message) = catalog.error() {
            return Self::Error {
                message: message.to_string(),
            };
        }

        let shown = state.filtered().len();
        let labels = state.active_labels();
        Self::Results(ResultView {
            shown,
            total: catalog.len(),
            filtering: state.is_filtering(),
            tags: tags_for_labels(labels),
            badge: applied_badge(state.facets(), labels.len()),
            empty_state: (shown == 0).then(EmptyState::default),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_products;
    use crate::facets::AdditiveMode;
    use crate::state::{Action, ApplyMode};

    #[test]
    fn test_idle_state_shows_empty_results() {
        let view = View::compose(&AppState::default());
        let View::Results(results) = view else {
            panic!("expected results view");
        };
        assert_eq!(results.total, 0);
        assert!(results.empty_state.is_some());
    }

    #[test]
    fn test_loading_view() {
        let mut state = AppState::default();
        state.dispatch(Action::LoadStarted);
        assert_eq!(View::compose(&state), View::Loading);
    }

    #[test]
    fn test_error_view() {
        let mut state = AppState::default();
        state.dispatch(Action::LoadFailed("Failed to fetch products".to_string()));
        assert_eq!(
            View::compose(&state),
            View::Error {
                message: "Failed to fetch products".to_string()
            }
        );
    }

    #[test]
    fn test_unfiltered_results() {
        let state = AppState::with_catalog(sample_products(), ApplyMode::Live);
        let View::Results(results) = View::compose(&state) else {
            panic!("expected results view");
        };
        assert_eq!(results.count_text(), "8件見つかりました");
        assert_eq!(results.total_text(), "8商品");
        assert!(!results.filtering);
        assert!(results.tags.is_empty());
        assert!(results.badge.is_none());
        assert!(results.empty_state.is_none());
    }

    #[test]
    fn test_empty_state_when_nothing_matches() {
        let mut state = AppState::with_catalog(sample_products(), ApplyMode::Live);
        state.dispatch(Action::SetAdditiveMode(AdditiveMode::None));

        let View::Results(results) = View::compose(&state) else {
            panic!("expected results view");
        };
        assert_eq!(results.shown, 0);
        assert_eq!(results.total, 8);
        assert!(results.filtering);
        assert_eq!(results.tags, vec![FilterTag::new("添加物なし")]);
        assert_eq!(results.badge.as_deref(), Some("1件適用中"));

        let empty = results.empty_state.unwrap();
        assert_eq!(empty.clear_action, "すべての条件をクリア");
        assert_eq!(empty.hints.len(), 3);
    }
}
