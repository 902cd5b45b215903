//! Browse command - interactive filtering session
//!
//! The session is a menu loop over an [`AppState`]. Every choice becomes one
//! or more reducer actions; the menu itself is rebuilt from the state on each
//! pass so the advanced controls only show up while the panel is open.

use crate::AddilessError;
use crate::catalog::CatalogSource;
use crate::facets::{ADDITIVES, ALL_MANUFACTURERS, AdditiveMode, GENRES, MANUFACTURERS};
use crate::output::{self, write_view};
use crate::state::{Action, AppState, ApplyMode};
use crate::tags::{applied_badge, tags_for_labels};
use crate::ui::{OutputWriter, UserInput};
use crate::view::{RETRY_ACTION, View};

type Result<T> = std::result::Result<T, AddilessError>;

const ANY_MANUFACTURER_ITEM: &str = "すべてのメーカー";

/// One entry in the session menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseCommand {
    SearchText,
    ToggleAdvanced,
    AdditiveMode,
    Additives,
    Manufacturer,
    Genres,
    Apply,
    RemoveTag,
    ClearAll,
    ShowResults,
    Quit,
}

impl BrowseCommand {
    #[must_use]
    pub const fn label(self, advanced_open: bool) -> &'static str {
        match self {
            Self::SearchText => "キーワード検索",
            Self::ToggleAdvanced if advanced_open => "詳細検索を閉じる",
            Self::ToggleAdvanced => "詳細検索を開く",
            Self::AdditiveMode => "添加物の条件",
            Self::Additives => "添加物を選択",
            Self::Manufacturer => "メーカー",
            Self::Genres => "お酒のジャンル",
            Self::Apply => "フィルターを適用",
            Self::RemoveTag => "フィルターを外す",
            Self::ClearAll => "すべての条件をクリア",
            Self::ShowResults => "検索結果を表示",
            Self::Quit => "終了",
        }
    }
}

/// Menu entries available in `state`, in display order
///
/// Facet controls appear only while the advanced panel is open, and the
/// additive picker only when the additive mode is "has".
#[must_use]
pub fn menu_for(state: &AppState) -> Vec<BrowseCommand> {
    let mut menu = vec![BrowseCommand::SearchText, BrowseCommand::ToggleAdvanced];

    if state.advanced_open() {
        menu.push(BrowseCommand::AdditiveMode);
        if state.facets().additive_mode == AdditiveMode::Has {
            menu.push(BrowseCommand::Additives);
        }
        menu.push(BrowseCommand::Manufacturer);
        menu.push(BrowseCommand::Genres);
    }

    menu.extend([
        BrowseCommand::Apply,
        BrowseCommand::RemoveTag,
        BrowseCommand::ClearAll,
        BrowseCommand::ShowResults,
        BrowseCommand::Quit,
    ]);
    menu
}

/// Load the catalog and run the interactive session
///
/// A failed load shows the error view and offers a retry; declining ends
/// the session without error.
///
/// # Errors
///
/// Returns an error if terminal interaction fails.
pub fn execute(
    state: &mut AppState,
    source: &dyn CatalogSource,
    quiet: bool,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<()> {
    if !load_with_retry(state, source, input, out)? {
        return Ok(());
    }
    show_results(state, quiet, out);
    session(state, quiet, input, out)
}

fn load_with_retry(
    state: &mut AppState,
    source: &dyn CatalogSource,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<bool> {
    loop {
        write_view(&View::Loading, out);
        match state.load_catalog(source) {
            Ok(count) => {
                out.success(&format!("Loaded {count} products from {}", source.describe()));
                return Ok(true);
            }
            Err(_) => {
                write_view(&View::compose(state), out);
                let retry = input.prompt_confirm(&format!("{RETRY_ACTION}しますか?"), true)?;
                if retry != Some(true) {
                    return Ok(false);
                }
            }
        }
    }
}

fn session(
    state: &mut AppState,
    quiet: bool,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<()> {
    loop {
        let menu = menu_for(state);
        let items: Vec<String> = menu
            .iter()
            .map(|cmd| cmd.label(state.advanced_open()).to_string())
            .collect();

        let Some(choice) = input.prompt_select(&menu_prompt(state), &items, Some(0))? else {
            return Ok(());
        };
        let Some(&command) = menu.get(choice) else {
            return Err(AddilessError::InvalidInput(format!(
                "menu index {choice} out of range"
            )));
        };
        tracing::debug!(?command, "browse command");

        match command {
            BrowseCommand::Quit => return Ok(()),
            BrowseCommand::SearchText => {
                let current = state.search_query().to_string();
                if let Some(text) = input.prompt_text("キーワード", Some(&current), true)? {
                    state.dispatch(Action::SetFreeText(text.trim().to_string()));
                }
            }
            BrowseCommand::ToggleAdvanced => {
                state.dispatch(Action::SetAdvancedOpen(!state.advanced_open()));
            }
            BrowseCommand::AdditiveMode => pick_additive_mode(state, input)?,
            BrowseCommand::Additives => {
                let current = state.facets().chosen_additives.clone();
                if let Some(picked) = pick_many(input, "添加物", ADDITIVES, &current)? {
                    state.dispatch(Action::SetChosenAdditives(picked));
                }
            }
            BrowseCommand::Manufacturer => pick_manufacturer(state, input)?,
            BrowseCommand::Genres => {
                let current = state.facets().genres.clone();
                if let Some(picked) = pick_many(input, "お酒のジャンル", GENRES, &current)? {
                    state.dispatch(Action::SetGenres(picked));
                }
            }
            BrowseCommand::Apply => {
                state.dispatch(Action::ApplyFilters);
                show_results(state, quiet, out);
            }
            BrowseCommand::RemoveTag => remove_tag(state, quiet, input, out)?,
            BrowseCommand::ClearAll => {
                state.dispatch(Action::ClearAll);
                show_results(state, quiet, out);
            }
            BrowseCommand::ShowResults => show_results(state, quiet, out),
        }

        if state.apply_mode() == ApplyMode::Explicit && state.has_pending_changes() {
            out.warning("未適用の変更があります。「フィルターを適用」で反映されます");
        }
    }
}

fn menu_prompt(state: &AppState) -> String {
    match applied_badge(state.facets(), state.active_labels().len()) {
        Some(badge) => format!("操作を選択 ({badge})"),
        None => "操作を選択".to_string(),
    }
}

fn pick_additive_mode(state: &mut AppState, input: &dyn UserInput) -> Result<()> {
    let items: Vec<String> = AdditiveMode::ALL
        .iter()
        .map(|mode| mode.display_label().to_string())
        .collect();
    let current = AdditiveMode::ALL
        .iter()
        .position(|&mode| mode == state.facets().additive_mode);

    if let Some(index) = input.prompt_select("添加物の条件", &items, current)? {
        if let Some(&mode) = AdditiveMode::ALL.get(index) {
            state.dispatch(Action::SetAdditiveMode(mode));
        }
    }
    Ok(())
}

fn pick_manufacturer(state: &mut AppState, input: &dyn UserInput) -> Result<()> {
    let items: Vec<String> = std::iter::once(ANY_MANUFACTURER_ITEM)
        .chain(MANUFACTURERS.iter().copied())
        .map(str::to_string)
        .collect();
    let current = state
        .facets()
        .effective_manufacturer()
        .and_then(|m| MANUFACTURERS.iter().position(|&v| v == m))
        .map_or(0, |i| i + 1);

    let Some(index) = input.prompt_select("メーカー", &items, Some(current))? else {
        return Ok(());
    };
    let manufacturer = match index {
        0 => ALL_MANUFACTURERS,
        i => match MANUFACTURERS.get(i - 1) {
            Some(m) => *m,
            None => return Ok(()),
        },
    };
    state.dispatch(Action::SetManufacturer(manufacturer.to_string()));
    Ok(())
}

fn remove_tag(
    state: &mut AppState,
    quiet: bool,
    input: &dyn UserInput,
    out: &dyn OutputWriter,
) -> Result<()> {
    let tags = tags_for_labels(state.active_labels());
    if tags.is_empty() {
        out.info("No active filters");
        return Ok(());
    }

    let items: Vec<String> = tags.iter().map(ToString::to_string).collect();
    if let Some(tag) = input
        .prompt_select("外すフィルター", &items, None)?
        .and_then(|i| tags.get(i))
    {
        state.dispatch(Action::RemoveFilterLabel(tag.label.clone()));
        show_results(state, quiet, out);
    }
    Ok(())
}

/// Checkbox prompt over a vocabulary, returning the new selection
fn pick_many(
    input: &dyn UserInput,
    prompt: &str,
    vocabulary: &[&str],
    current: &[String],
) -> Result<Option<Vec<String>>> {
    let items: Vec<String> = vocabulary.iter().map(|s| (*s).to_string()).collect();
    let checked: Vec<bool> = vocabulary
        .iter()
        .map(|term| current.iter().any(|c| c == term))
        .collect();

    Ok(input
        .prompt_multi_select(prompt, &items, &checked)?
        .map(|picked| merge_picked(current, vocabulary, &picked)))
}

/// Merge checkbox indices into the current selection
///
/// Terms that stay checked keep their position and newly checked terms are
/// appended, so label order follows the order the user picked them in.
/// Entries outside the vocabulary are left alone.
fn merge_picked(current: &[String], vocabulary: &[&str], picked: &[usize]) -> Vec<String> {
    let picked: Vec<&str> = picked
        .iter()
        .filter_map(|&i| vocabulary.get(i).copied())
        .collect();

    let mut merged: Vec<String> = current
        .iter()
        .filter(|c| picked.contains(&c.as_str()) || !vocabulary.contains(&c.as_str()))
        .cloned()
        .collect();
    for term in picked {
        if !merged.iter().any(|m| m == term) {
            merged.push(term.to_string());
        }
    }
    merged
}

fn show_results(state: &AppState, quiet: bool, out: &dyn OutputWriter) {
    write_view(&View::compose(state), out);
    for product in state.filtered() {
        out.write(&output::product_line(product, quiet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogError, Product, SampleCatalog, sample_products};
    use crate::testing::{ids, labels};
    use crate::ui::{BufferedWriter, Reply, ScriptedInput};
    use crate::view::ERROR_TITLE;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fails the first `failures` fetches, then serves the sample catalog
    struct FlakySource {
        failures: usize,
        calls: AtomicUsize,
    }

    impl CatalogSource for FlakySource {
        fn fetch(&self) -> std::result::Result<Vec<Product>, CatalogError> {
            if self.calls.fetch_add(1, Ordering::SeqCst) < self.failures {
                Err(CatalogError::Fetch("connection refused".to_string()))
            } else {
                Ok(sample_products())
            }
        }

        fn describe(&self) -> String {
            "flaky".to_string()
        }
    }

    fn loaded() -> AppState {
        AppState::with_catalog(sample_products(), ApplyMode::Explicit)
    }

    #[test]
    fn test_menu_closed_panel() {
        let state = loaded();
        assert_eq!(
            menu_for(&state),
            vec![
                BrowseCommand::SearchText,
                BrowseCommand::ToggleAdvanced,
                BrowseCommand::Apply,
                BrowseCommand::RemoveTag,
                BrowseCommand::ClearAll,
                BrowseCommand::ShowResults,
                BrowseCommand::Quit,
            ]
        );
    }

    #[test]
    fn test_menu_open_panel_shows_additives_only_for_has_mode() {
        let mut state = loaded();
        state.dispatch(Action::SetAdvancedOpen(true));
        assert!(menu_for(&state).contains(&BrowseCommand::Genres));
        assert!(!menu_for(&state).contains(&BrowseCommand::Additives));

        state.dispatch(Action::SetAdditiveMode(AdditiveMode::Has));
        assert_eq!(menu_for(&state)[3], BrowseCommand::Additives);
    }

    #[test]
    fn test_toggle_label_follows_panel() {
        assert_eq!(BrowseCommand::ToggleAdvanced.label(false), "詳細検索を開く");
        assert_eq!(BrowseCommand::ToggleAdvanced.label(true), "詳細検索を閉じる");
    }

    #[test]
    fn test_merge_keeps_pick_order() {
        let current = labels(&["保存料", "香料"]);
        // 香料 stays, 着色料 is new, 保存料 is unchecked
        let merged = merge_picked(&current, ADDITIVES, &[0, 1]);
        assert_eq!(merged, labels(&["香料", "着色料"]));
    }

    #[test]
    fn test_merge_leaves_unknown_entries() {
        let current = labels(&["糖類"]);
        let merged = merge_picked(&current, ADDITIVES, &[2]);
        assert_eq!(merged, labels(&["糖類", "保存料"]));
    }

    #[test]
    fn test_session_pick_genre_and_apply() {
        let mut state = loaded();
        let out = BufferedWriter::new();
        // Open menu: search, toggle, mode, manufacturer, genres, apply, remove, clear, show, quit
        let input = ScriptedInput::new(vec![
            Reply::Select(Some(1)),
            Reply::Select(Some(4)),
            Reply::MultiSelect(Some(vec![2])),
            Reply::Select(Some(5)),
            Reply::Select(Some(9)),
        ]);

        session(&mut state, true, &input, &out).unwrap();

        assert_eq!(state.active_labels(), ["ビール"]);
        assert_eq!(ids(state.filtered()), vec!["1"]);
        assert!(out.contains("1件見つかりました"));
        assert!(out.contains("未適用の変更があります"));
        assert_eq!(input.remaining(), 0);
    }

    #[test]
    fn test_session_remove_tag() {
        let mut state = loaded();
        let out = BufferedWriter::new();
        let input = ScriptedInput::new(vec![
            Reply::Select(Some(1)),
            Reply::Select(Some(2)),
            Reply::Select(Some(1)),
            Reply::Select(Some(5)),
            Reply::Select(Some(6)),
            Reply::Select(Some(0)),
            Reply::Select(Some(9)),
        ]);

        session(&mut state, true, &input, &out).unwrap();

        assert_eq!(state.facets().additive_mode, AdditiveMode::Unspecified);
        assert!(state.active_labels().is_empty());
        assert_eq!(state.filtered().len(), 8);
    }

    #[test]
    fn test_session_manufacturer_all_is_no_filter() {
        let mut state = loaded();
        let out = BufferedWriter::new();
        let input = ScriptedInput::new(vec![
            Reply::Select(Some(1)),
            Reply::Select(Some(3)),
            Reply::Select(Some(0)),
            Reply::Select(Some(5)),
            Reply::Select(None),
        ]);

        session(&mut state, true, &input, &out).unwrap();

        assert_eq!(state.facets().manufacturer, ALL_MANUFACTURERS);
        assert!(state.active_labels().is_empty());
        assert_eq!(state.filtered().len(), 8);
    }

    #[test]
    fn test_session_live_mode_has_no_pending_hint() {
        let mut state = AppState::with_catalog(sample_products(), ApplyMode::Live);
        let out = BufferedWriter::new();
        let input = ScriptedInput::new(vec![
            Reply::Select(Some(0)),
            Reply::Text(Some("ブルーベリー".to_string())),
            Reply::Select(Some(6)),
        ]);

        session(&mut state, true, &input, &out).unwrap();

        assert_eq!(ids(state.filtered()), vec!["6"]);
        assert!(!out.contains("未適用の変更があります"));
    }

    #[test]
    fn test_menu_badge_counts_applied_labels() {
        let mut state = loaded();
        assert_eq!(menu_prompt(&state), "操作を選択");

        state.dispatch(Action::ToggleGenre("ビール".to_string()));
        state.dispatch(Action::ToggleGenre("焼酎".to_string()));
        assert_eq!(menu_prompt(&state), "操作を選択 (0件適用中)");

        state.dispatch(Action::ApplyFilters);
        assert_eq!(menu_prompt(&state), "操作を選択 (2件適用中)");
    }

    #[test]
    fn test_session_keyword_edit_is_pending_until_applied() {
        let mut state = loaded();
        let out = BufferedWriter::new();
        let input = ScriptedInput::new(vec![
            Reply::Select(Some(0)),
            Reply::Text(Some("ブルーベリー".to_string())),
            Reply::Select(Some(2)),
            Reply::Select(Some(6)),
        ]);

        session(&mut state, true, &input, &out).unwrap();

        let hints = out
            .lines()
            .iter()
            .filter(|line| line.contains("未適用の変更があります"))
            .count();
        assert_eq!(hints, 1);
        assert_eq!(ids(state.filtered()), vec!["6"]);
    }

    #[test]
    fn test_session_out_of_range_choice() {
        let mut state = loaded();
        let out = BufferedWriter::new();
        let input = ScriptedInput::new(vec![Reply::Select(Some(42))]);

        let result = session(&mut state, true, &input, &out);
        assert!(matches!(result, Err(AddilessError::InvalidInput(_))));
    }

    #[test]
    fn test_execute_loads_then_quits() {
        let mut state = AppState::new(ApplyMode::Explicit);
        let out = BufferedWriter::new();
        let input = ScriptedInput::new(vec![Reply::Select(None)]);

        execute(&mut state, &SampleCatalog, true, &input, &out).unwrap();

        assert_eq!(state.catalog().len(), 8);
        assert!(out.contains("8件見つかりました"));
    }

    #[test]
    fn test_execute_retries_after_failure() {
        let mut state = AppState::new(ApplyMode::Explicit);
        let out = BufferedWriter::new();
        let source = FlakySource {
            failures: 1,
            calls: AtomicUsize::new(0),
        };
        let input = ScriptedInput::new(vec![Reply::Confirm(Some(true)), Reply::Select(None)]);

        execute(&mut state, &source, true, &input, &out).unwrap();

        assert!(out.contains(ERROR_TITLE));
        assert!(out.contains("connection refused"));
        assert_eq!(state.catalog().len(), 8);
    }

    #[test]
    fn test_execute_retry_declined() {
        let mut state = AppState::new(ApplyMode::Explicit);
        let out = BufferedWriter::new();
        let source = FlakySource {
            failures: 5,
            calls: AtomicUsize::new(0),
        };
        let input = ScriptedInput::new(vec![Reply::Confirm(Some(false))]);

        execute(&mut state, &source, true, &input, &out).unwrap();

        assert!(state.catalog().is_empty());
        assert_eq!(
            state.catalog().error(),
            Some("Failed to fetch alcohol products: connection refused")
        );
    }
}
