//! User input abstraction layer
//!
//! Interactive sessions ask for text, confirmations and selections through
//! [`UserInput`], so the same session logic runs against dialoguer prompts
//! or a scripted input in tests.

use std::io;

/// Prompts an interactive session can issue
///
/// Every prompt returns `Ok(None)` when the user cancels.
///
/// # Examples
///
/// ```no_run
/// use addiless::ui::input::{DialoguerInput, UserInput};
///
/// let input = DialoguerInput::new();
/// if let Some(query) = input.prompt_text("検索ワード", None, true).unwrap() {
///     println!("searching for {query}");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Free-text prompt, `default` pre-filled
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal interaction fails.
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;

    /// Yes/no prompt
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal interaction fails.
    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>>;

    /// Prompt user to select one item, returning its index
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal interaction fails.
    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>>;

    /// Prompt user to check any number of items, returning their indices
    ///
    /// `checked` marks the items that start out checked.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the terminal interaction fails.
    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>>;
}

pub type Result<T> = std::result::Result<T, InputError>;

/// Prompt failures
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Invalid input provided
    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// Terminal prompts backed by dialoguer's colorful theme
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input
            .interact_text()
            .map(Some)
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_confirm(&self, prompt: &str, default: bool) -> Result<Option<bool>> {
        use dialoguer::Confirm;

        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_select(
        &self,
        prompt: &str,
        items: &[String],
        default: Option<usize>,
    ) -> Result<Option<usize>> {
        use dialoguer::Select;

        let mut select = Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items);

        if let Some(def) = default {
            select = select.default(def);
        }

        select
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }

    fn prompt_multi_select(
        &self,
        prompt: &str,
        items: &[String],
        checked: &[bool],
    ) -> Result<Option<Vec<usize>>> {
        use dialoguer::MultiSelect;

        MultiSelect::with_theme(&self.theme)
            .with_prompt(prompt)
            .items(items)
            .defaults(checked)
            .interact_opt()
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}
