//! Search command - one-shot filtering of the catalog

use crate::AddilessError;
use crate::cli::FacetArgs;
use crate::output::{self, OutputFormat};
use crate::state::{Action, AppState};
use crate::ui::OutputWriter;
use crate::view::View;

type Result<T> = std::result::Result<T, AddilessError>;

/// Execute the search command against a loaded state
///
/// Facet flags are dispatched first, then the free text, then an explicit
/// apply, and finally any `--remove` labels. Text output is preceded by the
/// result summary; JSON and CSV output contain only the products.
///
/// # Errors
///
/// Returns an error if the products cannot be serialized.
pub fn execute(
    state: &mut AppState,
    query: Option<&str>,
    facets: &FacetArgs,
    remove: &[String],
    format: OutputFormat,
    quiet: bool,
    out: &dyn OutputWriter,
) -> Result<()> {
    for action in facets.to_actions() {
        state.dispatch(action);
    }
    if let Some(query) = query {
        state.dispatch(Action::SetFreeText(query.to_string()));
    }
    state.dispatch(Action::ApplyFilters);
    for label in remove {
        state.dispatch(Action::RemoveFilterLabel(label.clone()));
    }

    if format == OutputFormat::Text {
        if !quiet {
            output::write_view(&View::compose(state), out);
        }
        for product in state.filtered() {
            out.write(&output::product_line(product, quiet));
        }
    } else {
        out.write(&output::render_products(state.filtered(), format, quiet)?);
    }

    Ok(())
}
