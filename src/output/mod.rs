//! Output formatting for CLI display
//!
//! Renders product lists as text, JSON or CSV, and writes composed views
//! (result summary, tags, empty state, load errors) through an
//! [`OutputWriter`].

use crate::AddilessError;
use crate::catalog::Product;
use crate::ui::OutputWriter;
use crate::view::{
    ERROR_TITLE, FILTERING_INDICATOR, LOADING_MESSAGE, RESULTS_HEADING, RETRY_ACTION, View,
};
use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Format for product listings
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per product
    #[default]
    Text,
    /// Pretty-printed JSON array
    Json,
    /// CSV with a header row
    Csv,
}

/// Format a product with its brand, strength and declared allergens
#[must_use]
pub fn product_line(product: &Product, quiet: bool) -> String {
    if quiet {
        return product.name.clone();
    }

    let mut line = format!(
        "  {} {} [{}]",
        product.name.bold(),
        product.brand.dimmed(),
        product.category
    );
    if !product.alcohol_content.is_empty() {
        line.push_str(&format!(" {}", product.alcohol_content));
    }
    if product.is_allergen_free {
        line.push_str(&format!(" {}", "添加物なし".green()));
    } else if !product.allergens.is_empty() {
        line.push_str(&format!(" ({})", product.allergens.join(", ")));
    }
    line
}

/// Render `products` in the requested format
///
/// # Errors
///
/// Returns `AddilessError::Serialization` if JSON or CSV encoding fails.
pub fn render_products(
    products: &[Product],
    format: OutputFormat,
    quiet: bool,
) -> Result<String, AddilessError> {
    match format {
        OutputFormat::Text => Ok(products
            .iter()
            .map(|p| product_line(p, quiet))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(products)
            .map_err(|e| AddilessError::Serialization(e.to_string())),
        OutputFormat::Csv => render_csv(products),
    }
}

fn render_csv(products: &[Product]) -> Result<String, AddilessError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record([
            "id",
            "name",
            "brand",
            "category",
            "alcoholContent",
            "isAllergenFree",
            "allergens",
            "rating",
            "reviewCount",
        ])
        .map_err(|e| AddilessError::Serialization(e.to_string()))?;

    for p in products {
        writer
            .write_record([
                p.id.as_str(),
                p.name.as_str(),
                p.brand.as_str(),
                p.category.as_str(),
                p.alcohol_content.as_str(),
                if p.is_allergen_free { "true" } else { "false" },
                p.allergens.join(";").as_str(),
                p.rating.to_string().as_str(),
                p.review_count.to_string().as_str(),
            ])
            .map_err(|e| AddilessError::Serialization(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AddilessError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AddilessError::Serialization(e.to_string()))
}

/// Write a composed view through `out`
pub fn write_view(view: &View, out: &dyn OutputWriter) {
    match view {
        View::Loading => out.info(LOADING_MESSAGE),
        View::Error { message } => {
            out.error(ERROR_TITLE);
            out.error(message);
            out.info(&format!("[{RETRY_ACTION}]"));
        }
        View::Results(results) => {
            let mut heading = format!("{RESULTS_HEADING}: {}", results.count_text());
            if results.filtering {
                heading.push_str(&format!(" ({FILTERING_INDICATOR})"));
            }
            out.info(&format!("{heading} / {}", results.total_text()));

            if !results.tags.is_empty() {
                let tags: Vec<String> = results.tags.iter().map(ToString::to_string).collect();
                out.info(&format!("適用中のフィルター: {}", tags.join("  ")));
            }

            if let Some(empty) = &results.empty_state {
                out.warning(empty.title);
                out.info(empty.message);
                out.info(empty.hints_heading);
                for hint in empty.hints {
                    out.info(&format!("  • {hint}"));
                }
                out.info(&format!("[{}]", empty.clear_action));
            }
        }
    }
}
