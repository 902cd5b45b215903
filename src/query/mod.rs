//! Catalog query engine
//!
//! Combines a free-text query with the active filter labels into one
//! predicate and applies it over a product slice. Filtering is stable: the
//! result is always a subsequence of the input in its original order.
//!
//! - Free text matches case-insensitively as a substring of the product
//!   name, brand or category.
//! - Labels are ANDed. Each label is classified against the facet
//!   vocabularies (see [`LabelClass`]) to decide which product field it
//!   constrains.
//! - A label in no vocabulary constrains nothing.
//!
//! ```
//! use addiless::catalog::sample_products;
//! use addiless::query::filter_catalog;
//!
//! let catalog = sample_products();
//! let labels = vec!["香料".to_string(), "チューハイ".to_string()];
//! let ids: Vec<_> = filter_catalog(&catalog, "", &labels)
//!     .into_iter()
//!     .map(|p| p.id)
//!     .collect();
//! assert_eq!(ids, vec!["3", "4"]);
//! ```

use crate::catalog::Product;
use crate::facets::LabelClass;

/// True if the query is empty or occurs in the name, brand or category
///
/// Comparison is on lower-cased text; there is no tokenization.
#[must_use]
pub fn matches_text(product: &Product, text: &str) -> bool {
    if text.is_empty() {
        return true;
    }
    matches_lowered_text(product, &text.to_lowercase())
}

fn matches_lowered_text(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.name.to_lowercase().contains(needle)
        || product.brand.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// True if `product` satisfies a single active label
#[must_use]
pub fn matches_label(product: &Product, label: &str) -> bool {
    match LabelClass::of(label) {
        LabelClass::NoAdditives => product.is_allergen_free,
        LabelClass::Manufacturer => product.brand == label,
        LabelClass::Genre => product.category == label,
        LabelClass::Additive => product.declares(label),
        LabelClass::Unrecognized => true,
    }
}

/// True if `product` satisfies every label
#[must_use]
pub fn matches_all_labels<S: AsRef<str>>(product: &Product, labels: &[S]) -> bool {
    labels.iter().all(|label| matches_label(product, label.as_ref()))
}

/// A prepared query: lower-cased text plus active labels
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQuery {
    text: String,
    labels: Vec<String>,
}

impl ProductQuery {
    /// Prepare a query, lower-casing the text once
    #[must_use]
    pub fn new(text: &str, labels: &[String]) -> Self {
        for label in labels {
            if LabelClass::of(label) == LabelClass::Unrecognized {
                tracing::debug!(label = %label, "label not in any facet vocabulary, ignoring");
            }
        }
        Self {
            text: text.to_lowercase(),
            labels: labels.to_vec(),
        }
    }

    /// True if the query places no constraint at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.labels.is_empty()
    }

    /// True if `product` passes both the text and every label
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        matches_lowered_text(product, &self.text) && matches_all_labels(product, &self.labels)
    }
}

/// Extension trait for filtering product slices in place
pub trait ProductFilterExt {
    /// Iterate over the products matching `query`, in order
    fn apply_query<'a>(&'a self, query: &'a ProductQuery) -> impl Iterator<Item = &'a Product> + 'a;
}

impl ProductFilterExt for [Product] {
    fn apply_query<'a>(
        &'a self,
        query: &'a ProductQuery,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.iter().filter(move |product| query.matches(product))
    }
}

/// Filter `products` by free text and active labels
#[must_use]
pub fn filter_catalog(products: &[Product], text: &str, labels: &[String]) -> Vec<Product> {
    let query = ProductQuery::new(text, labels);
    products.apply_query(&query).cloned().collect()
}
