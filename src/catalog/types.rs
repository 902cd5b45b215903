//! Product record
//!
//! The JSON representation uses camelCase keys so catalogs exported from the
//! web front-end can be loaded as-is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single beverage in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Exactly one genre, e.g. `ビール`
    pub category: String,
    /// Declared ingredients and additives, in label order
    #[serde(default)]
    pub allergens: Vec<String>,
    #[serde(default)]
    pub is_allergen_free: bool,
    /// Percentage text such as `5.0%`
    #[serde(default)]
    pub alcohol_content: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Create a product with the fields the query engine looks at
    ///
    /// Everything else starts empty; use struct update syntax to fill in
    /// display fields.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        category: impl Into<String>,
        allergens: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            category: category.into(),
            allergens,
            is_allergen_free: false,
            alcohol_content: String::new(),
            description: String::new(),
            image: String::new(),
            rating: 0.0,
            review_count: 0,
            price: None,
            availability: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// True if any declared allergen entry contains `needle`
    ///
    /// Entries are free text, so `香料` matches an entry like `香料、酸味料`.
    #[must_use]
    pub fn declares(&self, needle: &str) -> bool {
        self.allergens.iter().any(|entry| entry.contains(needle))
    }
}
