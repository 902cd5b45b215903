//! Testing utilities for addiless
//!
//! Small builders for products, label lists and id extraction so unit tests
//! read as data rather than setup.
//!
//! Only available when compiled with `cfg(test)`.

use crate::catalog::Product;

/// Build a product with only the fields the query engine inspects
pub fn product(id: &str, name: &str, brand: &str, category: &str, allergens: &[&str]) -> Product {
    Product::new(
        id,
        name,
        brand,
        category,
        allergens.iter().map(|a| (*a).to_string()).collect(),
    )
}

/// Same as [`product`] but declared additive-free
pub fn additive_free(id: &str, name: &str, brand: &str, category: &str) -> Product {
    Product {
        is_allergen_free: true,
        ..product(id, name, brand, category, &[])
    }
}

/// Owned label list from string literals
pub fn labels(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

/// Product ids, in order
pub fn ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_free_builder() {
        let p = additive_free("x", "n", "b", "日本酒");
        assert!(p.is_allergen_free);
        assert!(p.allergens.is_empty());
    }

    #[test]
    fn test_ids_preserve_order() {
        let products = vec![product("b", "", "", "", &[]), product("a", "", "", "", &[])];
        assert_eq!(ids(&products), vec!["b", "a"]);
    }
}
