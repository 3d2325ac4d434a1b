//! Domain entities. Pure data structures for the core business.
//!
//! No file/HTTP types here; adapters map into these.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A single product from the catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(rename = "product_name")]
    pub name: String,
    pub category: String,
    /// Source representation, e.g. `"$50"`. Parsed on demand by [`super::parse_price`].
    pub price: String,
    pub reviews: Vec<String>,
}

/// Category and price bounds supplied by the user.
///
/// `min_price <= max_price` is the caller's responsibility; the filter does not check it.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    pub category: String,
    pub min_price: f64,
    pub max_price: f64,
}

impl FilterCriteria {
    pub fn new(category: impl Into<String>, min_price: f64, max_price: f64) -> Self {
        Self {
            category: category.into(),
            min_price,
            max_price,
        }
    }
}

/// The loaded catalog. Immutable once constructed.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    pub fn new(products: Vec<ProductRecord>) -> Self {
        Self { products }
    }

    /// All products in file order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Distinct category labels, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.products
            .iter()
            .map(|p| p.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
