//! Storefront catalogue filtering.

use crate::catalog::Product;
use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// The storefront's browse state: one category chip plus a free-text
/// name query. Both narrow the visible set; neither re-sorts it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontFilter {
    /// Selected category, `all` matches every product.
    pub category: CategoryId,
    /// Case-insensitive name substring, empty matches every product.
    pub query: String,
}

impl Default for StorefrontFilter {
    fn default() -> Self {
        Self {
            category: CategoryId::all(),
            query: String::new(),
        }
    }
}

impl StorefrontFilter {
    /// Create a filter showing every active product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category chip.
    pub fn with_category(mut self, category: CategoryId) -> Self {
        self.category = category;
        self
    }

    /// Set the text query.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Switch the category chip in place.
    pub fn set_category(&mut self, category: CategoryId) {
        self.category = category;
    }

    /// Replace the text query in place.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Check whether a product passes the filter.
    ///
    /// Only active products are ever shown; the category chip then
    /// narrows by exact category (unless `all`), and the query by
    /// case-insensitive name containment.
    pub fn matches(&self, product: &Product) -> bool {
        if !product.is_visible() {
            return false;
        }
        if !self.category.is_all() && product.category != self.category {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        product
            .name
            .to_lowercase()
            .contains(&self.query.to_lowercase())
    }

    /// Apply the filter, preserving catalogue order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }
}
