//! Category types for product organization.
//!
//! The catalogue uses a flat, fixed category list with a match-everything
//! `all` sentinel that the storefront offers as its first filter chip.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name (e.g., "Camisetas").
    pub name: String,
    /// URL-friendly token. Matches the identifier for every seeded entry.
    pub slug: String,
}

impl Category {
    /// Create a new category. The slug is taken from the identifier.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        let id = id.into();
        let slug = id.as_str().to_string();
        Self {
            id,
            name: name.into(),
            slug,
        }
    }

    /// Check if this is the match-everything sentinel.
    pub fn is_all(&self) -> bool {
        self.id.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("tshirts", "Camisetas");
        assert_eq!(cat.id.as_str(), "tshirts");
        assert_eq!(cat.name, "Camisetas");
        assert_eq!(cat.slug, "tshirts");
        assert!(!cat.is_all());
    }

    #[test]
    fn test_all_sentinel() {
        let all = Category::new(CategoryId::all(), "Todos");
        assert!(all.is_all());
    }
}
