//! Product types for the storefront catalogue.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Product status in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to shoppers.
    Draft,
    /// Product is active and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Draft => "draft",
            ProductStatus::Active => "active",
            ProductStatus::Archived => "archived",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(ProductStatus::Draft),
            "active" => Some(ProductStatus::Active),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// A product in the catalogue.
///
/// Size and color choices live directly on the product as plain tokens;
/// there is no variant hierarchy. A cart line records the chosen pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price, when higher than `price` it drives the SALE badge.
    pub original_price: Option<Money>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Image URLs, first entry is the listing thumbnail.
    pub images: Vec<String>,
    /// Average review score, 0 to 5.
    pub rating: f64,
    /// Number of reviews behind the score.
    pub reviews: u32,
    /// Offered colors as hex tokens (e.g., "#000000").
    pub colors: Vec<String>,
    /// Offered sizes (e.g., "P", "M", "G").
    pub sizes: Vec<String>,
    /// Stock per SKU-like key. Informational only, never decremented.
    pub stock: BTreeMap<String, u32>,
    /// Presentation flag for the NOVO badge.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_new: bool,
    /// Presentation flag for the sale treatment.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_sale: bool,
    /// Catalogue visibility status.
    pub status: ProductStatus,
}

impl Product {
    /// Check if the product is visible in the storefront.
    pub fn is_visible(&self) -> bool {
        self.status == ProductStatus::Active
    }

    /// Check if this product is on sale (original price above current).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op.amount_cents > self.price.amount_cents {
                let savings = op.amount_cents - self.price.amount_cents;
                Some((savings as f64 / op.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// The listing thumbnail, when any image is present.
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(|s| s.as_str())
    }

    /// Total units across all stock keys.
    pub fn total_stock(&self) -> u32 {
        self.stock.values().sum()
    }

    /// Check if the product offers the given size token.
    pub fn offers_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// Check if the product offers the given color token.
    pub fn offers_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Camiseta Básica".to_string(),
            description: "Algodão premium".to_string(),
            price: Money::new(8990, Currency::BRL),
            original_price: None,
            category: CategoryId::new("tshirts"),
            images: vec!["https://img.example/a.jpg".to_string()],
            rating: 4.8,
            reviews: 124,
            colors: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            sizes: vec!["P".to_string(), "M".to_string(), "G".to_string()],
            stock: BTreeMap::from([("default".to_string(), 50)]),
            is_new: true,
            is_sale: false,
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_visibility_follows_status() {
        let mut product = sample_product();
        assert!(product.is_visible());

        product.status = ProductStatus::Draft;
        assert!(!product.is_visible());

        product.status = ProductStatus::Archived;
        assert!(!product.is_visible());
    }

    #[test]
    fn test_on_sale_and_discount() {
        let mut product = sample_product();
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percentage(), None);

        product.price = Money::new(29990, Currency::BRL);
        product.original_price = Some(Money::new(39990, Currency::BRL));
        assert!(product.is_on_sale());
        let discount = product.discount_percentage().unwrap();
        assert!((discount - 25.0).abs() < 0.1);
    }

    #[test]
    fn test_original_price_at_or_below_current_is_not_a_sale() {
        let mut product = sample_product();
        product.original_price = Some(product.price);
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percentage(), None);
    }

    #[test]
    fn test_thumbnail_is_first_image() {
        let mut product = sample_product();
        assert_eq!(product.thumbnail(), Some("https://img.example/a.jpg"));

        product.images.clear();
        assert_eq!(product.thumbnail(), None);
    }

    #[test]
    fn test_offers_size_and_color() {
        let product = sample_product();
        assert!(product.offers_size("M"));
        assert!(!product.offers_size("GG"));
        assert!(product.offers_color("#000000"));
        assert!(!product.offers_color("#FF0000"));
    }

    #[test]
    fn test_total_stock_sums_all_keys() {
        let mut product = sample_product();
        product.stock.insert("outlet".to_string(), 8);
        assert_eq!(product.total_stock(), 58);
    }

    #[test]
    fn test_status_roundtrip() {
        for status in [
            ProductStatus::Draft,
            ProductStatus::Active,
            ProductStatus::Archived,
        ] {
            assert_eq!(ProductStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(ProductStatus::from_str("unknown"), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ProductStatus::Active).unwrap();
        assert_eq!(json, "\"active\"");
    }
}
