//! Form payloads for catalogue administration.
//!
//! A draft carries everything but the identity. Creating builds a fresh
//! entity around a generated ID; editing prefills a draft from the
//! existing entity and rebuilds it wholesale under the same ID.

use crate::catalog::{Product, ProductStatus, Slide};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId, SlideId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Editable product fields, as presented by the admin form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: Money,
    pub original_price: Option<Money>,
    pub category: CategoryId,
    pub images: Vec<String>,
    pub rating: f64,
    pub reviews: u32,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub stock: BTreeMap<String, u32>,
    pub is_new: bool,
    pub is_sale: bool,
    pub status: ProductStatus,
}

impl Default for ProductDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: Money::zero(Currency::BRL),
            original_price: None,
            category: CategoryId::new("tshirts"),
            images: Vec::new(),
            rating: 5.0,
            reviews: 0,
            colors: vec!["#000000".to_string()],
            sizes: vec!["M".to_string()],
            stock: BTreeMap::from([("default".to_string(), 10)]),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        }
    }
}

impl ProductDraft {
    /// Prefill a draft from an existing product for editing.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            original_price: product.original_price,
            category: product.category.clone(),
            images: product.images.clone(),
            rating: product.rating,
            reviews: product.reviews,
            colors: product.colors.clone(),
            sizes: product.sizes.clone(),
            stock: product.stock.clone(),
            is_new: product.is_new,
            is_sale: product.is_sale,
            status: product.status,
        }
    }

    /// Check the required fields: a name and a positive price.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.name.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "name is required".to_string(),
            ));
        }
        if !self.price.is_positive() {
            return Err(CommerceError::ValidationError(
                "price must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the product under the given identity.
    pub fn build(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            original_price: self.original_price,
            category: self.category,
            images: self.images,
            rating: self.rating,
            reviews: self.reviews,
            colors: self.colors,
            sizes: self.sizes,
            stock: self.stock,
            is_new: self.is_new,
            is_sale: self.is_sale,
            status: self.status,
        }
    }
}

/// Editable slide fields, as presented by the admin form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SlideDraft {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    pub badge: Option<String>,
    pub link: Option<String>,
    pub order: i32,
    pub active: bool,
}

impl Default for SlideDraft {
    fn default() -> Self {
        Self {
            image: String::new(),
            title: String::new(),
            subtitle: String::new(),
            cta_text: "Ver Mais".to_string(),
            badge: None,
            link: None,
            order: 1,
            active: true,
        }
    }
}

impl SlideDraft {
    /// Prefill a draft from an existing slide for editing.
    pub fn from_slide(slide: &Slide) -> Self {
        Self {
            image: slide.image.clone(),
            title: slide.title.clone(),
            subtitle: slide.subtitle.clone(),
            cta_text: slide.cta_text.clone(),
            badge: slide.badge.clone(),
            link: slide.link.clone(),
            order: slide.order,
            active: slide.active,
        }
    }

    /// Check the required fields: a title and an image URL.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.title.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "title is required".to_string(),
            ));
        }
        if self.image.trim().is_empty() {
            return Err(CommerceError::ValidationError(
                "image is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the slide under the given identity.
    pub fn build(self, id: SlideId) -> Slide {
        Slide {
            id,
            image: self.image,
            title: self.title,
            subtitle: self.subtitle,
            cta_text: self.cta_text,
            badge: self.badge,
            link: self.link,
            order: self.order,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_product_draft() -> ProductDraft {
        ProductDraft {
            name: "Camiseta Nova".to_string(),
            price: Money::new(7990, Currency::BRL),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn test_product_draft_defaults() {
        let draft = ProductDraft::default();
        assert_eq!(draft.category.as_str(), "tshirts");
        assert_eq!(draft.sizes, vec!["M".to_string()]);
        assert_eq!(draft.colors, vec!["#000000".to_string()]);
        assert_eq!(draft.stock.get("default"), Some(&10));
        assert_eq!(draft.status, ProductStatus::Active);
    }

    #[test]
    fn test_product_draft_requires_name() {
        let mut draft = valid_product_draft();
        draft.name = "   ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_product_draft_requires_positive_price() {
        let mut draft = valid_product_draft();
        draft.price = Money::zero(Currency::BRL);
        assert!(draft.validate().is_err());

        draft.price = Money::new(-100, Currency::BRL);
        assert!(draft.validate().is_err());

        draft.price = Money::new(1, Currency::BRL);
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_product_draft_build_assigns_id() {
        let draft = valid_product_draft();
        let product = draft.build(ProductId::new("p-9"));
        assert_eq!(product.id.as_str(), "p-9");
        assert_eq!(product.name, "Camiseta Nova");
        assert_eq!(product.price, Money::new(7990, Currency::BRL));
    }

    #[test]
    fn test_product_draft_roundtrip_preserves_fields() {
        let product = valid_product_draft().build(ProductId::new("p-1"));
        let rebuilt = ProductDraft::from_product(&product).build(ProductId::new("p-1"));
        assert_eq!(rebuilt, product);
    }

    #[test]
    fn test_slide_draft_defaults() {
        let draft = SlideDraft::default();
        assert_eq!(draft.cta_text, "Ver Mais");
        assert_eq!(draft.order, 1);
        assert!(draft.active);
    }

    #[test]
    fn test_slide_draft_requires_title_and_image() {
        let mut draft = SlideDraft {
            title: "Coleção Inverno".to_string(),
            image: "https://img.example/winter.jpg".to_string(),
            ..SlideDraft::default()
        };
        assert!(draft.validate().is_ok());

        draft.title = String::new();
        assert!(draft.validate().is_err());

        draft.title = "Coleção Inverno".to_string();
        draft.image = "  ".to_string();
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_slide_draft_build_assigns_id() {
        let draft = SlideDraft {
            title: "Coleção Inverno".to_string(),
            image: "https://img.example/winter.jpg".to_string(),
            order: 4,
            ..SlideDraft::default()
        };
        let slide = draft.build(SlideId::new("s-4"));
        assert_eq!(slide.id.as_str(), "s-4");
        assert_eq!(slide.order, 4);
        assert!(slide.active);
    }
}
