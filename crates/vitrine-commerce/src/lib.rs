//! Commerce domain types and logic for the VITRINE storefront.
//!
//! This crate provides the engine behind the storefront and its admin
//! panel:
//!
//! - **Catalog**: products, categories, hero slides, filtering, drafts
//! - **Cart**: position-addressed lines keyed by product/size/color
//! - **Checkout**: WhatsApp hand-off message and deep link
//! - **Seed**: the fixed records every process boots from
//!
//! # Example
//!
//! ```
//! use vitrine_commerce::prelude::*;
//!
//! let products = vitrine_commerce::seed::products();
//! let shirt = &products[0];
//!
//! let mut cart = Cart::new();
//! cart.add_item(shirt, "M", "#000000", 2)?;
//!
//! let summary = OrderSummary::from_cart(&cart, "VITRINE")?;
//! println!("{}", summary.whatsapp_link(None));
//! # Ok::<(), vitrine_commerce::CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod seed;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        visible_slides, Carousel, Category, Product, ProductDraft, ProductStatus, Slide,
        SlideDraft, StorefrontFilter,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, OrderSummary, SelectionKey};
}
