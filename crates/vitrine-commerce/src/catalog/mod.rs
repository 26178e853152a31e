//! Storefront catalogue module.
//!
//! Contains types for products, categories, hero slides, filtering,
//! and the admin form drafts.

mod carousel;
mod category;
mod draft;
mod filter;
mod product;
mod slide;

pub use carousel::Carousel;
pub use category::Category;
pub use draft::{ProductDraft, SlideDraft};
pub use filter::StorefrontFilter;
pub use product::{Product, ProductStatus};
pub use slide::{visible_slides, Slide};
