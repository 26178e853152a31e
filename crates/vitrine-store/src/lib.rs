//! Application state for the Vitrine demo store.
//!
//! Wraps the pure domain types from `vitrine-commerce` in the stateful
//! containers a running session needs: the seeded catalogue with its
//! admin mutations, the cart with durable snapshots, and the transient
//! notification center.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine_store::{CartStore, CatalogStore, Slot};
//!
//! let slot = Slot::open("/tmp/vitrine")?;
//! let catalog = CatalogStore::seeded();
//! let mut cart = CartStore::open(slot);
//!
//! // Adding a line persists the snapshot immediately.
//! let shirt = &catalog.products()[0];
//! cart.add_item(shirt, "M", "#000000", 1)?;
//! ```

mod cart_store;
mod catalog;
mod error;
mod notify;
mod slot;

pub use cart_store::{CartStore, CART_KEY};
pub use catalog::CatalogStore;
pub use error::StoreError;
pub use notify::{Notice, NoticeKind, Notices, DEFAULT_TTL};
pub use slot::Slot;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CartStore, CatalogStore, Notice, NoticeKind, Notices, Slot, StoreError};
}
