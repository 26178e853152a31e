//! Durable cart container.

use crate::{Slot, StoreError};
use tracing::{debug, warn};
use vitrine_commerce::cart::Cart;
use vitrine_commerce::catalog::Product;

/// Slot key the cart snapshot lives under.
pub const CART_KEY: &str = "cart";

/// The cart plus its durable slot.
///
/// The snapshot is read once at open; afterwards the in-memory cart is
/// the source of truth and every successful mutation writes it back
/// before returning.
pub struct CartStore {
    cart: Cart,
    slot: Slot,
}

impl CartStore {
    /// Open the store, rehydrating the cart from the slot.
    ///
    /// A missing snapshot starts an empty cart. An unreadable one is
    /// logged and discarded, never a crash: losing a stale cart beats
    /// losing the session.
    pub fn open(slot: Slot) -> Self {
        let cart = match slot.get::<Cart>(CART_KEY) {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!("discarding unreadable cart snapshot: {e}");
                Cart::new()
            }
        };
        Self { cart, slot }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Add a selection to the cart and persist it.
    ///
    /// Rejected adds leave both the cart and the snapshot untouched.
    pub fn add_item(
        &mut self,
        product: &Product,
        size: &str,
        color: &str,
        quantity: i64,
    ) -> Result<usize, StoreError> {
        let index = self.cart.add_item(product, size, color, quantity)?;
        self.persist()?;
        Ok(index)
    }

    /// Apply a quantity delta to the line at `index`, persisting when a
    /// line changed. Out-of-bounds indexes return `Ok(false)`.
    pub fn update_quantity(&mut self, index: usize, delta: i64) -> Result<bool, StoreError> {
        let changed = self.cart.update_quantity(index, delta)?;
        if changed {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Remove the line at `index`, persisting when a line was removed.
    /// Out-of-bounds indexes return `Ok(false)`.
    pub fn remove_item(&mut self, index: usize) -> Result<bool, StoreError> {
        let removed = self.cart.remove_item(index);
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.slot.set(CART_KEY, &self.cart)?;
        debug!(lines = self.cart.len(), "cart snapshot persisted");
        Ok(())
    }
}
