//! Shopping cart module.
//!
//! Contains the cart, its lines, and the WhatsApp checkout hand-off.

mod cart;
mod checkout;

pub use cart::{Cart, CartItem, SelectionKey};
pub use checkout::OrderSummary;
