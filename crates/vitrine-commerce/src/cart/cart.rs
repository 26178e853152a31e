//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// The selection a shopper made for one cart line.
///
/// Lines merge only when all three parts match; the same product in a
/// different size or color is a separate line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionKey {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Chosen size token.
    pub size: String,
    /// Chosen color token.
    pub color: String,
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// What the shopper selected.
    pub key: SelectionKey,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the line was added.
    pub unit_price: Money,
    /// Listing thumbnail (denormalized for display).
    pub image: Option<String>,
    /// Quantity, always at least 1.
    pub quantity: i64,
}

impl CartItem {
    fn new(product: &Product, size: &str, color: &str, quantity: i64) -> Self {
        Self {
            key: SelectionKey {
                product_id: product.id.clone(),
                size: size.to_string(),
                color: color.to_string(),
            },
            name: product.name.clone(),
            unit_price: product.price,
            image: product.thumbnail().map(String::from),
            quantity,
        }
    }

    /// Line total, `unit_price * quantity`.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.unit_price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart.
///
/// Lines are addressed by their position, and removal keeps the
/// remaining lines in their original relative order. Totals are always
/// recomputed from the current lines, never cached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The cart lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of lines (drives the cart badge).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across all lines (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Currency of the cart, taken from the first line.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|i| i.unit_price.currency)
            .unwrap_or_default()
    }

    /// Add a selection to the cart.
    ///
    /// Merges into an existing line when product, size, and color all
    /// match; otherwise a new line is appended. Returns the index of the
    /// affected line.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The product does not offer the size or color
    /// - Arithmetic overflow would occur
    pub fn add_item(
        &mut self,
        product: &Product,
        size: &str,
        color: &str,
        quantity: i64,
    ) -> Result<usize, CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if !product.offers_size(size) {
            return Err(CommerceError::UnknownSize {
                product_id: product.id.to_string(),
                size: size.to_string(),
            });
        }
        if !product.offers_color(color) {
            return Err(CommerceError::UnknownColor {
                product_id: product.id.to_string(),
                color: color.to_string(),
            });
        }

        let matches = |item: &CartItem| {
            item.key.product_id == product.id && item.key.size == size && item.key.color == color
        };
        if let Some(index) = self.items.iter().position(matches) {
            let existing = &mut self.items[index];
            existing.quantity = existing
                .quantity
                .checked_add(quantity)
                .ok_or(CommerceError::Overflow)?;
            return Ok(index);
        }

        self.items.push(CartItem::new(product, size, color, quantity));
        Ok(self.items.len() - 1)
    }

    /// Apply a quantity delta to the line at `index`.
    ///
    /// The resulting quantity never drops below 1; lines leave the cart
    /// only through `remove_item`. Returns `Ok(false)` when the index is
    /// out of bounds.
    pub fn update_quantity(&mut self, index: usize, delta: i64) -> Result<bool, CommerceError> {
        let Some(item) = self.items.get_mut(index) else {
            return Ok(false);
        };
        let adjusted = item
            .quantity
            .checked_add(delta)
            .ok_or(CommerceError::Overflow)?;
        item.quantity = adjusted.max(1);
        Ok(true)
    }

    /// Remove the line at `index`, keeping the rest in order.
    ///
    /// Out-of-bounds indexes are a no-op returning `false`.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if index < self.items.len() {
            self.items.remove(index);
            true
        } else {
            false
        }
    }

    /// Cart total, the sum of `unit_price * quantity` over all lines.
    ///
    /// Returns an error if arithmetic overflow occurs.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let mut total = Money::zero(self.currency());
        for item in &self.items {
            let line = item.line_total()?;
            total = total.try_add(&line).ok_or(CommerceError::Overflow)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductStatus;
    use crate::ids::CategoryId;
    use crate::seed;
    use std::collections::BTreeMap;

    fn shirt() -> Product {
        Product {
            id: ProductId::new("p-1"),
            name: "Camiseta Teste".to_string(),
            description: String::new(),
            price: Money::new(8990, Currency::BRL),
            original_price: None,
            category: CategoryId::new("tshirts"),
            images: vec!["https://img.example/shirt.jpg".to_string()],
            rating: 4.8,
            reviews: 10,
            colors: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            sizes: vec!["P".to_string(), "M".to_string(), "G".to_string()],
            stock: BTreeMap::from([("default".to_string(), 50)]),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        }
    }

    fn cap() -> Product {
        Product {
            id: ProductId::new("p-2"),
            name: "Boné Teste".to_string(),
            description: String::new(),
            price: Money::new(5990, Currency::BRL),
            original_price: None,
            category: CategoryId::new("accessories"),
            images: Vec::new(),
            rating: 4.5,
            reviews: 3,
            colors: vec!["#000000".to_string()],
            sizes: vec!["Único".to_string()],
            stock: BTreeMap::from([("default".to_string(), 100)]),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        }
    }

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total().unwrap(), Money::zero(Currency::BRL));
    }

    #[test]
    fn test_add_item_appends_line() {
        let mut cart = Cart::new();
        let index = cart.add_item(&shirt(), "M", "#000000", 2).unwrap();
        assert_eq!(index, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_same_selection_merges_into_one_line() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 1).unwrap();
        let index = cart.add_item(&shirt(), "M", "#000000", 2).unwrap();
        assert_eq!(index, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_different_size_or_color_keeps_separate_lines() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 1).unwrap();
        cart.add_item(&shirt(), "G", "#000000", 1).unwrap();
        cart.add_item(&shirt(), "M", "#FFFFFF", 1).unwrap();
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_item_rejects_nonpositive_quantity() {
        let mut cart = Cart::new();
        assert!(cart.add_item(&shirt(), "M", "#000000", 0).is_err());
        assert!(cart.add_item(&shirt(), "M", "#000000", -2).is_err());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_item_rejects_unknown_size_and_color() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_item(&shirt(), "XG", "#000000", 1),
            Err(CommerceError::UnknownSize { .. })
        ));
        assert!(matches!(
            cart.add_item(&shirt(), "M", "#FF0000", 1),
            Err(CommerceError::UnknownColor { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_applies_delta() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 1).unwrap();
        assert!(cart.update_quantity(0, 4).unwrap());
        assert_eq!(cart.items()[0].quantity, 5);
        assert!(cart.update_quantity(0, -2).unwrap());
        assert_eq!(cart.items()[0].quantity, 3);
    }

    #[test]
    fn test_update_quantity_never_drops_below_one() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 2).unwrap();
        assert!(cart.update_quantity(0, -100).unwrap());
        assert_eq!(cart.items()[0].quantity, 1);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_out_of_bounds_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 1).unwrap();
        assert!(!cart.update_quantity(5, 1).unwrap());
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_item_keeps_relative_order() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "P", "#000000", 1).unwrap();
        cart.add_item(&shirt(), "M", "#000000", 1).unwrap();
        cart.add_item(&shirt(), "G", "#000000", 1).unwrap();

        assert!(cart.remove_item(1));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].key.size, "P");
        assert_eq!(cart.items()[1].key.size, "G");
    }

    #[test]
    fn test_remove_item_out_of_bounds_is_a_no_op() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 1).unwrap();
        assert!(!cart.remove_item(7));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_total_tracks_add_update_remove() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 2).unwrap();
        cart.add_item(&cap(), "Único", "#000000", 1).unwrap();
        assert_eq!(cart.total().unwrap(), Money::new(23970, Currency::BRL));

        cart.update_quantity(1, 1).unwrap();
        assert_eq!(cart.total().unwrap(), Money::new(29960, Currency::BRL));

        cart.remove_item(0);
        assert_eq!(cart.total().unwrap(), Money::new(11980, Currency::BRL));
    }

    #[test]
    fn test_line_total_overflow_is_an_error() {
        let mut product = shirt();
        product.price = Money::new(i64::MAX, Currency::BRL);
        let mut cart = Cart::new();
        cart.add_item(&product, "M", "#000000", 2).unwrap();
        assert!(matches!(cart.total(), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_line_order() {
        let mut cart = Cart::new();
        cart.add_item(&shirt(), "M", "#000000", 2).unwrap();
        cart.add_item(&cap(), "Único", "#000000", 1).unwrap();

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.items()[0].key.size, "M");
        assert_eq!(restored.items()[1].key.size, "Único");
    }

    #[test]
    fn test_seeded_oversized_shirt_three_units_totals_269_70() {
        let products = seed::products();
        let oversized = products
            .iter()
            .find(|p| p.name == "Camiseta Oversized Premium")
            .unwrap();

        let mut cart = Cart::new();
        cart.add_item(oversized, "M", "#000000", 1).unwrap();
        cart.add_item(oversized, "M", "#000000", 2).unwrap();

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 3);
        assert_eq!(
            cart.items()[0].line_total().unwrap(),
            Money::new(26970, Currency::BRL)
        );
        assert_eq!(cart.total().unwrap().display(), "R$ 269.70");
    }
}
