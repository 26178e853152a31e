//! WhatsApp checkout hand-off.
//!
//! Checkout never touches the cart: it renders the current lines into an
//! order message and builds the `wa.me` deep link. Opening the link is
//! the caller's side effect, and the cart stays intact afterwards so the
//! shopper can keep adjusting it.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A rendered order, ready for the WhatsApp hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderSummary {
    /// One entry per cart line, without the leading bullet.
    pub lines: Vec<String>,
    /// Cart total at render time.
    pub total: Money,
    /// Brand name woven into the greeting.
    pub store_name: String,
}

impl OrderSummary {
    /// Render the cart into an order summary.
    ///
    /// Returns an error only when the total cannot be computed.
    pub fn from_cart(cart: &Cart, store_name: impl Into<String>) -> Result<Self, CommerceError> {
        let lines = cart
            .items()
            .iter()
            .map(|item| {
                format!(
                    "{}x {} ({}, {}) - {}",
                    item.quantity,
                    item.name,
                    item.key.size,
                    item.key.color,
                    item.unit_price.display()
                )
            })
            .collect();
        Ok(Self {
            lines,
            total: cart.total()?,
            store_name: store_name.into(),
        })
    }

    /// The order message: greeting, blank line, bulleted lines in cart
    /// order, then the total directly on the next line.
    pub fn message(&self) -> String {
        let body = self
            .lines
            .iter()
            .map(|line| format!("\u{2022} {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "Olá, gostaria de finalizar meu pedido no {}:\n\n{}\nTotal: {}",
            self.store_name,
            body,
            self.total.display()
        )
    }

    /// Build the `wa.me` deep link carrying the URL-encoded message.
    ///
    /// Without a configured number the link opens WhatsApp's own chooser
    /// (`https://wa.me/?text=...`).
    pub fn whatsapp_link(&self, number: Option<&str>) -> String {
        let text = urlencoding::encode(&self.message()).into_owned();
        match number {
            Some(n) if !n.is_empty() => format!("https://wa.me/{n}?text={text}"),
            _ => format!("https://wa.me/?text={text}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductStatus};
    use crate::ids::{CategoryId, ProductId};
    use crate::money::Currency;
    use std::collections::BTreeMap;

    fn product(id: &str, name: &str, price_cents: i64, sizes: &[&str]) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: String::new(),
            price: Money::new(price_cents, Currency::BRL),
            original_price: None,
            category: CategoryId::new("tshirts"),
            images: Vec::new(),
            rating: 4.5,
            reviews: 1,
            colors: vec!["#000000".to_string()],
            sizes: sizes.iter().map(|s| s.to_string()).collect(),
            stock: BTreeMap::from([("default".to_string(), 10)]),
            is_new: false,
            is_sale: false,
            status: ProductStatus::Active,
        }
    }

    fn two_line_cart() -> Cart {
        let shirt = product("p-1", "Camiseta Teste", 8990, &["M"]);
        let cap = product("p-2", "Boné Teste", 5990, &["Único"]);
        let mut cart = Cart::new();
        cart.add_item(&shirt, "M", "#000000", 2).unwrap();
        cart.add_item(&cap, "Único", "#000000", 1).unwrap();
        cart
    }

    #[test]
    fn test_message_shape() {
        let cart = two_line_cart();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        assert_eq!(
            summary.message(),
            "Olá, gostaria de finalizar meu pedido no VITRINE:\n\n\
             \u{2022} 2x Camiseta Teste (M, #000000) - R$ 89.90\n\
             \u{2022} 1x Boné Teste (Único, #000000) - R$ 59.90\n\
             Total: R$ 239.70"
        );
    }

    #[test]
    fn test_lines_follow_cart_order() {
        let cart = two_line_cart();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        assert_eq!(summary.lines.len(), 2);
        assert!(summary.lines[0].starts_with("2x Camiseta Teste"));
        assert!(summary.lines[1].starts_with("1x Boné Teste"));
    }

    #[test]
    fn test_link_without_number_uses_bare_host() {
        let cart = two_line_cart();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        let link = summary.whatsapp_link(None);
        assert!(link.starts_with("https://wa.me/?text="));

        let link = summary.whatsapp_link(Some(""));
        assert!(link.starts_with("https://wa.me/?text="));
    }

    #[test]
    fn test_link_with_number_addresses_it() {
        let cart = two_line_cart();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        let link = summary.whatsapp_link(Some("5511999998888"));
        assert!(link.starts_with("https://wa.me/5511999998888?text="));
    }

    #[test]
    fn test_link_urlencodes_the_message() {
        let cart = two_line_cart();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        let link = summary.whatsapp_link(None);
        // "Olá" percent-encoded, no raw spaces or newlines survive.
        assert!(link.contains("Ol%C3%A1"));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("%0A"));
    }

    #[test]
    fn test_checkout_leaves_cart_untouched() {
        let cart = two_line_cart();
        let before = cart.clone();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        let _ = summary.whatsapp_link(None);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_empty_cart_renders_zero_total() {
        let cart = Cart::new();
        let summary = OrderSummary::from_cart(&cart, "VITRINE").unwrap();
        assert!(summary.lines.is_empty());
        assert_eq!(summary.total, Money::zero(Currency::BRL));
    }
}
