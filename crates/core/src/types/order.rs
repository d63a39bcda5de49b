//! Orders built from a cart.

use serde::{Deserialize, Serialize};

use super::cart::Cart;
use super::id::{MediaId, OrderId};

/// A single ordered media line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub media_id: MediaId,
    pub quantity: u32,
    /// Line total in minor currency units.
    pub price: i64,
}

/// An order awaiting placement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
}

impl Order {
    /// Create an order from lines.
    #[must_use]
    pub const fn new(lines: Vec<OrderLine>) -> Self {
        Self { id: None, lines }
    }

    /// Build an order with one line per cart item.
    #[must_use]
    pub fn from_cart(cart: &Cart) -> Self {
        let lines = cart
            .items
            .iter()
            .map(|item| OrderLine {
                media_id: item.media_id,
                quantity: item.quantity,
                price: item.line_total(),
            })
            .collect();
        Self::new(lines)
    }

    /// Order amount: the sum of line totals.
    #[must_use]
    pub fn amount(&self) -> i64 {
        self.lines
            .iter()
            .fold(0_i64, |acc, line| acc.saturating_add(line.price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::cart::CartItem;

    #[test]
    fn test_amount_sums_lines() {
        let order = Order::new(vec![
            OrderLine {
                media_id: MediaId::new(1),
                quantity: 2,
                price: 400,
            },
            OrderLine {
                media_id: MediaId::new(2),
                quantity: 1,
                price: 600,
            },
        ]);
        assert_eq!(order.amount(), 1000);
    }

    #[test]
    fn test_empty_order_amount_is_zero() {
        assert_eq!(Order::default().amount(), 0);
    }

    #[test]
    fn test_from_cart_uses_line_totals() {
        let cart = Cart::new(vec![CartItem {
            media_id: MediaId::new(9),
            title: "Kind of Blue".to_string(),
            quantity: 3,
            unit_price: 150,
            available: 3,
        }]);
        let order = Order::from_cart(&cart);
        assert_eq!(order.lines.len(), 1);
        assert_eq!(order.amount(), 450);
        assert_eq!(order.amount(), cart.subtotal());
    }
}
