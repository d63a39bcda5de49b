//! Shopping cart with stock availability.
//!
//! A [`Cart`] is owned by the ordering flow and passed explicitly to whatever
//! needs to read it. Each [`CartItem`] carries the stock level observed when
//! the cart was loaded, so the availability check needs no I/O.

use serde::{Deserialize, Serialize};

use super::id::{CartId, MediaId};

/// Errors raised by cart checks.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// One or more line items request more than is in stock.
    #[error("one or more items insufficient stock: {}", format_ids(.media_ids))]
    MediaNotAvailable {
        /// Media whose requested quantity exceeds availability.
        media_ids: Vec<MediaId>,
    },
}

fn format_ids(ids: &[MediaId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A single line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The media being purchased.
    pub media_id: MediaId,
    /// Display title.
    pub title: String,
    /// Requested quantity.
    pub quantity: u32,
    /// Unit price in minor currency units.
    pub unit_price: i64,
    /// Quantity in stock when the cart was loaded.
    pub available: u32,
}

impl CartItem {
    /// Line total (`unit_price * quantity`).
    #[must_use]
    pub fn line_total(&self) -> i64 {
        self.unit_price.saturating_mul(i64::from(self.quantity))
    }

    /// Whether stock covers the requested quantity.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.quantity <= self.available
    }
}

/// A customer's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    /// Cart identifier, if the cart has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CartId>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<CartItem>,
}

impl Cart {
    /// Create a cart from line items.
    #[must_use]
    pub const fn new(items: Vec<CartItem>) -> Self {
        Self { id: None, items }
    }

    /// Add a line item.
    pub fn add(&mut self, item: CartItem) {
        self.items.push(item);
    }

    /// Returns `true` if the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.line_total()))
    }

    /// Check that every line item has sufficient stock.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::MediaNotAvailable`] naming every media whose
    /// requested quantity exceeds what is available.
    pub fn check_availability(&self) -> Result<(), CartError> {
        let media_ids: Vec<MediaId> = self
            .items
            .iter()
            .filter(|item| !item.is_available())
            .map(|item| item.media_id)
            .collect();

        if media_ids.is_empty() {
            Ok(())
        } else {
            Err(CartError::MediaNotAvailable { media_ids })
        }
    }
}
