//! Integration tests for AIMS.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p aims-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `rush_order_flow` - End-to-end rush order placement and quoting
//! - `rush_order_config` - Locality configuration from YAML and lookups
//!
//! This library holds the shared fixtures.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;

use aims_core::{Cart, CartItem, MediaId};
use aims_rush_order::{NAME_KEY, PHONE_KEY};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// A fixed "today" so date checks are reproducible.
#[must_use]
pub fn today() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 11, 4, 8, 30, 0)
        .single()
        .unwrap_or_default()
}

/// The day after [`today`].
#[must_use]
pub fn tomorrow() -> DateTime<Utc> {
    today() + Duration::days(1)
}

/// The day before [`today`].
#[must_use]
pub fn yesterday() -> DateTime<Utc> {
    today() - Duration::days(1)
}

/// A cart line with the given stock numbers.
#[must_use]
pub fn cart_item(id: i32, unit_price: i64, quantity: u32, available: u32) -> CartItem {
    CartItem {
        media_id: MediaId::new(id),
        title: format!("Media {id}"),
        quantity,
        unit_price,
        available,
    }
}

/// A two-line cart with enough stock, totalling 1000.
#[must_use]
pub fn available_cart() -> Cart {
    Cart::new(vec![cart_item(1, 200, 2, 10), cart_item(2, 600, 1, 1)])
}

/// Contact info keyed the way the rush order controller expects.
#[must_use]
pub fn contact_info(phone: &str, name: &str) -> HashMap<String, String> {
    HashMap::from([
        (PHONE_KEY.to_string(), phone.to_string()),
        (NAME_KEY.to_string(), name.to_string()),
    ])
}
