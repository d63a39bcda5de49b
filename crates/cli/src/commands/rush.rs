//! Rush order commands.
//!
//! # Usage
//!
//! ```bash
//! aims-cli rush place -c cart.yaml -e 2026-10-18T09:00:00Z -a "Hoan Kiem, Hanoi"
//! aims-cli rush info -p 0123456789 -n "Nguyen Van A"
//! aims-cli rush fee -a 250000
//! aims-cli rush address "xyzHN"
//! ```
//!
//! # Cart Fixture
//!
//! ```yaml
//! items:
//!   - media_id: 1
//!     title: Abbey Road
//!     quantity: 2
//!     unit_price: 120000
//!     available: 5
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use aims_core::{Cart, MediaId, Order, OrderLine};
use aims_rush_order::{
    ConfigError, NAME_KEY, PHONE_KEY, RushOrderConfig, RushOrderController, RushOrderError,
    RushOrderQuote, SeededFraction,
};
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

/// Errors that can occur during rush order commands.
#[derive(Debug, Error)]
pub enum RushCommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Cart fixture could not be read.
    #[error("Failed to read cart {path}: {source}")]
    ReadCart {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Cart fixture is not valid YAML.
    #[error("Failed to parse cart {path}: {source}")]
    ParseCart {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The rush order was rejected.
    #[error("Rush order rejected: {0}")]
    Rejected(#[from] RushOrderError),

    /// The address does not support rush delivery.
    #[error("Address does not support Rush Order: {0}")]
    UnsupportedAddress(String),
}

/// Build a controller from environment configuration.
fn controller(seed: Option<u64>) -> Result<RushOrderController, RushCommandError> {
    let config = RushOrderConfig::from_env()?;
    let controller = RushOrderController::new(&config);
    Ok(match seed {
        Some(seed) => controller.with_fee_source(SeededFraction::new(seed)),
        None => controller,
    })
}

/// Load a cart from a YAML fixture.
fn load_cart(path: &Path) -> Result<Cart, RushCommandError> {
    let content = std::fs::read_to_string(path).map_err(|source| RushCommandError::ReadCart {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| RushCommandError::ParseCart {
        path: path.to_path_buf(),
        source,
    })
}

fn contact_info(phone: &str, name: &str) -> HashMap<String, String> {
    HashMap::from([
        (PHONE_KEY.to_string(), phone.to_owned()),
        (NAME_KEY.to_string(), name.to_owned()),
    ])
}

/// Check a cart for rush delivery and log the quote.
///
/// When `contact` is given the phone number and name are validated too.
///
/// # Errors
///
/// Returns an error if configuration or the cart cannot be loaded, or if any
/// rush check fails.
pub fn place(
    cart_path: &str,
    expected: DateTime<Utc>,
    current: DateTime<Utc>,
    address: &str,
    contact: Option<(String, String)>,
    seed: Option<u64>,
) -> Result<(), RushCommandError> {
    let controller = controller(seed)?;
    let cart = load_cart(Path::new(cart_path))?;
    info!(path = %cart_path, items = cart.items.len(), "Loaded cart");

    let quote = if let Some((phone, name)) = contact {
        let info = contact_info(&phone, &name);
        controller.rush_order_quote(&cart, expected, current, address, &info)?
    } else {
        controller.place_rush_order(&cart, expected, current, address)?;
        let order = Order::from_cart(&cart);
        let shipping_fee = controller.calculate_shipping_fee(&order);
        RushOrderQuote {
            order,
            shipping_fee,
        }
    };

    info!("Rush order accepted");
    info!("  Order amount: {}", quote.order.amount());
    info!("  Shipping fee: {}", quote.shipping_fee);
    info!("  Total: {}", quote.total());
    Ok(())
}

/// Validate rush delivery contact info.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the info is invalid.
pub fn info(phone: &str, name: &str) -> Result<(), RushCommandError> {
    let controller = controller(None)?;
    controller.process_rush_delivery_info(&contact_info(phone, name))?;
    info!("Delivery info is valid");
    Ok(())
}

/// Price a rush shipping fee for an order of `amount`.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded.
pub fn fee(amount: i64, seed: Option<u64>) -> Result<(), RushCommandError> {
    let controller = controller(seed)?;
    let order = Order::new(vec![OrderLine {
        media_id: MediaId::new(0),
        quantity: 1,
        price: amount,
    }]);
    let shipping_fee = controller.calculate_shipping_fee(&order);
    info!("Shipping fee: {shipping_fee}");
    Ok(())
}

/// Check whether `address` supports rush delivery.
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded or the address is not
/// eligible.
pub fn address(address: &str) -> Result<(), RushCommandError> {
    let controller = controller(None)?;
    if !controller.validate_address(address) {
        return Err(RushCommandError::UnsupportedAddress(address.to_owned()));
    }
    info!(address, "Address supports rush delivery");
    Ok(())
}
