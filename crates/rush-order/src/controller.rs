//! Rush order controller.
//!
//! Checks that a cart and its delivery details qualify for rush delivery and
//! prices the rush shipping fee. The controller holds no per-request state;
//! the cart and order are passed in by the caller.

use std::collections::HashMap;
use std::hash::BuildHasher;

use aims_core::{Cart, Order};
use chrono::{DateTime, Utc};
use tracing::instrument;

use crate::address::{AddressMatcher, SuffixMatcher};
use crate::config::RushOrderConfig;
use crate::error::{InvalidDeliveryInfo, Result};
use crate::fee::{self, FeeFractionSource, ThreadRngFraction};
use crate::validation;

/// Delivery info key holding the customer's phone number.
pub const PHONE_KEY: &str = "phone";

/// Delivery info key holding the customer's name.
pub const NAME_KEY: &str = "name";

/// A rush order that passed every check, with its shipping fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RushOrderQuote {
    pub order: Order,
    pub shipping_fee: i64,
}

impl RushOrderQuote {
    /// Order amount plus shipping fee.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.order.amount().saturating_add(self.shipping_fee)
    }
}

/// Validates rush delivery requests and computes rush shipping fees.
pub struct RushOrderController {
    matcher: Box<dyn AddressMatcher>,
    fee_source: Box<dyn FeeFractionSource>,
}

impl std::fmt::Debug for RushOrderController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RushOrderController")
            .field("matcher", &"dyn AddressMatcher")
            .field("fee_source", &"dyn FeeFractionSource")
            .finish()
    }
}

impl Default for RushOrderController {
    fn default() -> Self {
        Self::new(&RushOrderConfig::default())
    }
}

impl RushOrderController {
    /// Create a controller that matches addresses against the configured
    /// localities and draws fees from the thread RNG.
    #[must_use]
    pub fn new(config: &RushOrderConfig) -> Self {
        Self {
            matcher: Box::new(SuffixMatcher::from_config(config)),
            fee_source: Box::new(ThreadRngFraction),
        }
    }

    /// Replace the fee fraction source.
    #[must_use]
    pub fn with_fee_source(mut self, source: impl FeeFractionSource + 'static) -> Self {
        self.fee_source = Box::new(source);
        self
    }

    /// Replace the address matcher.
    #[must_use]
    pub fn with_matcher(mut self, matcher: impl AddressMatcher + 'static) -> Self {
        self.matcher = Box::new(matcher);
        self
    }

    /// Check that `cart` and the delivery date and address qualify for rush
    /// delivery.
    ///
    /// Checks run in order and stop at the first failure: stock, then date,
    /// then address.
    ///
    /// # Errors
    ///
    /// - [`RushOrderError::Availability`](crate::RushOrderError::Availability)
    ///   if any cart item is short on stock
    /// - [`InvalidDeliveryInfo::InvalidDate`] if `expected` is not after `current`
    /// - [`InvalidDeliveryInfo::UnsupportedAddress`] if the address is not eligible
    #[instrument(
        skip_all,
        fields(items = cart.items.len(), expected = %expected, current = %current)
    )]
    pub fn place_rush_order(
        &self,
        cart: &Cart,
        expected: DateTime<Utc>,
        current: DateTime<Utc>,
        address: &str,
    ) -> Result<()> {
        cart.check_availability()?;

        if !self.validate_date(expected, current) {
            tracing::info!("Rush order rejected: delivery date not after current date");
            return Err(InvalidDeliveryInfo::InvalidDate.into());
        }

        if !self.validate_address(address) {
            tracing::info!("Rush order rejected: address not eligible");
            return Err(InvalidDeliveryInfo::UnsupportedAddress.into());
        }

        tracing::info!("Rush order accepted");
        Ok(())
    }

    /// Log and validate rush delivery contact info.
    ///
    /// # Errors
    ///
    /// See [`RushOrderController::validate_rush_delivery_info`].
    pub fn process_rush_delivery_info<S: BuildHasher>(
        &self,
        info: &HashMap<String, String, S>,
    ) -> Result<()> {
        tracing::info!("Process rush order delivery info");
        tracing::debug!(?info, "Rush delivery info");
        self.validate_rush_delivery_info(info)
    }

    /// Log and validate the rush delivery date.
    #[must_use]
    pub fn process_rush_order_date(
        &self,
        expected: DateTime<Utc>,
        current: DateTime<Utc>,
    ) -> bool {
        tracing::info!(%expected, %current, "Process rush order delivery date");
        self.validate_date(expected, current)
    }

    /// Check the phone number and name in `info`.
    ///
    /// A missing `phone` or `name` entry counts as invalid.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidDeliveryInfo::InvalidContactInfo`] if either field
    /// fails validation.
    pub fn validate_rush_delivery_info<S: BuildHasher>(
        &self,
        info: &HashMap<String, String, S>,
    ) -> Result<()> {
        let phone_ok = info
            .get(PHONE_KEY)
            .is_some_and(|phone| self.validate_phone_number(phone));
        let name_ok = info
            .get(NAME_KEY)
            .is_some_and(|name| self.validate_name(name));

        if phone_ok && name_ok {
            Ok(())
        } else {
            Err(InvalidDeliveryInfo::InvalidContactInfo.into())
        }
    }

    /// Returns `true` iff `phone` is ten ASCII digits starting with `0`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate_phone_number(&self, phone: &str) -> bool {
        validation::validate_phone_number(phone)
    }

    /// Returns `true` iff `name` is non-blank ASCII letters and spaces.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate_name(&self, name: &str) -> bool {
        validation::validate_name(name)
    }

    /// Returns `true` iff the address supports rush delivery.
    #[must_use]
    pub fn validate_address(&self, address: &str) -> bool {
        self.matcher.matches(address)
    }

    /// Returns `true` iff `expected` is strictly after `current`.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn validate_date(&self, expected: DateTime<Utc>, current: DateTime<Utc>) -> bool {
        validation::validate_date(expected, current)
    }

    /// Rush shipping fee for `order`: a random share of its amount in
    /// `[0%, 10%)`, truncated.
    #[must_use]
    pub fn calculate_shipping_fee(&self, order: &Order) -> i64 {
        let amount = order.amount();
        let shipping_fee = fee::shipping_fee(amount, self.fee_source.sample());
        tracing::info!(amount, shipping_fee, "Calculated rush shipping fee");
        shipping_fee
    }

    /// Run every rush check and price the resulting order.
    ///
    /// # Errors
    ///
    /// Fails with the first error from [`RushOrderController::place_rush_order`]
    /// or [`RushOrderController::validate_rush_delivery_info`].
    pub fn rush_order_quote<S: BuildHasher>(
        &self,
        cart: &Cart,
        expected: DateTime<Utc>,
        current: DateTime<Utc>,
        address: &str,
        info: &HashMap<String, String, S>,
    ) -> Result<RushOrderQuote> {
        self.place_rush_order(cart, expected, current, address)?;
        self.process_rush_delivery_info(info)?;

        let order = Order::from_cart(cart);
        let shipping_fee = self.calculate_shipping_fee(&order);
        Ok(RushOrderQuote {
            order,
            shipping_fee,
        })
    }
}
