//! AIMS Rush Order - Rush delivery validation and shipping fees.
//!
//! A rush order is an order requesting expedited delivery. Before one is
//! placed, [`RushOrderController`] checks that:
//! - every cart item is in stock
//! - the requested delivery date is after the current date
//! - the delivery address ends with a supported locality
//! - the customer's phone number and name are well-formed
//!
//! It also prices the rush shipping fee as a random share of the order amount.
//!
//! # Modules
//!
//! - [`config`] - Supported localities, from defaults, environment or YAML
//! - [`address`] - Address eligibility matchers
//! - [`validation`] - Date, phone number and name validators
//! - [`fee`] - Shipping fee calculation and its random sources
//! - [`controller`] - The rush order flow
//! - [`error`] - Error types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod address;
pub mod config;
pub mod controller;
pub mod error;
pub mod fee;
pub mod validation;

pub use address::{AddressMatcher, SuffixMatcher};
pub use config::{ConfigError, DEFAULT_LOCALITIES, RushOrderConfig};
pub use controller::{NAME_KEY, PHONE_KEY, RushOrderController, RushOrderQuote};
pub use error::{InvalidDeliveryInfo, Result, RushOrderError};
pub use fee::{FeeFractionSource, FixedFraction, SeededFraction, ThreadRngFraction};
