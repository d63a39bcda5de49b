//! AIMS Core - Shared types library.
//!
//! This crate provides the data model consumed by the AIMS order flows:
//! - `rush-order` - Rush delivery validation and shipping fees
//! - `cli` - Command-line front end for running the checks
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, carts with stock availability, and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
