//! Core types for AIMS.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod order;

pub use cart::{Cart, CartError, CartItem};
pub use id::*;
pub use order::{Order, OrderLine};
