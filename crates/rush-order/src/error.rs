//! Rush order error types.
//!
//! Every failure is terminal for the current request. The caller decides
//! whether to re-prompt the customer.

use aims_core::CartError;
use thiserror::Error;

/// Delivery information rejected for rush delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidDeliveryInfo {
    /// Expected delivery date is not strictly after the current date.
    #[error("Chosen date is invalid")]
    InvalidDate,

    /// Address does not end with a supported locality.
    #[error("Address does not support Rush Order")]
    UnsupportedAddress,

    /// Phone number or name failed validation.
    #[error("Some info is invalid")]
    InvalidContactInfo,
}

/// Errors returned by the rush order flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RushOrderError {
    /// The cart failed its availability check.
    #[error(transparent)]
    Availability(#[from] CartError),

    /// Delivery information was rejected.
    #[error(transparent)]
    InvalidDeliveryInfo(#[from] InvalidDeliveryInfo),
}

/// Result type alias for `RushOrderError`.
pub type Result<T> = std::result::Result<T, RushOrderError>;
