//! Field validators for rush delivery requests.
//!
//! These never fail; they answer yes or no. The controller turns a `false`
//! into an error.

use chrono::{DateTime, Utc};

/// Required length of a phone number.
pub const PHONE_LENGTH: usize = 10;

/// Returns `true` iff `expected` is strictly after `current`.
#[must_use]
pub fn validate_date(expected: DateTime<Utc>, current: DateTime<Utc>) -> bool {
    expected > current
}

/// Returns `true` iff `phone` is exactly ten ASCII digits starting with `0`.
#[must_use]
pub fn validate_phone_number(phone: &str) -> bool {
    phone.len() == PHONE_LENGTH
        && phone.starts_with('0')
        && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Characters allowed in a customer name.
#[must_use]
pub const fn is_name_char(c: char) -> bool {
    c == ' ' || c.is_ascii_alphabetic()
}

/// Returns `true` iff `name` is not blank and contains only ASCII letters
/// and spaces.
#[must_use]
pub fn validate_name(name: &str) -> bool {
    !name.trim().is_empty() && name.chars().all(is_name_char)
}
