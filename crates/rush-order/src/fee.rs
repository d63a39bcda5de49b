//! Rush shipping fee calculation.
//!
//! The fee is a random percentage of the order amount, in `[0%, 10%)`,
//! truncated toward zero. The random draw comes from a [`FeeFractionSource`]
//! so callers can pin it.

use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the fee rate, in percent.
pub const MAX_FEE_PERCENT: f64 = 10.0;

/// Produces uniform samples in `[0, 1)` used to pick the fee rate.
pub trait FeeFractionSource: Send + Sync {
    /// Draw the next sample.
    fn sample(&self) -> f32;
}

/// Draws from the thread-local RNG. Every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngFraction;

impl FeeFractionSource for ThreadRngFraction {
    fn sample(&self) -> f32 {
        rand::rng().random::<f32>()
    }
}

/// Draws from a seeded RNG, giving a reproducible sequence of fees.
#[derive(Debug)]
pub struct SeededFraction {
    rng: Mutex<StdRng>,
}

impl SeededFraction {
    /// Create a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl FeeFractionSource for SeededFraction {
    fn sample(&self) -> f32 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.random::<f32>()
    }
}

/// Largest `f32` below one.
const MAX_SAMPLE: f32 = 1.0 - f32::EPSILON / 2.0;

/// Always returns the same sample.
///
/// `FixedFraction::new(0.5)` yields a 5% fee. Samples are clamped into
/// `[0, 1)`; NaN becomes zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedFraction(f32);

impl FixedFraction {
    #[must_use]
    pub fn new(sample: f32) -> Self {
        if sample.is_nan() {
            return Self(0.0);
        }
        Self(sample.clamp(0.0, MAX_SAMPLE))
    }
}

impl FeeFractionSource for FixedFraction {
    fn sample(&self) -> f32 {
        self.0
    }
}

/// Compute the fee for `amount` given a uniform `sample` in `[0, 1)`.
///
/// `fee = trunc(sample * 10 / 100 * amount)`
#[must_use]
// Order amounts stay far below 2^52; the cast back truncates toward zero.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn shipping_fee(amount: i64, sample: f32) -> i64 {
    let rate = f64::from(sample) * MAX_FEE_PERCENT / 100.0;
    (rate * amount as f64).trunc() as i64
}
