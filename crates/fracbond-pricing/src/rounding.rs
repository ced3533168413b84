//! Decimal rounding of reported figures.
//!
//! Prices and yields are computed in `f64` and rounded through
//! [`rust_decimal`] only when they are reported. The decimal keeps the exact
//! binary value of the float, so `2.675` (stored just below the tie) rounds
//! down, and exact ties go to the even digit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places for monetary amounts.
pub const MONEY_DP: u32 = 2;

/// Decimal places for buyer yields quoted in percent.
pub const PERCENT_DP: u32 = 2;

/// Decimal places for internal yields quoted as fractions.
pub const RATE_DP: u32 = 6;

/// Decimal places for portfolio risk scores.
pub const SCORE_DP: u32 = 4;

/// Rounds `value` to `dp` decimal places, midpoints to even.
///
/// Values that do not fit a `Decimal` (NaN, infinities, magnitudes above
/// ~7.9e28) are returned unchanged.
///
/// # Example
///
/// ```rust
/// use fracbond_pricing::rounding::round_dp;
///
/// assert!((round_dp(10.156315, 2) - 10.16).abs() < 1e-9);
/// assert!((round_dp(2.5, 0) - 2.0).abs() < 1e-9);
/// assert!((round_dp(2.675, 2) - 2.67).abs() < 1e-9);
/// ```
#[must_use]
pub fn round_dp(value: f64, dp: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

/// Rounds a monetary amount to cents.
#[must_use]
pub fn round_money(value: f64) -> f64 {
    round_dp(value, MONEY_DP)
}
