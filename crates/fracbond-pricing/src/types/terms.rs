//! Bond terms used as pricing input.

use serde::{Deserialize, Serialize};

/// Contractual terms of a bond with annual coupons.
///
/// Immutable input to pricing. `maturity_years` may be fractional; the PV
/// formula rounds it up to whole coupon periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BondTerms {
    /// Principal repaid at maturity.
    pub face_value: f64,
    /// Annual coupon rate as a fraction (0.08 = 8%).
    pub coupon_rate: f64,
    /// Years to maturity.
    pub maturity_years: f64,
}

impl BondTerms {
    /// Creates bond terms.
    #[must_use]
    pub fn new(face_value: f64, coupon_rate: f64, maturity_years: f64) -> Self {
        Self {
            face_value,
            coupon_rate,
            maturity_years,
        }
    }

    /// Annual coupon cash flow.
    #[must_use]
    pub fn coupon_amount(&self) -> f64 {
        self.face_value * self.coupon_rate
    }

    /// Number of whole annual coupon periods: `ceil(maturity_years)`, floored at 0.
    #[must_use]
    pub fn periods(&self) -> u32 {
        let n = self.maturity_years.ceil();
        if n.is_nan() || n <= 0.0 {
            0
        } else {
            n.min(f64::from(u32::MAX)) as u32
        }
    }

    /// Maturity clamped at zero.
    #[must_use]
    pub fn held_years(&self) -> f64 {
        self.maturity_years.max(0.0)
    }

    /// Maturity clamped to `[0, 5]` and scaled to `[0, 1]`.
    ///
    /// Both high-rated tenor adjustments saturate at five years.
    #[must_use]
    pub fn tenor_fraction(&self) -> f64 {
        self.maturity_years.clamp(0.0, 5.0) / 5.0
    }
}
