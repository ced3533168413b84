//! Present-value pricing.

use crate::types::BondTerms;

/// Price of a bond as the present value of its annual coupons and principal.
///
/// With `n = ceil(years)` (floored at 0):
///
/// - `n == 0`: `face_value * (1 + coupon_rate)`, immediate redemption plus one coupon
/// - otherwise: `Σ_{t=1..n} C / (1+y)^t + F / (1+y)^n` with `C = F * coupon_rate`
///
/// # Preconditions
///
/// `yield_rate > -1`. At exactly -1 the discount factor divides by zero;
/// the function does not check.
///
/// # Example
///
/// ```rust
/// use fracbond_pricing::pricing::pv_price;
///
/// // Zero yield: price is the plain sum of cash flows.
/// let price = pv_price(1000.0, 0.05, 0.0, 4.0);
/// assert!((price - 1200.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn pv_price(face_value: f64, coupon_rate: f64, yield_rate: f64, years: f64) -> f64 {
    BondTerms::new(face_value, coupon_rate, years).price_at(yield_rate)
}

impl BondTerms {
    /// Present value of the bond at `yield_rate`. See [`pv_price`].
    #[must_use]
    pub fn price_at(&self, yield_rate: f64) -> f64 {
        let coupon = self.coupon_amount();
        let n = self.periods();

        if n == 0 {
            return self.face_value + coupon;
        }

        let growth = 1.0 + yield_rate;
        let mut discount = 1.0;
        let mut pv_coupons = 0.0;
        for _ in 0..n {
            discount /= growth;
            pv_coupons += coupon * discount;
        }

        pv_coupons + self.face_value * discount
    }
}
