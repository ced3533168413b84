//! Fractional bond pricing.
//!
//! A bond is split into `fractions` equal parts sold to separate buyers. The
//! engine decides what the seller should receive in total, rounds that to a
//! per-fraction price, and reports the buyer's economics on the rounded price.
//!
//! The seller total depends on the rating class and, for high-rated bonds
//! only, on the [`PricingMode`]:
//!
//! | Class | Mode | Seller total | Buyer yield |
//! |-------|------|--------------|-------------|
//! | High | `PvForward` | PV at `coupon - 1% * min(T,5)/5` | current yield |
//! | High | `ForceSeller` | `F(1+c)(0.95 + 0.07 * min(T,5)/5)` | implied yield |
//! | High | `Fallback` | `F(1+c) * 0.98` | current yield |
//! | Low | any | `F(1 + 0.75c)` | current yield |
//! | Unclassified | any | `F` | coupon rate |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::pricing::yield_solver::YieldSolver;
use crate::rounding::{round_dp, round_money, PERCENT_DP, RATE_DP};
use crate::types::{BondTerms, RatingClass};

/// Default number of fractions a bond is split into.
pub const DEFAULT_FRACTIONS: u32 = 100;

/// Holding periods, in years, for buyer interest projections.
pub const PROJECTION_HORIZONS: [u32; 3] = [1, 3, 5];

/// Largest yield concession granted to high-rated bonds in forward-PV mode.
const MAX_YIELD_CONCESSION: f64 = 0.01;

/// Recovery scaling for seller-target mode: `BASE + SLOPE * min(T,5)/5`.
const SELLER_TARGET_BASE: f64 = 0.95;
const SELLER_TARGET_SLOPE: f64 = 0.07;

/// Haircut on gross redemption in high-rated fallback mode.
const FALLBACK_FACTOR: f64 = 0.98;

/// Share of the coupon a low-rated seller is assumed to recover.
const LOW_RATED_COUPON_RECOVERY: f64 = 0.75;

/// How high-rated bonds are priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingMode {
    /// Discount cash flows at a tenor-dependent target yield.
    #[default]
    PvForward,
    /// Seller fixes proceeds; the buyer's implied yield is solved for.
    ForceSeller,
    /// Flat haircut on principal plus one coupon.
    Fallback,
}

impl PricingMode {
    /// Resolves the pair of legacy flags into a mode.
    ///
    /// `force_seller_target` wins over `use_pv_forward`; neither set means
    /// [`PricingMode::Fallback`].
    #[must_use]
    pub fn from_flags(use_pv_forward: bool, force_seller_target: bool) -> Self {
        if force_seller_target {
            Self::ForceSeller
        } else if use_pv_forward {
            Self::PvForward
        } else {
            Self::Fallback
        }
    }

    /// Returns the wire name of this mode.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PvForward => "pv_forward",
            Self::ForceSeller => "force_seller",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for PricingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PricingMode {
    type Err = BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pv_forward" => Ok(Self::PvForward),
            "force_seller" => Ok(Self::ForceSeller),
            "fallback" => Ok(Self::Fallback),
            other => Err(BondError::invalid_input(format!(
                "unknown pricing mode '{other}'"
            ))),
        }
    }
}

/// Interest a buyer receives over one holding horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestProjection {
    /// Coupon income over the horizon, capped at maturity.
    pub absolute_interest: f64,
    /// `absolute_interest` as a percentage of the buyer's cost.
    pub return_pct_of_cost: f64,
}

/// Output of the fraction pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingResult {
    /// Price of one fraction.
    pub fraction_price: f64,
    /// Total the seller targets before per-fraction rounding.
    pub seller_total: f64,
    /// What buyers pay for all fractions, `fraction_price * fractions`.
    pub buyer_cost: f64,
    /// Buyer yield in percent; `None` when it cannot be determined.
    #[serde(rename = "buyer_expected_yield_%")]
    pub buyer_expected_yield_pct: Option<f64>,
    /// Coupon income projections keyed `1_year`, `3_year`, `5_year`.
    pub buyer_interest_projection: BTreeMap<String, InterestProjection>,
    /// Requested pricing mode.
    pub pricing_mode: PricingMode,
    /// Branch selected by the rating.
    pub rating_class: RatingClass,
    /// Discount rate used for the seller total, when one applies.
    pub used_yield: Option<f64>,
}

/// Seller-side figures before rounding.
struct SellerQuote {
    seller_total: f64,
    fraction_price: f64,
    used_yield: Option<f64>,
    buyer_yield: BuyerYield,
}

enum BuyerYield {
    CurrentYield,
    Implied,
    CouponRate,
}

/// Fraction pricing engine.
///
/// # Example
///
/// ```rust
/// use fracbond_pricing::prelude::*;
///
/// let pricer = FractionPricer::new().with_fractions(50);
/// let terms = BondTerms::new(5000.0, 0.07, 5.0);
/// let result = pricer.price(&terms, "AA+", PricingMode::PvForward);
///
/// assert!((result.fraction_price - 104.21).abs() < 1e-9);
/// assert_eq!(result.used_yield, Some(0.06));
/// ```
#[derive(Debug, Clone)]
pub struct FractionPricer {
    fractions: u32,
    solver: YieldSolver,
}

impl Default for FractionPricer {
    fn default() -> Self {
        Self::new()
    }
}

impl FractionPricer {
    /// Creates a pricer splitting bonds into [`DEFAULT_FRACTIONS`] parts.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fractions: DEFAULT_FRACTIONS,
            solver: YieldSolver::new(),
        }
    }

    /// Sets the number of fractions.
    #[must_use]
    pub fn with_fractions(mut self, fractions: u32) -> Self {
        self.fractions = fractions;
        self
    }

    /// Sets the solver used for implied yields in seller-target mode.
    #[must_use]
    pub fn with_solver(mut self, solver: YieldSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Prices one fraction of a bond.
    ///
    /// # Preconditions
    ///
    /// `fractions > 0`, finite terms, and in forward-PV mode a target yield
    /// above -1. Violations produce non-finite numbers; use
    /// [`FractionPricer::try_price`] to have them rejected.
    #[must_use]
    pub fn price(&self, terms: &BondTerms, rating: &str, mode: PricingMode) -> PricingResult {
        let rating_class = RatingClass::of(rating);
        let fractions = f64::from(self.fractions);
        let quote = self.seller_quote(terms, rating_class, mode);

        let buyer_cost = quote.fraction_price * fractions;
        let buyer_yield = match quote.buyer_yield {
            BuyerYield::CurrentYield => current_yield_pct(terms, buyer_cost),
            BuyerYield::Implied => quote.used_yield.map(|y| y * 100.0),
            BuyerYield::CouponRate => Some(terms.coupon_rate * 100.0),
        };

        PricingResult {
            fraction_price: round_money(quote.fraction_price),
            seller_total: round_money(quote.seller_total),
            buyer_cost: round_money(buyer_cost),
            buyer_expected_yield_pct: buyer_yield.map(|y| round_dp(y, PERCENT_DP)),
            buyer_interest_projection: projections(terms, buyer_cost),
            pricing_mode: mode,
            rating_class,
            used_yield: quote.used_yield.map(|y| round_dp(y, RATE_DP)),
        }
    }

    /// Prices one fraction after checking the preconditions of
    /// [`FractionPricer::price`].
    pub fn try_price(
        &self,
        terms: &BondTerms,
        rating: &str,
        mode: PricingMode,
    ) -> BondResult<PricingResult> {
        if self.fractions == 0 {
            return Err(BondError::invalid_input("fractions must be positive"));
        }
        for (name, value) in [
            ("face_value", terms.face_value),
            ("coupon_rate", terms.coupon_rate),
            ("maturity_years", terms.maturity_years),
        ] {
            if !value.is_finite() {
                return Err(BondError::invalid_input(format!("{name} must be finite")));
            }
        }
        if RatingClass::of(rating) == RatingClass::High
            && mode == PricingMode::PvForward
            && target_yield(terms) <= -1.0
        {
            return Err(BondError::invalid_input(
                "target yield must exceed -1 for forward PV pricing",
            ));
        }
        Ok(self.price(terms, rating, mode))
    }

    fn seller_quote(&self, terms: &BondTerms, class: RatingClass, mode: PricingMode) -> SellerQuote {
        let fractions = f64::from(self.fractions);
        let gross_redemption = terms.face_value * (1.0 + terms.coupon_rate);

        let (seller_total, used_yield, buyer_yield) = match (class, mode) {
            (RatingClass::High, PricingMode::PvForward) => {
                let y = target_yield(terms);
                (terms.price_at(y), Some(y), BuyerYield::CurrentYield)
            }
            (RatingClass::High, PricingMode::ForceSeller) => {
                let scale = SELLER_TARGET_BASE + SELLER_TARGET_SLOPE * terms.tenor_fraction();
                let seller_total = gross_redemption * scale;
                let implied = self.solver.solve(terms, seller_total);
                (seller_total, implied, BuyerYield::Implied)
            }
            (RatingClass::High, PricingMode::Fallback) => {
                (gross_redemption * FALLBACK_FACTOR, None, BuyerYield::CurrentYield)
            }
            (RatingClass::Low, _) => {
                let recovered = terms.coupon_rate * LOW_RATED_COUPON_RECOVERY;
                (terms.face_value * (1.0 + recovered), None, BuyerYield::CurrentYield)
            }
            (RatingClass::Unclassified, _) => {
                // Par per fraction, unrounded.
                return SellerQuote {
                    seller_total: terms.face_value,
                    fraction_price: terms.face_value / fractions,
                    used_yield: None,
                    buyer_yield: BuyerYield::CouponRate,
                };
            }
        };

        SellerQuote {
            seller_total,
            fraction_price: round_money(seller_total / fractions),
            used_yield,
            buyer_yield,
        }
    }
}

/// Prices one fraction with default solver settings.
///
/// # Example
///
/// ```rust
/// use fracbond_pricing::prelude::*;
///
/// let terms = BondTerms::new(1000.0, 0.08, 3.0);
/// let low = price_fraction(&terms, "CCC", 100, PricingMode::PvForward);
/// let low_fallback = price_fraction(&terms, "CCC", 100, PricingMode::Fallback);
///
/// assert_eq!(low.rating_class, RatingClass::Low);
/// assert_eq!(low.seller_total, low_fallback.seller_total);
/// ```
#[must_use]
pub fn price_fraction(
    terms: &BondTerms,
    rating: &str,
    fractions: u32,
    mode: PricingMode,
) -> PricingResult {
    FractionPricer::new()
        .with_fractions(fractions)
        .price(terms, rating, mode)
}

/// Target yield for forward-PV pricing: the coupon rate less a concession
/// growing linearly to 1% at five years.
fn target_yield(terms: &BondTerms) -> f64 {
    terms.coupon_rate - MAX_YIELD_CONCESSION * terms.tenor_fraction()
}

/// Annual coupon over buyer cost, in percent.
fn current_yield_pct(terms: &BondTerms, buyer_cost: f64) -> Option<f64> {
    if buyer_cost == 0.0 {
        return None;
    }
    let y = terms.coupon_amount() / buyer_cost * 100.0;
    y.is_finite().then_some(y)
}

fn projections(terms: &BondTerms, buyer_cost: f64) -> BTreeMap<String, InterestProjection> {
    PROJECTION_HORIZONS
        .iter()
        .map(|&horizon| {
            let held_years = f64::from(horizon).min(terms.held_years());
            let interest = terms.coupon_amount() * held_years;
            let return_pct = if buyer_cost == 0.0 {
                0.0
            } else {
                round_dp(interest / buyer_cost * 100.0, PERCENT_DP)
            };
            (
                format!("{horizon}_year"),
                InterestProjection {
                    absolute_interest: round_money(interest),
                    return_pct_of_cost: return_pct,
                },
            )
        })
        .collect()
}
