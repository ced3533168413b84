//! Implied-yield solver.
//!
//! Inverts [`BondTerms::price_at`] by bisection. For positive cash flows the
//! price falls strictly as the yield rises, so any interval whose endpoint
//! prices straddle the target contains exactly one root.
//!
//! # Example
//!
//! ```rust
//! use fracbond_pricing::pricing::YieldSolver;
//! use fracbond_pricing::types::BondTerms;
//!
//! let terms = BondTerms::new(1000.0, 0.08, 3.0);
//! let price = terms.price_at(0.065);
//!
//! let y = YieldSolver::new().solve(&terms, price).unwrap();
//! assert!((y - 0.065).abs() < 1e-6);
//! ```

use fracbond_math::solvers::{bisection_widening, SolverConfig};
use fracbond_math::MathError;

use crate::error::{BondError, BondResult};
use crate::types::BondTerms;

/// Default lower end of the yield search interval.
pub const DEFAULT_LOWER: f64 = 1e-8;

/// Default upper end of the yield search interval.
pub const DEFAULT_UPPER: f64 = 1.0;

/// Upper end used for the single retry when the default interval does not
/// bracket the target price.
pub const DEFAULT_WIDENED_UPPER: f64 = 10.0;

/// Result of an implied-yield calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldResult {
    /// The implied yield (as a decimal, e.g., 0.05 for 5%).
    pub yield_value: f64,
    /// Number of bisection steps taken.
    pub iterations: u32,
    /// Price error at `yield_value`.
    pub residual: f64,
    /// False if the iteration budget ran out first; `yield_value` is then the
    /// midpoint of the final bracket.
    pub converged: bool,
}

/// Implied-yield solver.
///
/// Defaults: interval `[1e-8, 1.0]`, widened once to `10.0`, price tolerance
/// `1e-8`, at most 200 iterations, best-effort result on exhaustion.
#[derive(Debug, Clone)]
pub struct YieldSolver {
    lower: f64,
    upper: f64,
    widened_upper: f64,
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a new yield solver with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            widened_upper: DEFAULT_WIDENED_UPPER,
            config: SolverConfig::default(),
        }
    }

    /// Sets the initial search interval.
    #[must_use]
    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the upper bound tried when the initial interval fails.
    #[must_use]
    pub fn with_widened_upper(mut self, widened_upper: f64) -> Self {
        self.widened_upper = widened_upper;
        self
    }

    /// Sets the price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// Solves for the yield at which the bond prices at `target_price`.
    ///
    /// Returns [`BondError::UnbracketedYield`] when no sign change exists on
    /// the initial or the widened interval, [`BondError::InvalidInput`]
    /// when the interval reaches a yield of -1 or below, and
    /// [`BondError::Math`] when a bound is not finite.
    pub fn try_solve(&self, terms: &BondTerms, target_price: f64) -> BondResult<YieldResult> {
        if self.lower <= -1.0 {
            return Err(BondError::invalid_input(format!(
                "yield search interval must stay above -1, got lower bound {}",
                self.lower
            )));
        }

        let f = |y: f64| terms.price_at(y) - target_price;

        match bisection_widening(f, self.lower, self.upper, self.widened_upper, &self.config) {
            Ok(result) => Ok(YieldResult {
                yield_value: result.root,
                iterations: result.iterations,
                residual: result.residual,
                converged: result.converged,
            }),
            Err(MathError::InvalidBracket { a, b, .. }) => Err(BondError::UnbracketedYield {
                target_price,
                lower: a,
                upper: b,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Solves for the implied yield, or `None` when it cannot be bracketed.
    ///
    /// An under-converged midpoint is returned as a plain value; use
    /// [`YieldSolver::try_solve`] to see the convergence flag.
    #[must_use]
    pub fn solve(&self, terms: &BondTerms, target_price: f64) -> Option<f64> {
        match self.try_solve(terms, target_price) {
            Ok(result) => {
                if !result.converged {
                    log::debug!(
                        "implied yield for price {target_price} not converged after {} iterations",
                        result.iterations
                    );
                }
                Some(result.yield_value)
            }
            Err(e) => {
                log::debug!("implied yield unavailable: {e}");
                None
            }
        }
    }
}

/// Implied yield with default solver settings.
///
/// `None` means the yield is unavailable for these inputs.
#[must_use]
pub fn implied_yield(face_value: f64, coupon_rate: f64, price: f64, years: f64) -> Option<f64> {
    YieldSolver::new().solve(&BondTerms::new(face_value, coupon_rate, years), price)
}
