//! Bond pricing.
//!
//! - [`pv`]: discounted-cash-flow price of annual coupons plus principal
//! - [`yield_solver`]: implied yield by bisection on the PV formula
//! - [`fraction`]: per-fraction pricing and buyer economics

pub mod fraction;
pub mod pv;
pub mod yield_solver;

pub use fraction::{
    price_fraction, FractionPricer, InterestProjection, PricingMode, PricingResult,
    DEFAULT_FRACTIONS, PROJECTION_HORIZONS,
};
pub use pv::pv_price;
pub use yield_solver::{implied_yield, YieldResult, YieldSolver};
