//! # Fracbond Pricing
//!
//! Bond pricing for fractional ownership.
//!
//! This crate provides:
//!
//! - **PV Pricer**: present value of annual coupons plus principal
//! - **Yield Solver**: implied yield by bisection on the PV formula
//! - **Fraction Pricing Engine**: per-fraction price, seller proceeds, buyer
//!   yield and interest projections under three pricing modes
//! - **Ratings**: the credit rating scale and its high/low classification
//!
//! ## Example
//!
//! ```rust
//! use fracbond_pricing::prelude::*;
//!
//! let terms = BondTerms::new(1000.0, 0.08, 3.0);
//! let result = price_fraction(&terms, "AAA", 100, PricingMode::PvForward);
//!
//! assert_eq!(result.pricing_mode, PricingMode::PvForward);
//! assert_eq!(result.rating_class, RatingClass::High);
//! assert!((result.fraction_price - 10.16).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod pricing;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{BondError, BondResult};
    pub use crate::pricing::{
        implied_yield, price_fraction, pv_price, FractionPricer, InterestProjection,
        PricingMode, PricingResult, YieldResult, YieldSolver, PROJECTION_HORIZONS,
    };
    pub use crate::types::{BondTerms, CreditRating, RatingClass};
}

pub use error::{BondError, BondResult};
