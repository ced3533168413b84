//! # Fracbond
//!
//! Pricing of fractional bond ownership and portfolio bond recommendations.
//!
//! This crate re-exports the library crates of the workspace:
//!
//! - [`math`]: bracketing root finders
//! - [`pricing`]: PV pricing, implied yields and fraction pricing
//! - [`portfolio`]: risk scoring, bond selection and rebalancing
//!
//! ```rust
//! use fracbond::prelude::*;
//!
//! let terms = BondTerms::new(1000.0, 0.08, 3.0);
//! let quote = price_fraction(&terms, "AAA", 100, PricingMode::PvForward);
//! assert_eq!(quote.rating_class, RatingClass::High);
//!
//! let risk = score_portfolio(&demo_portfolio());
//! assert_eq!(risk.total_value, 120000.0);
//! ```

#![warn(missing_docs)]

pub use fracbond_math as math;
pub use fracbond_portfolio as portfolio;
pub use fracbond_pricing as pricing;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use fracbond_portfolio::prelude::*;
    pub use fracbond_pricing::prelude::*;
}
