//! Domain types for bond pricing.

mod rating;
mod terms;

pub use rating::{CreditRating, RatingClass};
pub use terms::BondTerms;
