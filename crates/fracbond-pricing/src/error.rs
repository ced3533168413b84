//! Error types for bond pricing.

use thiserror::Error;

/// A specialized Result type for bond pricing operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond pricing.
///
/// An unknown rating is not an error: it prices through the neutral branch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Input outside the domain of the pricing formulas.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },

    /// No yield in the search interval reproduces the target price.
    #[error("No implied yield for price {target_price} in [{lower}, {upper}]")]
    UnbracketedYield {
        /// Price the solver tried to match.
        target_price: f64,
        /// Lower end of the final search interval.
        lower: f64,
        /// Upper end of the final search interval.
        upper: f64,
    },

    /// Numerical library error.
    #[error("Math error: {0}")]
    Math(#[from] fracbond_math::MathError),
}

impl BondError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
