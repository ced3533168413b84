//! Error types for portfolio operations.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur while scoring or rebalancing a portfolio.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortfolioError {
    /// The bond universe offered to the selector was empty.
    #[error("Bond universe is empty")]
    EmptyUniverse,

    /// A bond the recommendation rules rely on is missing from the universe.
    #[error("Bond '{id}' not found in universe")]
    BondNotFound {
        /// The bond ID.
        id: String,
    },
}

impl PortfolioError {
    /// Creates a bond-not-found error.
    #[must_use]
    pub fn bond_not_found(id: impl Into<String>) -> Self {
        Self::BondNotFound { id: id.into() }
    }
}
