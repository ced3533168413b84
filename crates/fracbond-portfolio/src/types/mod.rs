//! Core types: holdings and bond candidates.

mod asset;
mod bond;

pub use asset::{AssetType, PortfolioAsset, RiskLabel};
pub use bond::{bond_universe, credit_risk, find_bond, BondCandidate, SHORT_SAFE_BOND_ID};
