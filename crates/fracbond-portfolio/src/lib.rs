//! # Fracbond Portfolio
//!
//! Portfolio risk scoring and bond replacement recommendations.
//!
//! ## Features
//!
//! - **Risk Scorer**: value-weighted risk on a 0-100 scale with a
//!   per-holding breakdown
//! - **Bond Selector**: credit-filtered, utility-ranked pick from a bond
//!   universe
//! - **Recommendations**: rule-based replacement of risky or
//!   under-performing holdings, including fixed-deposit ladders
//! - **Rebalance Simulation**: the portfolio re-scored with every
//!   replacement applied
//!
//! All functions are pure. The bond universe is a process-wide constant.
//!
//! ## Quick Start
//!
//! ```rust
//! use fracbond_portfolio::prelude::*;
//!
//! let report = recommend_rebalance(&demo_portfolio(), bond_universe(), &RecommendationRules::default())?;
//!
//! assert_eq!(report.recommendations.len(), 3);
//! assert!(report.post_rebalance.overall_risk_score < report.pre_rebalance.overall_risk_score);
//! # Ok::<(), PortfolioError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod demo;
pub mod error;
pub mod recommend;
pub mod risk;
pub mod selection;
pub mod types;

pub use error::{PortfolioError, PortfolioResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::demo::{assets_or_demo, demo_portfolio};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::recommend::{
        build_recommendations, recommend_rebalance, RebalanceReport, Recommendation,
        RecommendationRules, RecommendedBond, ReplacementReason, RiskSummary,
    };
    pub use crate::risk::{score_portfolio, PortfolioRisk, RiskBreakdownEntry};
    pub use crate::selection::{select_bond, SafetyProfile, DEFAULT_TARGET_DURATION};
    pub use crate::types::{
        bond_universe, AssetType, BondCandidate, PortfolioAsset, RiskLabel,
    };
}
