//! Rebalance simulation.

use std::collections::HashSet;

use serde::Serialize;

use super::{build_recommendations, Recommendation, RecommendationRules};
use crate::error::PortfolioResult;
use crate::risk::{score_portfolio, PortfolioRisk};
use crate::types::{AssetType, BondCandidate, PortfolioAsset};

/// Headline figures of a portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskSummary {
    /// Total market value.
    pub total_value: f64,
    /// Weighted risk on a 0-100 scale.
    pub overall_risk_score: f64,
}

impl From<&PortfolioRisk> for RiskSummary {
    fn from(risk: &PortfolioRisk) -> Self {
        Self {
            total_value: risk.total_value,
            overall_risk_score: risk.overall_risk_score,
        }
    }
}

/// Risk before and after applying every recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RebalanceReport {
    /// The portfolio as given.
    pub pre_rebalance: RiskSummary,
    /// Proposed replacements.
    pub recommendations: Vec<Recommendation>,
    /// The portfolio with replacements applied.
    pub post_rebalance: PortfolioRisk,
}

/// Applies recommendations to a portfolio.
///
/// Replaced holdings are dropped and each recommendation adds a bond holding
/// named after its allocation, carrying the replaced value. Kept holdings
/// stay in their original order, ahead of the new bonds.
#[must_use]
pub fn rebalanced_portfolio(
    assets: &[PortfolioAsset],
    recommendations: &[Recommendation],
) -> Vec<PortfolioAsset> {
    let replaced: HashSet<&str> = recommendations.iter().map(|r| r.asset_id.as_str()).collect();

    assets
        .iter()
        .filter(|a| !replaced.contains(a.asset_id.as_str()))
        .cloned()
        .chain(recommendations.iter().map(|r| {
            PortfolioAsset::new(r.bond.label(), AssetType::Bond, r.replace_value).with_name(r.bond.name())
        }))
        .collect()
}

/// Scores a portfolio, recommends replacements and scores the result.
///
/// # Errors
///
/// Propagates recommendation failures.
pub fn recommend_rebalance(
    assets: &[PortfolioAsset],
    universe: &[BondCandidate],
    rules: &RecommendationRules,
) -> PortfolioResult<RebalanceReport> {
    let pre = score_portfolio(assets);
    let recommendations = build_recommendations(assets, universe, rules)?;
    let post = score_portfolio(&rebalanced_portfolio(assets, &recommendations));

    log::info!(
        "rebalance: {} replacements, risk {:.4} -> {:.4}",
        recommendations.len(),
        pre.overall_risk_score,
        post.overall_risk_score
    );

    Ok(RebalanceReport {
        pre_rebalance: RiskSummary::from(&pre),
        recommendations,
        post_rebalance: post,
    })
}
