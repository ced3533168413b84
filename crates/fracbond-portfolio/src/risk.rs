//! Allocation-weighted portfolio risk.
//!
//! Each holding gets a raw risk in `[0, 1]` from its label and type. The
//! portfolio score is the value-weighted sum of raw risks, scaled to
//! `[0, 100]`.

use serde::{Deserialize, Serialize};

use crate::types::{AssetType, PortfolioAsset};

/// Raw risk used when a holding has no recognized label.
pub const DEFAULT_RISK: f64 = 0.5;

/// Surcharge added to every stock's label risk.
pub const STOCK_SURCHARGE: f64 = 0.1;

/// Raw risk of a fixed deposit, whatever its label.
pub const BANK_FD_RISK: f64 = 0.05;

/// Contribution of one holding to portfolio risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskBreakdownEntry {
    /// Holding identifier.
    pub asset_id: String,

    /// Holding type.
    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// Market value.
    pub market_value: f64,

    /// Share of portfolio value (0-1).
    pub alloc_pct: f64,

    /// Raw risk of the holding (0-1).
    pub risk_score_raw: f64,

    /// `alloc_pct * risk_score_raw`.
    pub risk_contribution: f64,
}

/// Portfolio-level risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRisk {
    /// Total market value, 1.0 when the holdings sum to zero.
    pub total_value: f64,

    /// Weighted risk on a 0-100 scale.
    pub overall_risk_score: f64,

    /// Per-holding contributions, in input order.
    pub breakdown: Vec<RiskBreakdownEntry>,
}

/// Raw risk in `[0, 1]` of a single holding.
///
/// # Example
///
/// ```rust
/// use fracbond_portfolio::risk::asset_risk_score;
/// use fracbond_portfolio::types::{AssetType, PortfolioAsset, RiskLabel};
///
/// let stock = PortfolioAsset::new("S", AssetType::Stock, 100.0).with_risk_label(RiskLabel::High);
/// assert_eq!(asset_risk_score(&stock), 1.0);
///
/// let fd = PortfolioAsset::new("F", AssetType::BankFd, 100.0).with_risk_label(RiskLabel::High);
/// assert_eq!(asset_risk_score(&fd), 0.05);
/// ```
#[must_use]
pub fn asset_risk_score(asset: &PortfolioAsset) -> f64 {
    let base = asset.risk_label.map_or(DEFAULT_RISK, |label| label.base_score());

    match asset.asset_type {
        AssetType::Stock => (base + STOCK_SURCHARGE).min(1.0),
        AssetType::BankFd => BANK_FD_RISK,
        _ => base,
    }
}

/// Total market value used as the allocation denominator.
#[must_use]
pub fn total_value(assets: &[PortfolioAsset]) -> f64 {
    let sum: f64 = assets.iter().map(|a| a.market_value).sum();
    if sum == 0.0 {
        1.0
    } else {
        sum
    }
}

/// Scores a portfolio.
///
/// An empty portfolio, or one whose values sum to zero, scores 0 with a
/// total value of 1.0.
#[must_use]
pub fn score_portfolio(assets: &[PortfolioAsset]) -> PortfolioRisk {
    let total = total_value(assets);

    let breakdown: Vec<RiskBreakdownEntry> = assets
        .iter()
        .map(|asset| {
            let alloc_pct = asset.market_value / total;
            let risk_score_raw = asset_risk_score(asset);
            RiskBreakdownEntry {
                asset_id: asset.asset_id.clone(),
                asset_type: asset.asset_type,
                market_value: asset.market_value,
                alloc_pct,
                risk_score_raw,
                risk_contribution: alloc_pct * risk_score_raw,
            }
        })
        .collect();

    let weighted: f64 = breakdown.iter().map(|e| e.risk_contribution).sum();

    log::debug!(
        "scored {} holdings: total value {total}, risk {:.4}",
        breakdown.len(),
        weighted * 100.0
    );

    PortfolioRisk {
        total_value: total,
        overall_risk_score: weighted * 100.0,
        breakdown,
    }
}
