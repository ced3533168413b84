//! Demo portfolio and request payload handling.

use serde::Deserialize;
use serde_json::Value;

use crate::types::{AssetType, PortfolioAsset, RiskLabel};

/// A six-holding portfolio of stocks, funds and a fixed deposit.
#[must_use]
pub fn demo_portfolio() -> Vec<PortfolioAsset> {
    vec![
        PortfolioAsset::new("S_HIGH", AssetType::Stock, 40000.0)
            .with_name("AlphaTech")
            .with_risk_label(RiskLabel::High)
            .with_expected_return(0.20),
        PortfolioAsset::new("S_MED", AssetType::Stock, 30000.0)
            .with_name("BetaIndustries")
            .with_risk_label(RiskLabel::Medium)
            .with_expected_return(0.12),
        PortfolioAsset::new("S_LOW", AssetType::Stock, 15000.0)
            .with_name("GammaStable")
            .with_risk_label(RiskLabel::Low)
            .with_expected_return(0.06),
        PortfolioAsset::new("MF_GOOD", AssetType::MutualFund, 10000.0)
            .with_name("GrowthPlus MF")
            .with_risk_label(RiskLabel::Medium)
            .with_cagr(0.15),
        PortfolioAsset::new("MF_LOW", AssetType::MutualFund, 5000.0)
            .with_name("ValueCore MF")
            .with_risk_label(RiskLabel::MediumHigh)
            .with_cagr(0.03),
        PortfolioAsset::new("FD_1", AssetType::BankFd, 20000.0)
            .with_name("BankFD (7% p.a.)")
            .with_risk_label(RiskLabel::Low)
            .with_fd_rate(0.07),
    ]
}

/// Extracts `assets` from a request body.
///
/// Falls back to [`demo_portfolio`] when the body is absent, has no
/// `assets` key, holds an empty list, or cannot be read as holdings.
#[must_use]
pub fn assets_or_demo(payload: Option<&Value>) -> Vec<PortfolioAsset> {
    let Some(raw) = payload
        .and_then(|body| body.get("assets"))
        .filter(|raw| !raw.is_null())
    else {
        return demo_portfolio();
    };

    match Vec::<PortfolioAsset>::deserialize(raw) {
        Ok(assets) if !assets.is_empty() => assets,
        Ok(_) => demo_portfolio(),
        Err(e) => {
            log::warn!("unreadable assets, using demo portfolio: {e}");
            demo_portfolio()
        }
    }
}
