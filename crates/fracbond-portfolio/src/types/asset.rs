//! Portfolio holdings as supplied by clients.

use serde::{Deserialize, Serialize};

/// Kind of holding.
///
/// Unknown or missing type strings deserialize to [`AssetType::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    /// Listed equity.
    Stock,
    /// Mutual fund.
    MutualFund,
    /// Bank fixed deposit.
    BankFd,
    /// Bond, including synthetic holdings created by a rebalance.
    Bond,
    /// Anything else.
    #[default]
    #[serde(other)]
    Other,
}

impl AssetType {
    /// Wire name of this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::MutualFund => "mutual_fund",
            Self::BankFd => "bank_fd",
            Self::Bond => "bond",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative risk label attached to a holding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskLabel {
    /// "high"
    High,
    /// "medium-high"
    MediumHigh,
    /// "medium"
    Medium,
    /// "low"
    Low,
    /// Any other label; scored as medium.
    #[serde(other)]
    Unrecognized,
}

impl RiskLabel {
    /// Base risk in `[0, 1]` for this label.
    #[must_use]
    pub fn base_score(&self) -> f64 {
        match self {
            Self::High => 1.0,
            Self::MediumHigh => 0.75,
            Self::Medium | Self::Unrecognized => 0.5,
            Self::Low => 0.2,
        }
    }
}

/// A single holding.
///
/// Only `asset_id` is mandatory on the wire. Numeric fields a client omits
/// read as zero through the accessor methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAsset {
    /// Holding identifier.
    pub asset_id: String,

    /// Holding type.
    #[serde(rename = "type", default)]
    pub asset_type: AssetType,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Risk label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_label: Option<RiskLabel>,

    /// Market value in currency units.
    #[serde(default)]
    pub market_value: f64,

    /// Expected annual return of a stock.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<f64>,

    /// Compound annual growth rate of a mutual fund.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cagr: Option<f64>,

    /// Annual rate of a fixed deposit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fd_rate: Option<f64>,
}

impl PortfolioAsset {
    /// Creates a holding with no label, name or type-specific figures.
    pub fn new(asset_id: impl Into<String>, asset_type: AssetType, market_value: f64) -> Self {
        Self {
            asset_id: asset_id.into(),
            asset_type,
            name: None,
            risk_label: None,
            market_value,
            expected_return: None,
            cagr: None,
            fd_rate: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the risk label.
    #[must_use]
    pub fn with_risk_label(mut self, label: RiskLabel) -> Self {
        self.risk_label = Some(label);
        self
    }

    /// Sets the expected return.
    #[must_use]
    pub fn with_expected_return(mut self, rate: f64) -> Self {
        self.expected_return = Some(rate);
        self
    }

    /// Sets the CAGR.
    #[must_use]
    pub fn with_cagr(mut self, rate: f64) -> Self {
        self.cagr = Some(rate);
        self
    }

    /// Sets the fixed-deposit rate.
    #[must_use]
    pub fn with_fd_rate(mut self, rate: f64) -> Self {
        self.fd_rate = Some(rate);
        self
    }

    /// CAGR, zero when absent.
    #[must_use]
    pub fn cagr_or_zero(&self) -> f64 {
        self.cagr.unwrap_or(0.0)
    }

    /// Fixed-deposit rate, zero when absent.
    #[must_use]
    pub fn fd_rate_or_zero(&self) -> f64 {
        self.fd_rate.unwrap_or(0.0)
    }
}
