//! Bond replacement recommendations.
//!
//! Holdings are matched against fixed trigger rules:
//!
//! | Holding                                | Reason              | Selection              |
//! |----------------------------------------|---------------------|------------------------|
//! | stock labelled high or medium-high     | `stock_high`        | no filter, yield first |
//! | mutual fund with CAGR below threshold  | `mf_lowcagr`        | medium, balanced       |
//! | fixed deposit beaten by an AAA/AA bond | `fd_replace`        | safe, yield first      |
//! | any other fixed deposit                | `fd_suggest_ladder` | 50/50 ladder           |
//!
//! A ladder splits the holding between the one-year bill and the balanced
//! safe pick.

mod rebalance;

pub use rebalance::{rebalanced_portfolio, recommend_rebalance, RebalanceReport, RiskSummary};

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use fracbond_pricing::types::CreditRating;

use crate::error::{PortfolioError, PortfolioResult};
use crate::selection::{select_bond, SafetyProfile};
use crate::types::{find_bond, AssetType, BondCandidate, PortfolioAsset, RiskLabel, SHORT_SAFE_BOND_ID};

/// Why a holding should be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementReason {
    /// High-risk stock.
    StockHigh,
    /// Mutual fund growing too slowly.
    MfLowcagr,
    /// Fixed deposit that a safe bond out-yields.
    FdReplace,
    /// Fixed deposit no safe bond beats; ladder instead.
    FdSuggestLadder,
}

/// Thresholds applied by the trigger rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommendationRules {
    /// Mutual funds below this CAGR are replaced.
    pub min_fund_cagr: f64,
    /// Target duration handed to the selector.
    pub target_duration: f64,
}

impl Default for RecommendationRules {
    fn default() -> Self {
        Self {
            min_fund_cagr: 0.06,
            target_duration: crate::selection::DEFAULT_TARGET_DURATION,
        }
    }
}

/// The bond or bonds proposed for a holding.
///
/// Serializes to the flat fields `recommended_bond`, `bond_name`,
/// `bond_yield` and `bond_credit`. A ladder reports each field as a
/// combined string, with yields at three decimals.
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendedBond {
    /// One bond takes the whole value.
    Single(BondCandidate),
    /// Half to the short bill, half to the safe bond.
    Ladder {
        /// Short leg.
        short: BondCandidate,
        /// Long leg.
        safe: BondCandidate,
    },
}

impl RecommendedBond {
    /// Identifier of the allocation; used as the synthetic holding's ID.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Single(bond) => bond.bond_id.clone(),
            Self::Ladder { short, safe } => {
                format!("{} (50%) + {} (50%)", short.bond_id, safe.bond_id)
            }
        }
    }

    /// Display name of the allocation.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Single(bond) => bond.name.clone(),
            Self::Ladder { short, safe } => format!("{} + {}", short.name, safe.name),
        }
    }

    fn credit_label(&self) -> String {
        match self {
            Self::Single(bond) => bond.credit.to_string(),
            Self::Ladder { short, safe } => format!("{} & {}", short.credit, safe.credit),
        }
    }
}

impl Serialize for RecommendedBond {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("RecommendedBond", 4)?;
        state.serialize_field("recommended_bond", &self.label())?;
        state.serialize_field("bond_name", &self.name())?;
        match self {
            Self::Single(bond) => state.serialize_field("bond_yield", &bond.yield_rate)?,
            Self::Ladder { short, safe } => state.serialize_field(
                "bond_yield",
                &format!("{:.3} & {:.3}", short.yield_rate, safe.yield_rate),
            )?,
        }
        state.serialize_field("bond_credit", &self.credit_label())?;
        state.end()
    }
}

/// A proposal to swap one holding into bonds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// Holding to replace.
    pub asset_id: String,
    /// Its display name, if any.
    pub asset_name: Option<String>,
    /// Market value moved into the bond allocation.
    pub replace_value: f64,
    /// Trigger that fired.
    pub reason: ReplacementReason,
    /// Proposed allocation.
    #[serde(flatten)]
    pub bond: RecommendedBond,
}

/// Reasons a holding triggers, in rule order.
#[must_use]
pub fn replacement_reasons(
    asset: &PortfolioAsset,
    universe: &[BondCandidate],
    rules: &RecommendationRules,
) -> Vec<ReplacementReason> {
    let mut reasons = Vec::new();

    if asset.asset_type == AssetType::Stock
        && matches!(asset.risk_label, Some(RiskLabel::High | RiskLabel::MediumHigh))
    {
        reasons.push(ReplacementReason::StockHigh);
    }

    if asset.asset_type == AssetType::MutualFund && asset.cagr_or_zero() < rules.min_fund_cagr {
        reasons.push(ReplacementReason::MfLowcagr);
    }

    if asset.asset_type == AssetType::BankFd {
        let fd_rate = asset.fd_rate_or_zero();
        let beaten = universe
            .iter()
            .filter(|b| matches!(b.credit, CreditRating::AAA | CreditRating::AA))
            .any(|b| b.yield_rate >= fd_rate);

        reasons.push(if beaten {
            ReplacementReason::FdReplace
        } else {
            ReplacementReason::FdSuggestLadder
        });
    }

    reasons
}

/// Picks the allocation for a trigger.
///
/// # Errors
///
/// Fails if the universe is empty, or if a ladder is needed and the
/// one-year bill is not in the universe.
pub fn allocate(
    reason: ReplacementReason,
    universe: &[BondCandidate],
    rules: &RecommendationRules,
) -> PortfolioResult<RecommendedBond> {
    let pick = |profile, prefer_yield| {
        select_bond(universe, profile, prefer_yield, rules.target_duration).cloned()
    };

    let bond = match reason {
        ReplacementReason::StockHigh => RecommendedBond::Single(pick(SafetyProfile::HighYield, true)?),
        ReplacementReason::MfLowcagr => RecommendedBond::Single(pick(SafetyProfile::Medium, false)?),
        ReplacementReason::FdReplace => RecommendedBond::Single(pick(SafetyProfile::Safe, true)?),
        ReplacementReason::FdSuggestLadder => {
            let short = find_bond(universe, SHORT_SAFE_BOND_ID)
                .cloned()
                .ok_or_else(|| PortfolioError::bond_not_found(SHORT_SAFE_BOND_ID))?;
            let safe = pick(SafetyProfile::Safe, false)?;
            RecommendedBond::Ladder { short, safe }
        }
    };

    Ok(bond)
}

/// Builds recommendations for every triggering holding, in portfolio order.
///
/// # Errors
///
/// Propagates [`allocate`] failures.
///
/// # Example
///
/// ```rust
/// use fracbond_portfolio::prelude::*;
///
/// let fd = PortfolioAsset::new("FD_1", AssetType::BankFd, 20000.0).with_fd_rate(0.07);
/// let recs = build_recommendations(&[fd], bond_universe(), &RecommendationRules::default())?;
///
/// assert_eq!(recs[0].reason, ReplacementReason::FdSuggestLadder);
/// assert_eq!(recs[0].bond.label(), "B_SHORT_SAFE (50%) + B_SAFE_2 (50%)");
/// # Ok::<(), PortfolioError>(())
/// ```
pub fn build_recommendations(
    assets: &[PortfolioAsset],
    universe: &[BondCandidate],
    rules: &RecommendationRules,
) -> PortfolioResult<Vec<Recommendation>> {
    let mut recommendations = Vec::new();

    for asset in assets {
        for reason in replacement_reasons(asset, universe, rules) {
            let bond = allocate(reason, universe, rules)?;
            log::debug!("{}: {reason:?} -> {}", asset.asset_id, bond.label());

            recommendations.push(Recommendation {
                asset_id: asset.asset_id.clone(),
                asset_name: asset.name.clone(),
                replace_value: asset.market_value,
                reason,
                bond,
            });
        }
    }

    Ok(recommendations)
}
