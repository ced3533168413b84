//! Bond selection by multi-factor utility.
//!
//! Candidates are first filtered by a credit whitelist, then ranked by
//!
//! ```text
//! utility = w_yield * norm_yield
//!         - w_credit * credit_risk
//!         - w_dur * |duration - target| / 10
//!         + w_liq * liquidity
//! ```
//!
//! where `norm_yield` rescales yields within the filtered set to `[0, 1)`.

mod utility;

pub use utility::{score_candidates, CandidateScore, UtilityWeights};

use serde::{Deserialize, Serialize};

use fracbond_pricing::types::CreditRating;

use crate::error::{PortfolioError, PortfolioResult};
use crate::types::BondCandidate;

/// Target duration in years when the caller has no preference.
pub const DEFAULT_TARGET_DURATION: f64 = 3.0;

/// How much credit risk the selector may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SafetyProfile {
    /// AAA, AA and A only.
    Safe,
    /// Investment grade down to BBB.
    Medium,
    /// No credit filter.
    HighYield,
}

impl SafetyProfile {
    /// Ratings this profile admits, or `None` for no restriction.
    #[must_use]
    pub fn allowed_ratings(&self) -> Option<&'static [CreditRating]> {
        const SAFE: &[CreditRating] = &[CreditRating::AAA, CreditRating::AA, CreditRating::A];
        const MEDIUM: &[CreditRating] = &[
            CreditRating::AAA,
            CreditRating::AA,
            CreditRating::A,
            CreditRating::BBB,
        ];

        match self {
            Self::Safe => Some(SAFE),
            Self::Medium => Some(MEDIUM),
            Self::HighYield => None,
        }
    }

    /// Whether a bond passes this profile's credit filter.
    #[must_use]
    pub fn admits(&self, bond: &BondCandidate) -> bool {
        self.allowed_ratings()
            .map_or(true, |allowed| allowed.contains(&bond.credit))
    }
}

/// Selects the highest-utility bond.
///
/// When the credit filter rejects every bond, the whole universe is ranked
/// instead. Equal utilities resolve to the earlier bond in `universe`.
///
/// # Errors
///
/// Returns [`PortfolioError::EmptyUniverse`] if `universe` is empty.
///
/// # Example
///
/// ```rust
/// use fracbond_portfolio::selection::{select_bond, SafetyProfile, DEFAULT_TARGET_DURATION};
/// use fracbond_portfolio::types::bond_universe;
///
/// let bond = select_bond(bond_universe(), SafetyProfile::HighYield, true, DEFAULT_TARGET_DURATION)?;
/// assert_eq!(bond.bond_id, "B_HY_1");
/// # Ok::<(), fracbond_portfolio::PortfolioError>(())
/// ```
pub fn select_bond(
    universe: &[BondCandidate],
    profile: SafetyProfile,
    prefer_yield: bool,
    target_duration: f64,
) -> PortfolioResult<&BondCandidate> {
    let mut filtered: Vec<&BondCandidate> = universe.iter().filter(|b| profile.admits(b)).collect();

    if filtered.is_empty() {
        log::warn!("no bond matches {profile:?}, ranking the full universe");
        filtered = universe.iter().collect();
    }

    let weights = UtilityWeights::for_preference(prefer_yield);
    let ranked = score_candidates(&filtered, &weights, target_duration);

    ranked
        .into_iter()
        .next()
        .map(|scored| scored.bond)
        .ok_or(PortfolioError::EmptyUniverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::bond_universe;

    fn pick(profile: SafetyProfile, prefer_yield: bool) -> String {
        select_bond(bond_universe(), profile, prefer_yield, DEFAULT_TARGET_DURATION)
            .unwrap()
            .bond_id
            .clone()
    }

    #[test]
    fn test_profile_filters() {
        let universe = bond_universe();
        let safe: Vec<_> = universe.iter().filter(|b| SafetyProfile::Safe.admits(b)).collect();
        let medium: Vec<_> = universe.iter().filter(|b| SafetyProfile::Medium.admits(b)).collect();

        assert_eq!(safe.len(), 3);
        assert_eq!(medium.len(), 4);
        assert!(universe.iter().all(|b| SafetyProfile::HighYield.admits(b)));
    }

    #[test]
    fn test_builtin_universe_choices() {
        assert_eq!(pick(SafetyProfile::HighYield, true), "B_HY_1");
        assert_eq!(pick(SafetyProfile::HighYield, false), "B_SAFE_1");
        assert_eq!(pick(SafetyProfile::Medium, true), "B_MED_1");
        assert_eq!(pick(SafetyProfile::Medium, false), "B_SAFE_2");
        assert_eq!(pick(SafetyProfile::Safe, true), "B_SAFE_2");
        assert_eq!(pick(SafetyProfile::Safe, false), "B_SAFE_2");
    }

    #[test]
    fn test_empty_filter_falls_back() {
        let universe = vec![
            BondCandidate::new("J1", "Junk 2Y", CreditRating::B, 0.12, 2.0, 0.3),
            BondCandidate::new("J2", "Junk 3Y", CreditRating::BB, 0.11, 3.0, 0.4),
        ];

        let bond = select_bond(&universe, SafetyProfile::Safe, true, 3.0).unwrap();
        assert_eq!(bond.bond_id, "J1");
    }

    #[test]
    fn test_empty_universe() {
        let err = select_bond(&[], SafetyProfile::Safe, true, 3.0).unwrap_err();
        assert_eq!(err, PortfolioError::EmptyUniverse);
    }

    #[test]
    fn test_tie_goes_to_first() {
        let universe = vec![
            BondCandidate::new("T1", "Twin A", CreditRating::AAA, 0.05, 3.0, 0.9),
            BondCandidate::new("T2", "Twin B", CreditRating::AAA, 0.05, 3.0, 0.9),
        ];

        for _ in 0..3 {
            let bond = select_bond(&universe, SafetyProfile::Safe, false, 3.0).unwrap();
            assert_eq!(bond.bond_id, "T1");
        }
    }

    #[test]
    fn test_dominant_bond_selected() {
        let universe = vec![
            BondCandidate::new("D1", "Plain", CreditRating::AAA, 0.03, 3.0, 0.9),
            BondCandidate::new("D2", "Dominant", CreditRating::AAA, 0.09, 3.0, 0.9),
        ];

        let bond = select_bond(&universe, SafetyProfile::Safe, false, 3.0).unwrap();
        assert_eq!(bond.bond_id, "D2");
    }
}
