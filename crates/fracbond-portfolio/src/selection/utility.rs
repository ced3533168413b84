//! Candidate utility scoring.

use std::cmp::Ordering;

use crate::types::BondCandidate;

/// Keeps the yield normalization finite when all yields are equal.
const YIELD_RANGE_EPSILON: f64 = 1e-9;

/// Years of duration mismatch per unit of penalty.
const DURATION_PENALTY_SCALE: f64 = 10.0;

/// Weights of the four utility factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtilityWeights {
    /// Weight on normalized yield.
    pub yield_weight: f64,
    /// Weight on credit risk.
    pub credit_weight: f64,
    /// Weight on the duration penalty.
    pub duration_weight: f64,
    /// Weight on liquidity.
    pub liquidity_weight: f64,
}

impl UtilityWeights {
    /// Weights that favour yield.
    pub const YIELD_SEEKING: Self = Self {
        yield_weight: 0.5,
        credit_weight: 0.4,
        duration_weight: 0.05,
        liquidity_weight: 0.05,
    };

    /// Weights that favour credit quality and fit.
    pub const BALANCED: Self = Self {
        yield_weight: 0.35,
        credit_weight: 0.45,
        duration_weight: 0.1,
        liquidity_weight: 0.1,
    };

    /// Weights for the given yield preference.
    #[must_use]
    pub fn for_preference(prefer_yield: bool) -> Self {
        if prefer_yield {
            Self::YIELD_SEEKING
        } else {
            Self::BALANCED
        }
    }
}

impl Default for UtilityWeights {
    fn default() -> Self {
        Self::BALANCED
    }
}

/// A bond with its utility.
#[derive(Debug, Clone, Copy)]
pub struct CandidateScore<'a> {
    /// The bond.
    pub bond: &'a BondCandidate,
    /// Its utility; higher is better.
    pub utility: f64,
}

/// Scores `candidates` and returns them best first.
///
/// The sort is stable, so equal utilities keep their input order.
#[must_use]
pub fn score_candidates<'a>(
    candidates: &[&'a BondCandidate],
    weights: &UtilityWeights,
    target_duration: f64,
) -> Vec<CandidateScore<'a>> {
    let (y_min, y_max) = candidates
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), b| {
            (lo.min(b.yield_rate), hi.max(b.yield_rate))
        });
    let range = (y_max - y_min) + YIELD_RANGE_EPSILON;

    let mut scored: Vec<CandidateScore<'a>> = candidates
        .iter()
        .map(|&bond| {
            let norm_yield = (bond.yield_rate - y_min) / range;
            let duration_penalty = (bond.duration - target_duration).abs() / DURATION_PENALTY_SCALE;

            let utility = weights.yield_weight * norm_yield
                - weights.credit_weight * bond.credit_risk()
                - weights.duration_weight * duration_penalty
                + weights.liquidity_weight * bond.liquidity;

            CandidateScore { bond, utility }
        })
        .collect();

    scored.sort_by(|a, b| b.utility.partial_cmp(&a.utility).unwrap_or(Ordering::Equal));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::bond_universe;
    use approx::assert_relative_eq;

    #[test]
    fn test_weights_for_preference() {
        assert_eq!(UtilityWeights::for_preference(true), UtilityWeights::YIELD_SEEKING);
        assert_eq!(UtilityWeights::for_preference(false), UtilityWeights::BALANCED);
        assert_eq!(UtilityWeights::default(), UtilityWeights::BALANCED);
    }

    #[test]
    fn test_full_universe_utilities() {
        let candidates: Vec<&BondCandidate> = bond_universe().iter().collect();
        let ranked = score_candidates(&candidates, &UtilityWeights::YIELD_SEEKING, 3.0);

        let ids: Vec<&str> = ranked.iter().map(|s| s.bond.bond_id.as_str()).collect();
        assert_eq!(ids, ["B_HY_1", "B_SAFE_2", "B_SAFE_1", "B_MED_1", "B_SHORT_SAFE"]);

        // 0.5 * 1 - 0.4 * 0.8 - 0.05 * 0.1 + 0.05 * 0.5
        assert_relative_eq!(ranked[0].utility, 0.2, epsilon = 1e-8);
    }

    #[test]
    fn test_equal_yields_do_not_divide_by_zero() {
        let universe = bond_universe();
        let candidates = vec![&universe[0], &universe[0]];
        let ranked = score_candidates(&candidates, &UtilityWeights::BALANCED, 3.0);

        assert!(ranked.iter().all(|s| s.utility.is_finite()));
        // 0.1 * 0.95
        assert_relative_eq!(ranked[0].utility, 0.095, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(score_candidates(&[], &UtilityWeights::BALANCED, 3.0).is_empty());
    }
}
