//! Bonds available as replacements.

use fracbond_pricing::types::CreditRating;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Identifier of the one-year bill used as the short leg of a ladder.
pub const SHORT_SAFE_BOND_ID: &str = "B_SHORT_SAFE";

/// A bond the recommender may propose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondCandidate {
    /// Bond identifier.
    pub bond_id: String,
    /// Display name.
    pub name: String,
    /// Issuer credit rating.
    pub credit: CreditRating,
    /// Annual yield as a fraction.
    #[serde(rename = "yield")]
    pub yield_rate: f64,
    /// Duration in years.
    pub duration: f64,
    /// Liquidity score in `[0, 1]`.
    pub liquidity: f64,
}

impl BondCandidate {
    /// Creates a candidate.
    pub fn new(
        bond_id: impl Into<String>,
        name: impl Into<String>,
        credit: CreditRating,
        yield_rate: f64,
        duration: f64,
        liquidity: f64,
    ) -> Self {
        Self {
            bond_id: bond_id.into(),
            name: name.into(),
            credit,
            yield_rate,
            duration,
            liquidity,
        }
    }

    /// Credit risk in `[0, 1]` of this bond's rating.
    #[must_use]
    pub fn credit_risk(&self) -> f64 {
        credit_risk(self.credit)
    }
}

/// Credit risk in `[0, 1]` by rating. Ratings without an entry score 0.6.
#[must_use]
pub fn credit_risk(rating: CreditRating) -> f64 {
    match rating {
        CreditRating::AAA => 0.0,
        CreditRating::AA => 0.1,
        CreditRating::A => 0.25,
        CreditRating::BBB => 0.5,
        CreditRating::BB => 0.8,
        CreditRating::B => 0.95,
        _ => 0.6,
    }
}

static BOND_UNIVERSE: Lazy<Vec<BondCandidate>> = Lazy::new(|| {
    vec![
        BondCandidate::new("B_SAFE_1", "Gilt 3Y", CreditRating::AAA, 0.055, 3.0, 0.95),
        BondCandidate::new("B_SAFE_2", "InvGrade Corp 3Y", CreditRating::AA, 0.06, 3.0, 0.9),
        BondCandidate::new("B_MED_1", "Corp BBB 5Y", CreditRating::BBB, 0.075, 5.0, 0.7),
        BondCandidate::new("B_HY_1", "HighYield 4Y", CreditRating::BB, 0.10, 4.0, 0.5),
        BondCandidate::new(SHORT_SAFE_BOND_ID, "T-Bill 1Y", CreditRating::AAA, 0.045, 1.0, 0.98),
    ]
});

/// The built-in bond universe.
#[must_use]
pub fn bond_universe() -> &'static [BondCandidate] {
    &BOND_UNIVERSE
}

/// Finds a bond by identifier.
#[must_use]
pub fn find_bond<'a>(universe: &'a [BondCandidate], bond_id: &str) -> Option<&'a BondCandidate> {
    universe.iter().find(|b| b.bond_id == bond_id)
}
