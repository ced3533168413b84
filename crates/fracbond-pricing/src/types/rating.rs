//! Credit rating types.
//!
//! - [`CreditRating`]: S&P-style rating scale (AAA to D)
//! - [`RatingClass`]: the high/low split that selects a pricing branch

use serde::{Deserialize, Serialize};

/// Credit rating on the S&P-style scale.
///
/// The ordering is from highest quality (AAA) to lowest (D).
///
/// # Examples
///
/// ```
/// use fracbond_pricing::types::{CreditRating, RatingClass};
///
/// let rating = CreditRating::parse("BBB-").unwrap();
/// assert_eq!(rating, CreditRating::BBBMinus);
/// assert_eq!(rating.class(), RatingClass::Low);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CreditRating {
    /// Highest quality
    #[serde(rename = "AAA")]
    AAA = 1,
    /// AA+
    #[serde(rename = "AA+")]
    AAPlus = 2,
    /// AA
    #[serde(rename = "AA")]
    AA = 3,
    /// AA-
    #[serde(rename = "AA-")]
    AAMinus = 4,
    /// A+
    #[serde(rename = "A+")]
    APlus = 5,
    /// A
    #[serde(rename = "A")]
    A = 6,
    /// A-
    #[serde(rename = "A-")]
    AMinus = 7,
    /// BBB+
    #[serde(rename = "BBB+")]
    BBBPlus = 8,
    /// BBB
    #[serde(rename = "BBB")]
    BBB = 9,
    /// BBB- (lowest investment grade)
    #[serde(rename = "BBB-")]
    BBBMinus = 10,
    /// BB+
    #[serde(rename = "BB+")]
    BBPlus = 11,
    /// BB
    #[serde(rename = "BB")]
    BB = 12,
    /// BB-
    #[serde(rename = "BB-")]
    BBMinus = 13,
    /// B+
    #[serde(rename = "B+")]
    BPlus = 14,
    /// B
    #[serde(rename = "B")]
    B = 15,
    /// B-
    #[serde(rename = "B-")]
    BMinus = 16,
    /// CCC+
    #[serde(rename = "CCC+")]
    CCCPlus = 17,
    /// CCC
    #[serde(rename = "CCC")]
    CCC = 18,
    /// CCC-
    #[serde(rename = "CCC-")]
    CCCMinus = 19,
    /// CC
    #[serde(rename = "CC")]
    CC = 20,
    /// C
    #[serde(rename = "C")]
    C = 21,
    /// Default
    #[serde(rename = "D")]
    D = 22,
}

impl CreditRating {
    /// Every rating, best first.
    pub const ALL: [CreditRating; 22] = [
        Self::AAA,
        Self::AAPlus,
        Self::AA,
        Self::AAMinus,
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BBBPlus,
        Self::BBB,
        Self::BBBMinus,
        Self::BBPlus,
        Self::BB,
        Self::BBMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CCCPlus,
        Self::CCC,
        Self::CCCMinus,
        Self::CC,
        Self::C,
        Self::D,
    ];

    /// Returns the S&P-style notation.
    #[must_use]
    pub fn sp_notation(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AAPlus => "AA+",
            Self::AA => "AA",
            Self::AAMinus => "AA-",
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BBBPlus => "BBB+",
            Self::BBB => "BBB",
            Self::BBBMinus => "BBB-",
            Self::BBPlus => "BB+",
            Self::BB => "BB",
            Self::BBMinus => "BB-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CCCPlus => "CCC+",
            Self::CCC => "CCC",
            Self::CCCMinus => "CCC-",
            Self::CC => "CC",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parses an exact S&P-style notation. Matching is case-sensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.sp_notation() == s)
    }

    /// Pricing class of this rating.
    ///
    /// CCC+ and CCC- sit on neither list and price as unclassified.
    #[must_use]
    pub fn class(&self) -> RatingClass {
        match self {
            Self::AAA
            | Self::AAPlus
            | Self::AA
            | Self::AAMinus
            | Self::APlus
            | Self::A
            | Self::AMinus
            | Self::BBBPlus
            | Self::BBB => RatingClass::High,
            Self::BBBMinus
            | Self::BBPlus
            | Self::BB
            | Self::BBMinus
            | Self::BPlus
            | Self::B
            | Self::BMinus
            | Self::CCC
            | Self::CC
            | Self::C
            | Self::D => RatingClass::Low,
            Self::CCCPlus | Self::CCCMinus => RatingClass::Unclassified,
        }
    }
}

impl std::fmt::Display for CreditRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sp_notation())
    }
}

impl std::str::FromStr for CreditRating {
    type Err = crate::BondError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::BondError::invalid_input(format!("unknown rating '{s}'")))
    }
}

/// Which pricing branch a rating string falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingClass {
    /// AAA through BBB.
    High,
    /// BBB- through D (excluding CCC+ and CCC-).
    Low,
    /// Anything else, including unrated and unrecognised strings.
    Unclassified,
}

impl RatingClass {
    /// Classifies a raw rating string.
    ///
    /// ```
    /// use fracbond_pricing::types::RatingClass;
    ///
    /// assert_eq!(RatingClass::of("AA-"), RatingClass::High);
    /// assert_eq!(RatingClass::of("CCC"), RatingClass::Low);
    /// assert_eq!(RatingClass::of("NR"), RatingClass::Unclassified);
    /// ```
    #[must_use]
    pub fn of(rating: &str) -> Self {
        CreditRating::parse(rating).map_or(Self::Unclassified, |r| r.class())
    }

    /// Returns the label for this class.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Unclassified => "unclassified",
        }
    }
}

impl std::fmt::Display for RatingClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HIGH_RATED: [&str; 9] = ["AAA", "AA+", "AA", "AA-", "A+", "A", "A-", "BBB+", "BBB"];
    const LOW_RATED: [&str; 11] = [
        "BBB-", "BB+", "BB", "BB-", "B+", "B", "B-", "CCC", "CC", "C", "D",
    ];

    #[test]
    fn test_classification_lists() {
        for r in HIGH_RATED {
            assert_eq!(RatingClass::of(r), RatingClass::High, "{r}");
        }
        for r in LOW_RATED {
            assert_eq!(RatingClass::of(r), RatingClass::Low, "{r}");
        }
    }

    #[test]
    fn test_classes_are_disjoint_and_cover_lists() {
        let high = CreditRating::ALL
            .iter()
            .filter(|r| r.class() == RatingClass::High)
            .count();
        let low = CreditRating::ALL
            .iter()
            .filter(|r| r.class() == RatingClass::Low)
            .count();
        assert_eq!(high, HIGH_RATED.len());
        assert_eq!(low, LOW_RATED.len());
    }

    #[test]
    fn test_unclassified() {
        assert_eq!(RatingClass::of("CCC+"), RatingClass::Unclassified);
        assert_eq!(RatingClass::of("NR"), RatingClass::Unclassified);
        assert_eq!(RatingClass::of("aaa"), RatingClass::Unclassified);
        assert_eq!(RatingClass::of(""), RatingClass::Unclassified);
    }

    #[test]
    fn test_ordering_and_notation() {
        assert!(CreditRating::AAA < CreditRating::BBB);
        for r in CreditRating::ALL {
            assert_eq!(CreditRating::parse(r.sp_notation()), Some(r));
        }
        assert_eq!("BB+".parse::<CreditRating>().unwrap(), CreditRating::BBPlus);
        assert!("Baa1".parse::<CreditRating>().is_err());
    }

    #[test]
    fn test_serde_uses_notation() {
        let json = serde_json::to_string(&CreditRating::AAMinus).unwrap();
        assert_eq!(json, "\"AA-\"");
        let back: CreditRating = serde_json::from_str("\"BBB+\"").unwrap();
        assert_eq!(back, CreditRating::BBBPlus);
        assert_eq!(serde_json::to_string(&RatingClass::Unclassified).unwrap(), "\"unclassified\"");
    }
}
