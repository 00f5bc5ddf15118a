//! # Rating Tiers — Single Source of Truth
//!
//! Defines the `Rating` enum with all five completeness tiers and the
//! `RatingThresholds` that map a completeness ratio onto them. Every `match`
//! on `Rating` is exhaustive, so adding a tier forces every consumer to
//! handle it at compile time.
//!
//! ## Tier mapping
//!
//! | Ratio `c`          | Tier        | Value |
//! |--------------------|-------------|-------|
//! | `c == 1`           | `EXCELLENT` | 5     |
//! | `c >= very_good`   | `VERY_GOOD` | 4     |
//! | `c >= good`        | `GOOD`      | 3     |
//! | `c >= fair`        | `FAIR`      | 2     |
//! | otherwise          | `POOR`      | 1     |
//!
//! Default cut-offs are 0.85, 0.6 and 0.3. Comparisons are inclusive, so a
//! ratio of exactly 0.85 is `VERY_GOOD`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ReqcheckError;

/// Discrete completeness rating.
///
/// Ordered worst to best, so `Rating::Poor < Rating::Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rating {
    /// Less than the `fair` cut-off.
    Poor,
    /// At least the `fair` cut-off.
    Fair,
    /// At least the `good` cut-off.
    Good,
    /// At least the `very_good` cut-off but not complete.
    VeryGood,
    /// Every requirement satisfied.
    Excellent,
}

/// Total number of rating tiers.
pub const RATING_COUNT: usize = 5;

impl Rating {
    /// Returns all tiers from best to worst.
    pub fn all() -> &'static [Rating] {
        &[
            Self::Excellent,
            Self::VeryGood,
            Self::Good,
            Self::Fair,
            Self::Poor,
        ]
    }

    /// Numeric tier value, 1 (poor) through 5 (excellent).
    pub fn value(self) -> u8 {
        match self {
            Self::Poor => 1,
            Self::Fair => 2,
            Self::Good => 3,
            Self::VeryGood => 4,
            Self::Excellent => 5,
        }
    }

    /// Tier name as shown in reports. Matches the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Poor => "POOR",
            Self::Fair => "FAIR",
            Self::Good => "GOOD",
            Self::VeryGood => "VERY_GOOD",
            Self::Excellent => "EXCELLENT",
        }
    }

    /// Map a completeness ratio in `[0, 1]` to a tier using the default
    /// thresholds.
    pub fn from_ratio(ratio: f64) -> Self {
        RatingThresholds::default().rate(ratio)
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Rating {
    type Err = ReqcheckError;

    /// Parse a tier from its report name (`"VERY_GOOD"` etc.). Case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|r| r.name() == s)
            .ok_or_else(|| ReqcheckError::UnknownRating(s.to_string()))
    }
}

impl TryFrom<u8> for Rating {
    type Error = ReqcheckError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Poor),
            2 => Ok(Self::Fair),
            3 => Ok(Self::Good),
            4 => Ok(Self::VeryGood),
            5 => Ok(Self::Excellent),
            other => Err(ReqcheckError::InvalidRatingValue(other)),
        }
    }
}

/// Lower bounds (inclusive) of the non-extreme tiers.
///
/// `EXCELLENT` always requires a ratio of exactly 1 and is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingThresholds {
    /// Minimum ratio for `VERY_GOOD`.
    pub very_good: f64,
    /// Minimum ratio for `GOOD`.
    pub good: f64,
    /// Minimum ratio for `FAIR`.
    pub fair: f64,
}

impl Default for RatingThresholds {
    fn default() -> Self {
        Self {
            very_good: 0.85,
            good: 0.6,
            fair: 0.3,
        }
    }
}

impl RatingThresholds {
    /// Check `0 < fair <= good <= very_good <= 1`.
    pub fn validate(&self) -> Result<(), ReqcheckError> {
        let in_range = |v: f64| v > 0.0 && v <= 1.0;
        if !(in_range(self.fair) && in_range(self.good) && in_range(self.very_good)) {
            return Err(ReqcheckError::InvalidThresholds(format!(
                "cut-offs must lie in (0, 1], got very_good={}, good={}, fair={}",
                self.very_good, self.good, self.fair
            )));
        }
        if !(self.fair <= self.good && self.good <= self.very_good) {
            return Err(ReqcheckError::InvalidThresholds(format!(
                "cut-offs must satisfy fair <= good <= very_good, got very_good={}, good={}, fair={}",
                self.very_good, self.good, self.fair
            )));
        }
        Ok(())
    }

    /// Map a completeness ratio to a tier.
    pub fn rate(&self, ratio: f64) -> Rating {
        if ratio >= 1.0 {
            Rating::Excellent
        } else if ratio >= self.very_good {
            Rating::VeryGood
        } else if ratio >= self.good {
            Rating::Good
        } else if ratio >= self.fair {
            Rating::Fair
        } else {
            Rating::Poor
        }
    }

    /// Minimum ratio that earns `rating`.
    pub fn minimum(&self, rating: Rating) -> f64 {
        match rating {
            Rating::Excellent => 1.0,
            Rating::VeryGood => self.very_good,
            Rating::Good => self.good,
            Rating::Fair => self.fair,
            Rating::Poor => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ratings_count() {
        assert_eq!(Rating::all().len(), RATING_COUNT);
    }

    #[test]
    fn test_values_are_one_through_five() {
        let values: Vec<u8> = Rating::all().iter().map(|r| r.value()).collect();
        assert_eq!(values, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_value_roundtrip() {
        for rating in Rating::all() {
            assert_eq!(Rating::try_from(rating.value()).unwrap(), *rating);
        }
        assert!(Rating::try_from(0).is_err());
        assert!(Rating::try_from(6).is_err());
    }

    #[test]
    fn test_name_roundtrip() {
        for rating in Rating::all() {
            let parsed: Rating = rating.name().parse().unwrap();
            assert_eq!(parsed, *rating);
        }
        assert!("very_good".parse::<Rating>().is_err());
        assert!("".parse::<Rating>().is_err());
    }

    #[test]
    fn test_serde_format_matches_name() {
        for rating in Rating::all() {
            let json = serde_json::to_string(rating).unwrap();
            assert_eq!(json, format!("\"{}\"", rating.name()));
        }
    }

    #[test]
    fn test_ordering_worst_to_best() {
        assert!(Rating::Poor < Rating::Fair);
        assert!(Rating::VeryGood < Rating::Excellent);
    }

    #[test]
    fn test_from_ratio_tiers() {
        assert_eq!(Rating::from_ratio(1.0), Rating::Excellent);
        assert_eq!(Rating::from_ratio(0.99), Rating::VeryGood);
        assert_eq!(Rating::from_ratio(0.7), Rating::Good);
        assert_eq!(Rating::from_ratio(0.4), Rating::Fair);
        assert_eq!(Rating::from_ratio(0.1), Rating::Poor);
        assert_eq!(Rating::from_ratio(0.0), Rating::Poor);
    }

    #[test]
    fn test_from_ratio_boundaries_inclusive() {
        assert_eq!(Rating::from_ratio(0.85), Rating::VeryGood);
        assert_eq!(Rating::from_ratio(0.849999), Rating::Good);
        assert_eq!(Rating::from_ratio(0.6), Rating::Good);
        assert_eq!(Rating::from_ratio(0.599999), Rating::Fair);
        assert_eq!(Rating::from_ratio(0.3), Rating::Fair);
        assert_eq!(Rating::from_ratio(0.299999), Rating::Poor);
    }

    #[test]
    fn test_nan_ratio_is_poor() {
        assert_eq!(Rating::from_ratio(f64::NAN), Rating::Poor);
    }

    #[test]
    fn test_default_thresholds_validate() {
        assert!(RatingThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_thresholds_reject_out_of_order() {
        let t = RatingThresholds {
            very_good: 0.5,
            good: 0.6,
            fair: 0.3,
        };
        assert!(matches!(
            t.validate(),
            Err(ReqcheckError::InvalidThresholds(_))
        ));
    }

    #[test]
    fn test_thresholds_reject_out_of_range() {
        let zero_fair = RatingThresholds {
            fair: 0.0,
            ..RatingThresholds::default()
        };
        assert!(zero_fair.validate().is_err());
        let above_one = RatingThresholds {
            very_good: 1.5,
            ..RatingThresholds::default()
        };
        assert!(above_one.validate().is_err());
    }

    #[test]
    fn test_custom_thresholds_rate() {
        let t = RatingThresholds {
            very_good: 0.9,
            good: 0.5,
            fair: 0.25,
        };
        assert_eq!(t.rate(0.85), Rating::Good);
        assert_eq!(t.rate(0.25), Rating::Fair);
        assert_eq!(t.minimum(Rating::Good), 0.5);
        assert_eq!(t.minimum(Rating::Excellent), 1.0);
    }

    #[test]
    fn test_thresholds_deserialize_partial() {
        let t: RatingThresholds = serde_json::from_str(r#"{"good": 0.7}"#).unwrap();
        assert_eq!(t.good, 0.7);
        assert_eq!(t.very_good, 0.85);
        assert_eq!(t.fair, 0.3);
    }
}
