//! # Evaluation Records
//!
//! The inputs and output of a completeness evaluation. All values are
//! transient: built per call, rendered, and dropped.
//!
//! The JSON form of [`Evaluation`] uses camelCase field names and encodes
//! `rating` as its numeric tier value, with the tier name alongside in
//! `ratingName`.

use serde::{Deserialize, Serialize};

use crate::identity::RequirementId;
use crate::rating::Rating;

/// A single requirement extracted from the query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Requirement {
    /// Identifier that must appear among the result features.
    pub id: RequirementId,
}

impl Requirement {
    /// Create a requirement from a validated identifier.
    pub fn new(id: RequirementId) -> Self {
        Self { id }
    }

    /// Identifier as a string slice.
    pub fn id(&self) -> &str {
        self.id.as_str()
    }
}

impl From<RequirementId> for Requirement {
    fn from(id: RequirementId) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.id, f)
    }
}

/// Features extracted from the result text, in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultFeatures {
    /// Feature identifiers. Duplicates are kept.
    pub features: Vec<String>,
}

impl ResultFeatures {
    /// Wrap a list of feature identifiers.
    pub fn new(features: Vec<String>) -> Self {
        Self { features }
    }

    /// Borrow the features as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.features
    }

    /// Number of features, duplicates included.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether no features were extracted.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Result of comparing requirements against result features.
///
/// # Invariant
///
/// `satisfied_requirements` and `missing_requirements` partition the input
/// requirements, so `satisfied_count + missing_requirements.len() ==
/// total_requirements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Completeness tier.
    #[serde(with = "rating_value")]
    pub rating: Rating,
    /// Tier name, e.g. `"GOOD"`.
    pub rating_name: String,
    /// Percentage of requirements satisfied, `0.0..=100.0`.
    pub completeness: f64,
    /// Number of satisfied requirements.
    pub satisfied_count: usize,
    /// Number of input requirements.
    pub total_requirements: usize,
    /// Satisfied requirements in input order.
    pub satisfied_requirements: Vec<Requirement>,
    /// Unsatisfied requirements in input order.
    pub missing_requirements: Vec<Requirement>,
}

impl Evaluation {
    /// Completeness as a ratio in `[0, 1]`.
    pub fn ratio(&self) -> f64 {
        self.completeness / 100.0
    }

    /// Whether every requirement was satisfied.
    pub fn is_complete(&self) -> bool {
        self.missing_requirements.is_empty()
    }

    /// Number of unsatisfied requirements.
    pub fn missing_count(&self) -> usize {
        self.missing_requirements.len()
    }
}

/// Encodes a [`Rating`] as its numeric value (1..=5).
mod rating_value {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::rating::Rating;

    pub fn serialize<S: Serializer>(rating: &Rating, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(rating.value())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rating, D::Error> {
        let value = u8::deserialize(deserializer)?;
        Rating::try_from(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(id: &str) -> Requirement {
        Requirement::new(RequirementId::new(id).unwrap())
    }

    fn sample() -> Evaluation {
        Evaluation {
            rating: Rating::Good,
            rating_name: Rating::Good.name().to_string(),
            completeness: 200.0 / 3.0,
            satisfied_count: 2,
            total_requirements: 3,
            satisfied_requirements: vec![req("feature1"), req("feature3")],
            missing_requirements: vec![req("feature2")],
        }
    }

    #[test]
    fn json_uses_camel_case_and_numeric_rating() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["rating"], 3);
        assert_eq!(value["ratingName"], "GOOD");
        assert_eq!(value["satisfiedCount"], 2);
        assert_eq!(value["totalRequirements"], 3);
        assert_eq!(value["missingRequirements"][0]["id"], "feature2");
    }

    #[test]
    fn json_rejects_out_of_range_rating() {
        let mut value = serde_json::to_value(sample()).unwrap();
        value["rating"] = serde_json::json!(9);
        assert!(serde_json::from_value::<Evaluation>(value).is_err());
    }

    #[test]
    fn ratio_and_counts() {
        let eval = sample();
        assert!((eval.ratio() - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(eval.missing_count(), 1);
        assert!(!eval.is_complete());
    }

    #[test]
    fn requirement_display_is_id() {
        assert_eq!(req("feature9").to_string(), "feature9");
        assert_eq!(req("feature9").id(), "feature9");
    }

    #[test]
    fn result_features_accessors() {
        let features = ResultFeatures::new(vec!["feature1".into(), "feature1".into()]);
        assert_eq!(features.len(), 2);
        assert!(!features.is_empty());
        assert!(ResultFeatures::default().is_empty());
    }
}
