//! # Identifier Extraction
//!
//! Pulls requirement and feature identifiers out of free text. Every
//! non-overlapping match of the pattern is returned, in order of
//! appearance, duplicates included. Text with no matches yields an empty
//! collection rather than an error.

use regex::Regex;

use reqcheck_core::{Requirement, RequirementId, ReqcheckError, ResultFeatures};

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = r"feature\d+";

/// Compiled identifier pattern.
#[derive(Debug, Clone)]
pub struct Extractor {
    regex: Regex,
}

impl Extractor {
    /// Compile an extractor for `pattern`.
    pub fn new(pattern: &str) -> Result<Self, ReqcheckError> {
        let regex = Regex::new(pattern).map_err(|e| ReqcheckError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { regex })
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// All identifiers in `text`, in order of appearance.
    ///
    /// Empty matches (possible with patterns such as `a*`) are skipped.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.regex
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Requirements named in the query text.
    pub fn requirements(&self, text: &str) -> Vec<Requirement> {
        let requirements: Vec<Requirement> = self
            .extract(text)
            .into_iter()
            .filter_map(|id| RequirementId::new(id).ok())
            .map(Requirement::new)
            .collect();
        tracing::debug!(count = requirements.len(), "extracted requirements from query");
        requirements
    }

    /// Features present in the result text.
    pub fn features(&self, text: &str) -> ResultFeatures {
        let features = ResultFeatures::new(self.extract(text));
        tracing::debug!(count = features.len(), "extracted features from result");
        features
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(DEFAULT_PATTERN).expect("default extraction pattern compiles")
    }
}

/// Requirements in `text` using the default pattern.
pub fn parse_query(text: &str) -> Vec<Requirement> {
    Extractor::default().requirements(text)
}

/// Features in `text` using the default pattern.
pub fn parse_result(text: &str) -> ResultFeatures {
    Extractor::default().features(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pattern_compiles() {
        assert_eq!(Extractor::default().pattern(), DEFAULT_PATTERN);
    }

    #[test]
    fn extracts_in_order_with_duplicates() {
        let ids = Extractor::default().extract("need feature1 and feature22, feature1");
        assert_eq!(ids, vec!["feature1", "feature22", "feature1"]);
    }

    #[test]
    fn matches_inside_words() {
        let ids = Extractor::default().extract("myfeature3x");
        assert_eq!(ids, vec!["feature3"]);
    }

    #[test]
    fn case_sensitive() {
        assert!(Extractor::default().extract("Feature1 FEATURE2").is_empty());
    }

    #[test]
    fn no_match_is_empty() {
        assert!(parse_query("nothing to see here").is_empty());
        assert!(parse_result("").is_empty());
    }

    #[test]
    fn parse_query_builds_requirements() {
        let reqs = parse_query("feature1 feature2");
        let ids: Vec<&str> = reqs.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["feature1", "feature2"]);
    }

    #[test]
    fn parse_result_builds_features() {
        let features = parse_result("has feature4 and feature5");
        assert_eq!(features.as_slice(), ["feature4", "feature5"]);
    }

    #[test]
    fn custom_pattern() {
        let extractor = Extractor::new(r"REQ-\d{3}").unwrap();
        assert_eq!(
            extractor.extract("REQ-001, REQ-12, REQ-300"),
            vec!["REQ-001", "REQ-300"]
        );
    }

    #[test]
    fn empty_matches_are_skipped() {
        let extractor = Extractor::new(r"x*").unwrap();
        assert_eq!(extractor.extract("ab xx c"), vec!["xx"]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let err = Extractor::new("feature(").unwrap_err();
        assert!(matches!(err, ReqcheckError::InvalidPattern { .. }));
    }
}
