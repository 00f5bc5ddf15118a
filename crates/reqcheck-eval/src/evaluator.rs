//! # Completeness Evaluator
//!
//! Compares requirements against result features and rates the coverage.
//!
//! ## Algorithm
//!
//! 1. A requirement is satisfied iff its id is among the features (exact,
//!    case-sensitive match).
//! 2. `completeness = satisfied / total`, checked for `total == 0` first.
//! 3. The ratio is mapped to a tier by [`RatingThresholds::rate`].
//! 4. Requirements that are not satisfied are missing. Each input
//!    requirement lands in exactly one list, input order preserved.

use std::collections::HashSet;

use reqcheck_core::{Evaluation, InputKind, RatingThresholds, ReqcheckError, Requirement};

use crate::extraction::Extractor;

/// Rates requirement coverage against a set of features.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    thresholds: RatingThresholds,
}

impl Evaluator {
    /// Create an evaluator with the default tier thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an evaluator with custom tier thresholds.
    pub fn with_thresholds(thresholds: RatingThresholds) -> Result<Self, ReqcheckError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds in effect.
    pub fn thresholds(&self) -> &RatingThresholds {
        &self.thresholds
    }

    /// Evaluate `requirements` against `features`.
    ///
    /// Returns [`ReqcheckError::NoRequirements`] when `requirements` is empty.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        requirements: &[Requirement],
        features: &[S],
    ) -> Result<Evaluation, ReqcheckError> {
        if requirements.is_empty() {
            tracing::warn!("no requirements to evaluate");
            return Err(ReqcheckError::NoRequirements);
        }

        let present: HashSet<&str> = features.iter().map(|f| f.as_ref()).collect();
        let (satisfied, missing): (Vec<Requirement>, Vec<Requirement>) = requirements
            .iter()
            .cloned()
            .partition(|req| present.contains(req.id()));

        let total = requirements.len();
        let ratio = satisfied.len() as f64 / total as f64;
        let rating = self.thresholds.rate(ratio);

        tracing::info!(
            rating = rating.name(),
            satisfied = satisfied.len(),
            total,
            "evaluated requirement completeness"
        );

        Ok(Evaluation {
            rating,
            rating_name: rating.name().to_string(),
            completeness: ratio * 100.0,
            satisfied_count: satisfied.len(),
            total_requirements: total,
            satisfied_requirements: satisfied,
            missing_requirements: missing,
        })
    }

    /// Extract identifiers from both texts and evaluate them.
    ///
    /// Both texts are trimmed; an empty one is [`ReqcheckError::EmptyInput`].
    pub fn evaluate_text(
        &self,
        extractor: &Extractor,
        query: &str,
        result: &str,
    ) -> Result<Evaluation, ReqcheckError> {
        let query = query.trim();
        let result = result.trim();
        if query.is_empty() {
            return Err(ReqcheckError::EmptyInput(InputKind::Query));
        }
        if result.is_empty() {
            return Err(ReqcheckError::EmptyInput(InputKind::Result));
        }

        let requirements = extractor.requirements(query);
        let features = extractor.features(result);
        self.evaluate(&requirements, features.as_slice())
    }
}

/// Evaluate with the default thresholds.
pub fn evaluate<S: AsRef<str>>(
    requirements: &[Requirement],
    features: &[S],
) -> Result<Evaluation, ReqcheckError> {
    Evaluator::new().evaluate(requirements, features)
}

/// Extract with the default pattern and evaluate with the default thresholds.
pub fn evaluate_text(query: &str, result: &str) -> Result<Evaluation, ReqcheckError> {
    Evaluator::new().evaluate_text(&Extractor::default(), query, result)
}
