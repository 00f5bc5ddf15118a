//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error type shared by the reqcheck library crates. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - An empty requirement list is an error value, not a NaN ratio.
//! - Input errors name which input (query or result) was rejected.
//! - Configuration errors carry the offending value.

use thiserror::Error;

/// Which free-text input an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// The query text that requirements are extracted from.
    Query,
    /// The result text that features are extracted from.
    Result,
}

impl std::fmt::Display for InputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Result => f.write_str("result"),
        }
    }
}

/// Top-level error type for reqcheck.
#[derive(Error, Debug)]
pub enum ReqcheckError {
    /// The requirement list was empty, so completeness is undefined.
    #[error("no requirements to evaluate")]
    NoRequirements,

    /// A free-text input was empty after trimming.
    #[error("{0} text is empty; please enter both query and result")]
    EmptyInput(InputKind),

    /// A requirement identifier was empty or whitespace.
    #[error("invalid requirement identifier: {0:?}")]
    InvalidIdentifier(String),

    /// The rating code is outside 1..=5.
    #[error("invalid rating value: {0} (expected 1..=5)")]
    InvalidRatingValue(u8),

    /// The rating name is not one of the five tier names.
    #[error("unknown rating name: {0:?}")]
    UnknownRating(String),

    /// Tier thresholds are out of range or out of order.
    #[error("invalid rating thresholds: {0}")]
    InvalidThresholds(String),

    /// The extraction pattern failed to compile.
    #[error("invalid extraction pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as supplied.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },
}
