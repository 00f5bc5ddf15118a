//! # reqcheck-core — Foundational Types for reqcheck
//!
//! This crate defines the data model shared by every other crate in the
//! workspace: what a requirement is, what a rating tier is, and what an
//! evaluation produces. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype for identifiers.** `RequirementId` is validated at
//!    construction. No bare strings for requirement identifiers.
//!
//! 2. **Single `Rating` enum.** Five tiers, one definition, exhaustive
//!    `match` everywhere. The numeric value and the display name are
//!    derived from the variant, never stored separately.
//!
//! 3. **`Evaluation` carries its own invariant.** The satisfied and missing
//!    lists partition the input requirements, so
//!    `satisfied_count + missing_requirements.len() == total_requirements`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `reqcheck-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod error;
pub mod evaluation;
pub mod identity;
pub mod rating;

// Re-export primary types for ergonomic imports.
pub use error::{InputKind, ReqcheckError};
pub use evaluation::{Evaluation, Requirement, ResultFeatures};
pub use identity::RequirementId;
pub use rating::{Rating, RatingThresholds, RATING_COUNT};
