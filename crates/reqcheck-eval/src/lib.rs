//! # reqcheck-eval — Requirement Completeness Evaluation
//!
//! Compares the requirements named in a query against the features present
//! in a result and rates how completely the result covers the query:
//!
//! - **Evaluator** (`evaluator.rs`): the pure comparison. Partitions the
//!   requirements into satisfied and missing, computes the completeness
//!   ratio, and maps it onto a [`Rating`](reqcheck_core::Rating) tier.
//!
//! - **Extraction** (`extraction.rs`): pulls identifiers out of free text
//!   with a regular expression (`feature\d+` by default).
//!
//! - **Report** (`report.rs`): renders an [`Evaluation`](reqcheck_core::Evaluation)
//!   as plain text, HTML, or JSON.
//!
//! - **Config** (`config.rs`): YAML configuration for the extraction pattern,
//!   tier thresholds, and default output format.
//!
//! ## Definition
//!
//! Let R be the requirement sequence and F the feature set. A requirement
//! r is satisfied iff `r.id ∈ F` (exact string match). Completeness is
//! `c = |{r ∈ R : r.id ∈ F}| / |R|`, undefined for `|R| = 0`, which is
//! reported as [`ReqcheckError::NoRequirements`](reqcheck_core::ReqcheckError::NoRequirements).
//!
//! Evaluation is synchronous and side-effect free apart from `tracing` events.

pub mod config;
pub mod evaluator;
pub mod extraction;
pub mod report;

pub use config::{ConfigError, ReqcheckConfig};
pub use evaluator::{evaluate, evaluate_text, Evaluator};
pub use extraction::{parse_query, parse_result, Extractor, DEFAULT_PATTERN};
pub use report::{render, render_html, render_json, render_text, OutputFormat};
