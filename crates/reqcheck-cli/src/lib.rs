//! # reqcheck-cli — Command-Line Interface for reqcheck
//!
//! Provides the `reqcheck` binary. Argument parsing lives here; extraction,
//! evaluation, and rendering are delegated to `reqcheck-eval`.
//!
//! ## Subcommands
//!
//! - `reqcheck evaluate` — Rate how completely a result covers a query.
//! - `reqcheck extract` — List the identifiers found in a text.
//! - `reqcheck tiers` — Show the rating tiers and their cut-offs.
//!
//! ```bash
//! reqcheck evaluate --query "feature1 feature2 feature3" --result "feature1 feature3"
//! reqcheck evaluate --query-file query.txt --result-file result.txt --format json
//! reqcheck extract --text "needs feature4 and feature7"
//! ```
//!
//! ## Exit codes
//!
//! - `0` — success.
//! - `1` — nothing to evaluate (empty input, or no requirements found).
//! - `2` — operational error (unreadable file, bad pattern, bad config).

pub mod evaluate;
pub mod extract;
pub mod input;
pub mod tiers;

use std::path::Path;

use anyhow::{Context, Result};

use reqcheck_eval::{Extractor, ReqcheckConfig};

/// Exit code for a completed run.
pub const EXIT_OK: u8 = 0;
/// Exit code when there is nothing to evaluate.
pub const EXIT_NOTHING_TO_EVALUATE: u8 = 1;
/// Exit code for operational errors.
pub const EXIT_ERROR: u8 = 2;

/// Build the effective configuration: defaults, then the optional YAML
/// file, then the environment.
pub fn load_config(path: Option<&Path>) -> Result<ReqcheckConfig> {
    let config = match path {
        Some(path) => ReqcheckConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ReqcheckConfig::default(),
    }
    .apply_env();
    config.validate().context("invalid configuration")?;
    Ok(config)
}

/// Extractor for `--pattern` if given, otherwise for the configured pattern.
pub fn resolve_extractor(pattern: Option<&str>, config: &ReqcheckConfig) -> Result<Extractor> {
    match pattern {
        Some(pattern) => Extractor::new(pattern).context("invalid --pattern"),
        None => config.extractor().context("invalid configured pattern"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_config_without_file_uses_defaults() {
        let config = load_config(None).unwrap();
        assert_eq!(config.thresholds, ReqcheckConfig::default().thresholds);
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "format: html").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.format, reqcheck_eval::OutputFormat::Html);
    }

    #[test]
    fn load_config_rejects_invalid_thresholds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "thresholds:\n  very_good: 0.2").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }

    #[test]
    fn load_config_missing_file_errors() {
        assert!(load_config(Some(Path::new("/nonexistent/reqcheck.yaml"))).is_err());
    }

    #[test]
    fn resolve_extractor_prefers_flag() {
        let config = ReqcheckConfig::default();
        let extractor = resolve_extractor(Some(r"ID\d"), &config).unwrap();
        assert_eq!(extractor.pattern(), r"ID\d");
        let fallback = resolve_extractor(None, &config).unwrap();
        assert_eq!(fallback.pattern(), config.pattern);
    }

    #[test]
    fn resolve_extractor_rejects_bad_flag() {
        assert!(resolve_extractor(Some("("), &ReqcheckConfig::default()).is_err());
    }
}
