//! # Tiers Subcommand
//!
//! Prints the rating tiers, best first, with the minimum completeness
//! ratio each one requires under the effective configuration.

use std::io::Write;

use anyhow::Result;
use clap::Args;

use reqcheck_core::Rating;
use reqcheck_eval::ReqcheckConfig;

use crate::EXIT_OK;

/// Arguments for the `reqcheck tiers` subcommand.
#[derive(Args, Debug, Default)]
pub struct TiersArgs {}

/// Execute the tiers subcommand, printing to stdout.
pub fn run_tiers(args: &TiersArgs, config: &ReqcheckConfig) -> Result<u8> {
    let mut stdout = std::io::stdout().lock();
    tiers_to(args, config, &mut stdout)
}

/// Write the tier table to `out`.
pub fn tiers_to<W: Write>(_args: &TiersArgs, config: &ReqcheckConfig, out: &mut W) -> Result<u8> {
    for rating in Rating::all() {
        let minimum = config.thresholds.minimum(*rating);
        writeln!(
            out,
            "{:<9}  {}/5  completeness >= {:.2}%",
            rating.name(),
            rating.value(),
            minimum * 100.0
        )?;
    }
    Ok(EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqcheck_core::RatingThresholds;

    #[test]
    fn default_table() {
        let mut out = Vec::new();
        tiers_to(&TiersArgs::default(), &ReqcheckConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "EXCELLENT  5/5  completeness >= 100.00%");
        assert_eq!(lines[1], "VERY_GOOD  4/5  completeness >= 85.00%");
        assert_eq!(lines[4], "POOR       1/5  completeness >= 0.00%");
    }

    #[test]
    fn reflects_configured_thresholds() {
        let config = ReqcheckConfig {
            thresholds: RatingThresholds {
                very_good: 0.9,
                good: 0.75,
                fair: 0.5,
            },
            ..ReqcheckConfig::default()
        };
        let mut out = Vec::new();
        tiers_to(&TiersArgs::default(), &config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("GOOD       3/5  completeness >= 75.00%"));
    }
}
