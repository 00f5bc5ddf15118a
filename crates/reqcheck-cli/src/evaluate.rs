//! # Evaluate Subcommand
//!
//! Extracts requirements from the query and features from the result,
//! rates the coverage, and prints the report.
//!
//! Blank input and queries without any requirement identifiers are
//! reported on stdout with exit code 1 instead of failing as errors.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgGroup, Args};

use reqcheck_core::ReqcheckError;
use reqcheck_eval::{render, OutputFormat, ReqcheckConfig};

use crate::{resolve_extractor, EXIT_NOTHING_TO_EVALUATE, EXIT_OK};

/// Arguments for the `reqcheck evaluate` subcommand.
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("query_input").required(true).args(["query", "query_file"])))]
#[command(group(ArgGroup::new("result_input").required(true).args(["result", "result_file"])))]
pub struct EvaluateArgs {
    /// Query text naming the requirements.
    #[arg(long)]
    pub query: Option<String>,

    /// Read the query from a file (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub query_file: Option<PathBuf>,

    /// Result text naming the delivered features.
    #[arg(long)]
    pub result: Option<String>,

    /// Read the result from a file (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub result_file: Option<PathBuf>,

    /// Report format: text, html, or json. Defaults to the configured format.
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Identifier pattern (regular expression). Overrides the config.
    #[arg(long)]
    pub pattern: Option<String>,
}

/// Execute the evaluate subcommand, printing to stdout.
pub fn run_evaluate(args: &EvaluateArgs, config: &ReqcheckConfig) -> Result<u8> {
    let mut stdout = std::io::stdout().lock();
    evaluate_to(args, config, &mut stdout)
}

/// Execute the evaluate subcommand, writing the report to `out`.
///
/// Returns exit code: 0 on success, 1 when there is nothing to evaluate.
pub fn evaluate_to<W: Write>(args: &EvaluateArgs, config: &ReqcheckConfig, out: &mut W) -> Result<u8> {
    let stdin = Path::new("-");
    if args.query_file.as_deref() == Some(stdin) && args.result_file.as_deref() == Some(stdin) {
        anyhow::bail!("only one input can be read from stdin");
    }

    let query = crate::input::read_text(args.query.as_deref(), args.query_file.as_deref())?;
    let result = crate::input::read_text(args.result.as_deref(), args.result_file.as_deref())?;

    let extractor = resolve_extractor(args.pattern.as_deref(), config)?;
    let evaluator = config.evaluator().context("invalid rating thresholds")?;
    let format = args.format.unwrap_or(config.format);

    tracing::debug!(pattern = extractor.pattern(), %format, "evaluating");

    let evaluation = match evaluator.evaluate_text(&extractor, &query, &result) {
        Ok(evaluation) => evaluation,
        Err(ReqcheckError::EmptyInput(kind)) => {
            tracing::info!(input = %kind, "empty input");
            writeln!(out, "Please enter both query and result.")?;
            return Ok(EXIT_NOTHING_TO_EVALUATE);
        }
        Err(ReqcheckError::NoRequirements) => {
            writeln!(out, "No requirements to evaluate.")?;
            return Ok(EXIT_NOTHING_TO_EVALUATE);
        }
        Err(e) => return Err(e).context("evaluation failed"),
    };

    let report = render(&evaluation, format).context("failed to render report")?;
    write!(out, "{report}")?;
    if !report.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(EXIT_OK)
}
