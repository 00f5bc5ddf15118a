//! # Extract Subcommand
//!
//! Prints the identifiers the configured pattern finds in a text, one per
//! line, in order of appearance. Useful for checking a pattern before
//! evaluating with it.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};

use reqcheck_eval::ReqcheckConfig;

use crate::{resolve_extractor, EXIT_OK};

/// Arguments for the `reqcheck extract` subcommand.
#[derive(Args, Debug, Default)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file"])))]
pub struct ExtractArgs {
    /// Text to scan.
    #[arg(long)]
    pub text: Option<String>,

    /// Read the text from a file (`-` for stdin).
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Identifier pattern (regular expression). Overrides the config.
    #[arg(long)]
    pub pattern: Option<String>,

    /// Print each identifier once, keeping first occurrences.
    #[arg(long)]
    pub unique: bool,
}

/// Execute the extract subcommand, printing to stdout.
pub fn run_extract(args: &ExtractArgs, config: &ReqcheckConfig) -> Result<u8> {
    let mut stdout = std::io::stdout().lock();
    extract_to(args, config, &mut stdout)
}

/// Execute the extract subcommand, writing identifiers to `out`.
pub fn extract_to<W: Write>(args: &ExtractArgs, config: &ReqcheckConfig, out: &mut W) -> Result<u8> {
    let text = crate::input::read_text(args.text.as_deref(), args.file.as_deref())?;
    let extractor = resolve_extractor(args.pattern.as_deref(), config)?;

    let mut ids = extractor.extract(&text);
    if args.unique {
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));
    }
    tracing::info!(count = ids.len(), "extracted identifiers");

    for id in &ids {
        writeln!(out, "{id}")?;
    }
    Ok(EXIT_OK)
}
