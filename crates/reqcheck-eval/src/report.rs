//! # Report Rendering
//!
//! Turns an [`Evaluation`] into text for a terminal, an HTML fragment for
//! embedding in a page, or pretty-printed JSON for machines.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use reqcheck_core::{Evaluation, Requirement};

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// HTML fragment.
    Html,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Lowercase format name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Html => "html",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown output format {other:?} (expected text, html, or json)"
            )),
        }
    }
}

/// Render `evaluation` in `format`.
pub fn render(evaluation: &Evaluation, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(evaluation)),
        OutputFormat::Html => Ok(render_html(evaluation)),
        OutputFormat::Json => render_json(evaluation),
    }
}

/// Plain-text report.
///
/// ```text
/// Rating: GOOD (3/5)
/// Completeness: 66.67%
/// Satisfied Requirements: 2 / 3
///
/// Satisfied Requirements:
///   - feature1
///   - feature3
///
/// Missing Requirements:
///   - feature2
/// ```
pub fn render_text(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Rating: {} ({}/5)", evaluation.rating_name, evaluation.rating.value());
    let _ = writeln!(out, "Completeness: {:.2}%", evaluation.completeness);
    let _ = writeln!(
        out,
        "Satisfied Requirements: {} / {}",
        evaluation.satisfied_count, evaluation.total_requirements
    );
    write_text_list(&mut out, "Satisfied Requirements", &evaluation.satisfied_requirements);
    write_text_list(&mut out, "Missing Requirements", &evaluation.missing_requirements);
    out
}

fn write_text_list(out: &mut String, heading: &str, items: &[Requirement]) {
    let _ = writeln!(out, "\n{heading}:");
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}

/// HTML fragment. Identifiers are escaped.
pub fn render_html(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<h3>Rating: {} ({}/5)</h3>",
        escape_html(&evaluation.rating_name),
        evaluation.rating.value()
    );
    let _ = writeln!(out, "<p>Completeness: {:.2}%</p>", evaluation.completeness);
    let _ = writeln!(
        out,
        "<p>Satisfied Requirements: {} / {}</p>",
        evaluation.satisfied_count, evaluation.total_requirements
    );
    write_html_list(&mut out, "Satisfied Requirements", &evaluation.satisfied_requirements);
    write_html_list(&mut out, "Missing Requirements", &evaluation.missing_requirements);
    out
}

fn write_html_list(out: &mut String, heading: &str, items: &[Requirement]) {
    let _ = writeln!(out, "<h4>{heading}:</h4>");
    out.push_str("<ul>");
    for item in items {
        let _ = write!(out, "<li>{}</li>", escape_html(item.id()));
    }
    out.push_str("</ul>\n");
}

/// Pretty-printed JSON with camelCase field names.
pub fn render_json(evaluation: &Evaluation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(evaluation)
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
