//! Reading free-text inputs given inline or as files.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Return `inline` if given, else the contents of `file`, else an empty
/// string. A file path of `-` reads standard input.
pub fn read_text(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }
    let Some(path) = file else {
        return Ok(String::new());
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
