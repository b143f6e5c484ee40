//! Reading URL lists from files or stdin.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

/// Splits bulk input into URLs: one per line, trimmed, blank lines dropped.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Reads a whole input source. A path of `-` reads stdin to the end.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read, or is not UTF-8.
pub async fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        tokio::io::stdin()
            .read_to_string(&mut text)
            .await
            .context("Failed to read URLs from stdin")?;
        return Ok(text);
    }

    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}
