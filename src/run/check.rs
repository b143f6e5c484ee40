//! The `check` subcommand: blocklist lookup for a single URL.

use std::io::Write;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use super::{build_analyzer, build_blocklist};
use crate::blocklist::BlocklistVerdict;
use crate::config::CheckArgs;

/// Checks one URL against the blocklist and prints the verdict.
///
/// When no URL is given on the command line it is prompted for and read from
/// `input`.
///
/// # Errors
///
/// Returns the parse error if the URL is invalid; an invalid URL is never
/// reported as blocked.
pub async fn run_check<R, W>(args: &CheckArgs, input: R, out: &mut W) -> Result<BlocklistVerdict>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let analyzer = build_analyzer(&args.allow_schemes)?;
    let blocklist = build_blocklist(&args.blocklist)?;

    let raw = match &args.url {
        Some(url) => url.clone(),
        None => {
            write!(out, "Enter a URL: ")?;
            out.flush()?;
            input
                .lines()
                .next_line()
                .await
                .context("Failed to read URL from stdin")?
                .unwrap_or_default()
        }
    };

    let verdict = blocklist.check(&raw, analyzer.config())?;
    if verdict.blocked {
        writeln!(out, "The URL is blocked.")?;
    } else {
        writeln!(out, "The URL is valid and accessible.")?;
    }
    Ok(verdict)
}
