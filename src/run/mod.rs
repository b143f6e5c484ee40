//! Subcommand drivers shared by the binary and the integration tests.
//!
//! Each driver builds its `Analyzer` and `Blocklist` from CLI arguments,
//! writes reports to the supplied writer and logs statistics at the end.

mod analyze;
mod check;
mod watch;

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use log::debug;
use strum::IntoEnumIterator;

use crate::analyzer::Analyzer;
use crate::app::{render_json, render_text, ReportEntry};
use crate::blocklist::Blocklist;
use crate::config::{BlocklistArgs, OutputFormat, ScoringConfig};
use crate::error_handling::{OutcomeType, ProcessingStats};
use crate::models::{AnalysisResult, Category};
use crate::security::SecurityWarning;

pub use analyze::run_analyze;
pub use check::run_check;
pub use watch::run_watch;

/// Summary of a finished `analyze` or `watch` run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Number of URLs evaluated
    pub total: usize,
    /// Valid URLs that are not on the blocklist
    pub valid: usize,
    /// URLs that failed to parse or used a disallowed scheme
    pub invalid: usize,
    /// Valid URLs found on the blocklist
    pub blocked: usize,
    pub elapsed_seconds: f64,
}

impl RunReport {
    fn from_stats(stats: &ProcessingStats, elapsed: Duration) -> Self {
        Self {
            total: stats.total_processed(),
            valid: stats.get_outcome_count(OutcomeType::Valid),
            invalid: stats.get_outcome_count(OutcomeType::Invalid),
            blocked: stats.get_outcome_count(OutcomeType::Blocked),
            elapsed_seconds: elapsed.as_secs_f64(),
        }
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}

/// Builds an analyzer, replacing the allowed schemes when any are given.
fn build_analyzer(allow_schemes: &[String]) -> Result<Analyzer> {
    let mut config = ScoringConfig::default();
    if !allow_schemes.is_empty() {
        config.allowed_schemes = allow_schemes.to_vec();
    }
    Analyzer::new(config).context("Invalid scoring configuration")
}

fn build_blocklist(args: &BlocklistArgs) -> Result<Blocklist> {
    match &args.blocklist {
        Some(path) => Blocklist::from_file(path, args.match_policy),
        None => Ok(Blocklist::with_defaults(args.match_policy)),
    }
}

fn outcome_of(result: &AnalysisResult, blocked: bool) -> OutcomeType {
    if !result.is_valid {
        OutcomeType::Invalid
    } else if blocked {
        OutcomeType::Blocked
    } else {
        OutcomeType::Valid
    }
}

/// Scores one URL, checks it against the blocklist, records it and writes the report.
fn evaluate<W: Write>(
    analyzer: &Analyzer,
    blocklist: &Blocklist,
    raw: &str,
    format: OutputFormat,
    stats: &ProcessingStats,
    out: &mut W,
) -> Result<AnalysisResult> {
    let result = analyzer.analyze(raw);
    let blocked = result
        .components
        .as_ref()
        .is_some_and(|c| blocklist.is_blocked(raw, &c.href));

    stats.increment_outcome(outcome_of(&result, blocked));
    if let Some(categories) = &result.categories {
        for category in Category::iter() {
            stats.add_issues(category, categories.get(category).issues.len());
        }
    }
    debug!(
        "{} -> score {} (valid={}, blocked={})",
        raw.trim(),
        result.overall_score,
        result.is_valid,
        blocked
    );

    let warnings = result
        .components
        .as_ref()
        .map(|c| analyzer.security_warnings(c, raw.trim()))
        .unwrap_or_default();
    let entry = ReportEntry::new(&result, blocked)
        .with_warnings(warnings.iter().map(SecurityWarning::code).collect());
    match format {
        OutputFormat::Text => write!(out, "{}", render_text(&entry)),
        OutputFormat::Json => writeln!(
            out,
            "{}",
            render_json(&entry).context("Failed to serialize analysis result")?
        ),
    }
    .context("Failed to write report")?;

    Ok(result)
}
