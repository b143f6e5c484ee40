//! The `analyze` subcommand: score URLs given as arguments or read in bulk.

use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Result};
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use super::{build_analyzer, build_blocklist, evaluate, RunReport};
use crate::app::{
    log_progress, print_processing_statistics, print_timing_statistics, read_source,
    simulate_latency, split_lines, DEFAULT_DELAY_RANGE,
};
use crate::config::AnalyzeArgs;
use crate::error_handling::ProcessingStats;

/// Logs progress every this many URLs in bulk runs.
const PROGRESS_INTERVAL: usize = 500;

/// Analyzes every URL from the arguments and the optional input file, in order.
///
/// Reports are written to `out` as they are produced. Cancellation stops the
/// run between URLs and the partial report is still returned.
///
/// # Errors
///
/// Fails if the configuration or blocklist is invalid, the input cannot be
/// read, no URLs were supplied, or writing to `out` fails. Invalid URLs are
/// not errors; they are counted in the report.
pub async fn run_analyze<W: Write>(
    args: &AnalyzeArgs,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<RunReport> {
    let analyzer = build_analyzer(&args.scoring.allow_schemes)?;
    let blocklist = build_blocklist(&args.blocklist)?;

    let file_text = match &args.file {
        Some(path) => Some(read_source(path).await?),
        None => None,
    };
    let mut urls: Vec<&str> = args.urls.iter().map(String::as_str).collect();
    if let Some(text) = &file_text {
        urls.extend(split_lines(text));
    }
    if urls.is_empty() {
        bail!("No URLs to analyze: pass them as arguments or with --file");
    }

    info!(
        "Analyzing {} URL{}",
        urls.len(),
        if urls.len() == 1 { "" } else { "s" }
    );

    let stats = ProcessingStats::new();
    let start = Instant::now();
    for (index, raw) in urls.iter().enumerate() {
        if cancel.is_cancelled() {
            warn!("Cancelled after {} of {} URLs", index, urls.len());
            break;
        }
        if args.scoring.simulate_delay && !simulate_latency(DEFAULT_DELAY_RANGE, cancel).await {
            warn!("Cancelled after {} of {} URLs", index, urls.len());
            break;
        }

        evaluate(&analyzer, &blocklist, raw, args.scoring.format, &stats, out)?;

        if (index + 1) % PROGRESS_INTERVAL == 0 {
            log_progress(start, index + 1, urls.len());
        }
    }
    out.flush()?;

    let elapsed = start.elapsed();
    print_processing_statistics(&stats);
    print_timing_statistics(&stats, elapsed);
    Ok(RunReport::from_stats(&stats, elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BlocklistArgs, MatchPolicy, OutputFormat, ScoringArgs};

    fn args(urls: &[&str]) -> AnalyzeArgs {
        AnalyzeArgs {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            file: None,
            fail_on_invalid: false,
            scoring: ScoringArgs {
                allow_schemes: Vec::new(),
                format: OutputFormat::Json,
                simulate_delay: false,
            },
            blocklist: BlocklistArgs {
                blocklist: None,
                match_policy: MatchPolicy::Exact,
            },
        }
    }

    #[tokio::test]
    async fn test_run_analyze_counts_outcomes() {
        let mut out = Vec::new();
        let report = run_analyze(
            &args(&["https://example.com/", "not a url", "https://youtube.com"]),
            &mut out,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.valid, 1);
        assert_eq!(report.invalid, 1);
        assert_eq!(report.blocked, 1);
        assert!(report.has_invalid());
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 3);
    }

    #[tokio::test]
    async fn test_run_analyze_requires_input() {
        let err = run_analyze(&args(&[]), &mut Vec::new(), &CancellationToken::new())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("No URLs to analyze"));
    }

    #[tokio::test]
    async fn test_run_analyze_cancelled_before_start() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let report = run_analyze(&args(&["https://example.com/"]), &mut Vec::new(), &cancel)
            .await
            .unwrap();
        assert_eq!(report.total, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_analyze_with_simulated_delay() {
        let mut a = args(&["https://example.com/", "https://example.org/"]);
        a.scoring.simulate_delay = true;
        let start = tokio::time::Instant::now();
        let report = run_analyze(&a, &mut Vec::new(), &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(report.total, 2);
        assert!(start.elapsed() >= std::time::Duration::from_millis(400));
    }
}
