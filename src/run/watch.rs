//! The `watch` subcommand: interactive scoring of URLs typed on stdin.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use super::{build_analyzer, build_blocklist, evaluate, RunReport};
use crate::app::{
    print_processing_statistics, print_timing_statistics, simulate_latency, Debouncer,
    DEFAULT_DELAY_RANGE,
};
use crate::config::WatchArgs;
use crate::error_handling::ProcessingStats;

const INPUT_QUEUE: usize = 256;

/// Reads lines from `input` and scores them once input settles.
///
/// In the default mode only the latest line of a burst is scored. With
/// `--bulk` every line of the burst is scored in order. The run ends at end of
/// input or when `cancel` fires.
///
/// # Errors
///
/// Fails if the configuration or blocklist is invalid, reading `input` fails,
/// or writing to `out` fails.
pub async fn run_watch<R, W>(
    args: &WatchArgs,
    input: R,
    out: &mut W,
    cancel: &CancellationToken,
) -> Result<RunReport>
where
    R: AsyncBufRead + Unpin + Send + 'static,
    W: Write,
{
    let analyzer = build_analyzer(&args.scoring.allow_schemes)?;
    let blocklist = build_blocklist(&args.blocklist)?;

    let window = args.debounce_window();
    let (tx, mut debouncer) = Debouncer::channel(window, INPUT_QUEUE);
    let reader = tokio::spawn(forward_lines(input, tx));
    info!(
        "Watching input for URLs ({}ms debounce{})",
        window.as_millis(),
        if args.bulk { ", bulk" } else { "" }
    );

    let stats = ProcessingStats::new();
    let start = Instant::now();
    let mut input_closed = false;
    'watch: loop {
        let batch = tokio::select! {
            _ = cancel.cancelled() => break 'watch,
            batch = next_input(&mut debouncer, args.bulk) => match batch {
                Some(batch) => batch,
                None => {
                    input_closed = true;
                    break 'watch;
                }
            },
        };

        for raw in &batch {
            if args.scoring.simulate_delay && !simulate_latency(DEFAULT_DELAY_RANGE, cancel).await {
                break 'watch;
            }
            evaluate(&analyzer, &blocklist, raw, args.scoring.format, &stats, out)?;
        }
        out.flush()?;
    }

    if input_closed {
        reader.await.context("Input reader task panicked")??;
    } else {
        warn!("Stopped watching before end of input");
        reader.abort();
    }

    let elapsed = start.elapsed();
    print_processing_statistics(&stats);
    print_timing_statistics(&stats, elapsed);
    Ok(RunReport::from_stats(&stats, elapsed))
}

async fn next_input(debouncer: &mut Debouncer<String>, bulk: bool) -> Option<Vec<String>> {
    if bulk {
        debouncer.next_batch().await
    } else {
        debouncer.next().await.map(|latest| vec![latest])
    }
}

/// Forwards non-blank input lines to the debouncer until end of input.
async fn forward_lines<R: AsyncBufRead + Unpin>(input: R, tx: mpsc::Sender<String>) -> Result<()> {
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input line")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if tx.send(line.to_string()).await.is_err() {
            break;
        }
    }
    Ok(())
}
