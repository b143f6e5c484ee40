//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `url_inspector` library that parses arguments,
//! initializes the logger, wires Ctrl-C to cancellation and maps run results
//! to exit codes.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::BufReader;
use tokio_util::sync::CancellationToken;

use url_inspector::config::{Cli, Command};
use url_inspector::initialization::init_logger_with;
use url_inspector::{run_analyze, run_check, run_watch};

/// Exit status for `analyze --fail-on-invalid` when any input was invalid.
const EXIT_INVALID_INPUT: i32 = 2;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")
    {
        eprintln!("url_inspector error: {:#}", e);
        process::exit(1);
    }

    let cancel = CancellationToken::new();
    let on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, finishing current URL");
            on_signal.cancel();
        }
    });

    match run(cli.command, &cancel).await {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("url_inspector error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(command: Command, cancel: &CancellationToken) -> Result<i32> {
    let mut stdout = io::stdout();
    match command {
        Command::Analyze(args) => {
            let report = run_analyze(&args, &mut stdout, cancel).await?;
            if args.fail_on_invalid && report.has_invalid() {
                return Ok(EXIT_INVALID_INPUT);
            }
        }
        Command::Check(args) => {
            run_check(&args, BufReader::new(tokio::io::stdin()), &mut stdout).await?;
        }
        Command::Watch(args) => {
            run_watch(&args, BufReader::new(tokio::io::stdin()), &mut stdout, cancel).await?;
        }
    }
    Ok(0)
}
