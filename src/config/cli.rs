//! Command-line interface definition.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::config::constants::{BULK_INPUT_DEBOUNCE, INPUT_DEBOUNCE};
use crate::config::types::{LogFormat, LogLevel, MatchPolicy, OutputFormat};

/// Top-level command-line options.
#[derive(Debug, Parser)]
#[command(
    name = "url_inspector",
    version,
    about = "Validates URLs, checks them against a blocklist and scores their quality."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score one or more URLs
    Analyze(AnalyzeArgs),
    /// Check a single URL against the blocklist
    Check(CheckArgs),
    /// Read URLs interactively from stdin and score the latest one
    Watch(WatchArgs),
}

/// Blocklist source and matching policy, shared by all subcommands.
#[derive(Debug, Clone, Args)]
pub struct BlocklistArgs {
    /// File with one blocked URL per line (replaces the built-in list)
    #[arg(long, value_parser)]
    pub blocklist: Option<PathBuf>,

    /// How blocklist entries are compared: exact|case-insensitive
    #[arg(long, value_enum, default_value_t = MatchPolicy::Exact)]
    pub match_policy: MatchPolicy,
}

/// Options shared by the scoring subcommands.
#[derive(Debug, Clone, Args)]
pub struct ScoringArgs {
    /// Accepted URL scheme (repeatable, replaces the default http/https)
    #[arg(long = "allow-scheme", value_name = "SCHEME")]
    pub allow_schemes: Vec<String>,

    /// Output format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Wait a random 200-700ms before printing each result
    #[arg(long)]
    pub simulate_delay: bool,
}

#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// URLs to analyze
    pub urls: Vec<String>,

    /// File with one URL per line ("-" reads stdin)
    #[arg(long, short = 'f', value_parser)]
    pub file: Option<PathBuf>,

    /// Exit with status 2 if any URL is invalid
    #[arg(long)]
    pub fail_on_invalid: bool,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    #[command(flatten)]
    pub blocklist: BlocklistArgs,
}

#[derive(Debug, Clone, Args)]
pub struct CheckArgs {
    /// URL to check (prompted for on stdin when omitted)
    pub url: Option<String>,

    /// Accepted URL scheme (repeatable, replaces the default http/https)
    #[arg(long = "allow-scheme", value_name = "SCHEME")]
    pub allow_schemes: Vec<String>,

    #[command(flatten)]
    pub blocklist: BlocklistArgs,
}

#[derive(Debug, Clone, Args)]
pub struct WatchArgs {
    /// Milliseconds of input quiescence before evaluating [default: 300, or 500 with --bulk]
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Evaluate every line received in a burst instead of only the latest one
    #[arg(long)]
    pub bulk: bool,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    #[command(flatten)]
    pub blocklist: BlocklistArgs,
}

impl WatchArgs {
    /// Quiet period the debouncer waits for.
    pub fn debounce_window(&self) -> Duration {
        match self.debounce_ms {
            Some(ms) => Duration::from_millis(ms),
            None if self.bulk => BULK_INPUT_DEBOUNCE,
            None => INPUT_DEBOUNCE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_analyze_parsing() {
        let cli = Cli::try_parse_from([
            "url_inspector",
            "analyze",
            "https://example.com",
            "http://example.org",
            "--format",
            "json",
        ])
        .expect("Should parse analyze command");

        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.urls.len(), 2);
                assert_eq!(args.scoring.format, OutputFormat::Json);
                assert!(!args.scoring.simulate_delay);
                assert!(args.file.is_none());
                assert_eq!(args.blocklist.match_policy, MatchPolicy::Exact);
            }
            other => panic!("Expected analyze, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_check_parsing() {
        let cli = Cli::try_parse_from([
            "url_inspector",
            "--log-level",
            "debug",
            "check",
            "https://youtube.com",
            "--match-policy",
            "case-insensitive",
        ])
        .expect("Should parse check command");

        assert_eq!(
            log::LevelFilter::from(cli.log_level),
            log::LevelFilter::Debug
        );
        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.url.as_deref(), Some("https://youtube.com"));
                assert_eq!(args.blocklist.match_policy, MatchPolicy::CaseInsensitive);
            }
            other => panic!("Expected check, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_watch_defaults() {
        let cli = Cli::try_parse_from(["url_inspector", "watch"]).expect("Should parse watch");
        match cli.command {
            Command::Watch(args) => {
                assert_eq!(args.debounce_window(), Duration::from_millis(300));
                assert!(!args.bulk);
                assert_eq!(args.scoring.format, OutputFormat::Text);
            }
            other => panic!("Expected watch, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_watch_bulk_window() {
        let cli = Cli::try_parse_from(["url_inspector", "watch", "--bulk"]).unwrap();
        let Command::Watch(args) = cli.command else {
            panic!("Expected watch");
        };
        assert_eq!(args.debounce_window(), Duration::from_millis(500));

        let cli =
            Cli::try_parse_from(["url_inspector", "watch", "--bulk", "--debounce-ms", "50"]).unwrap();
        let Command::Watch(args) = cli.command else {
            panic!("Expected watch");
        };
        assert_eq!(args.debounce_window(), Duration::from_millis(50));
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["url_inspector"]).is_err());
    }

    #[test]
    fn test_cli_repeatable_allow_scheme() {
        let cli = Cli::try_parse_from([
            "url_inspector",
            "analyze",
            "ftp://example.com",
            "--allow-scheme",
            "ftp",
            "--allow-scheme",
            "https",
        ])
        .unwrap();
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.scoring.allow_schemes, vec!["ftp", "https"]);
            }
            other => panic!("Expected analyze, got {:?}", other),
        }
    }
}
