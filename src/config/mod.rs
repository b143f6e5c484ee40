//! Application configuration and constants.
//!
//! This module provides:
//! - Literal tables and thresholds (blocklist, weights, suspicious TLDs, ...)
//! - `ScoringConfig`, the immutable configuration injected into an `Analyzer`
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::{AnalyzeArgs, BlocklistArgs, CheckArgs, Cli, Command, ScoringArgs, WatchArgs};
pub use constants::*;
pub use types::{LogFormat, LogLevel, MatchPolicy, OutputFormat, ScoringConfig, Weights};
