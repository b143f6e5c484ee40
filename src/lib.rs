//! url_inspector library: offline URL validation, blocklisting and quality scoring
//!
//! A URL is parsed into its components and scored from 0 to 100 in five
//! categories (security, performance, SEO, accessibility and best practices).
//! The category scores are combined into a weighted overall score. Everything
//! is computed from the URL string alone: no network request is ever made.
//!
//! # Example
//!
//! ```
//! use url_inspector::{analyze, Blocklist, MatchPolicy, ScoringConfig};
//!
//! let result = analyze("https://example.com/");
//! assert!(result.is_valid);
//! assert_eq!(result.overall_score, 99);
//!
//! let categories = result.categories.unwrap();
//! assert_eq!(categories.security.score, 95);
//!
//! let blocklist = Blocklist::new(["http://evil.com"], MatchPolicy::Exact);
//! let verdict = blocklist.check("http://evil.com", &ScoringConfig::default()).unwrap();
//! assert!(verdict.blocked);
//! ```
//!
//! # Requirements
//!
//! Scoring is synchronous. Only the subcommand drivers (`run_analyze`,
//! `run_check`, `run_watch`) need a Tokio runtime.

pub mod analysis;
mod analyzer;
mod app;
mod blocklist;
pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod parse;
mod run;
mod scoring;
pub mod security;

// Re-export public API
pub use analyzer::{analyze, Analyzer};
pub use app::{simulate_latency, Debouncer, DEFAULT_DELAY_RANGE};
pub use blocklist::{Blocklist, BlocklistVerdict};
pub use config::{LogFormat, LogLevel, MatchPolicy, OutputFormat, ScoringConfig, Weights};
pub use error_handling::{
    ConfigValidationError, InitializationError, OutcomeType, ParseError, ProcessingStats,
};
pub use models::{
    AnalysisResult, Category, CategoryReport, CategoryReports, PerformanceMetrics,
    PerformanceReport, ScoreGrade, UrlComponents,
};
pub use parse::{parse_url, path_depth, query_parameter_count};
pub use run::{run_analyze, run_check, run_watch, RunReport};
pub use scoring::calculate_overall_score;
