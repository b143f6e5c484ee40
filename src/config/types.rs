//! Configuration types and CLI option enums.
//!
//! `ScoringConfig` holds every literal table the analyzers consult. It is
//! built once, validated, and then owned immutably by an `Analyzer`, so tests
//! can substitute their own lists.

use std::collections::BTreeMap;

use clap::ValueEnum;
use regex::RegexBuilder;
use serde::Serialize;

use crate::config::constants::*;
use crate::error_handling::ConfigValidationError;
use crate::models::Category;
use strum::IntoEnumIterator;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How analysis results are written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored per-category report
    Text,
    /// One JSON object per analyzed URL
    Json,
}

/// How blocklist entries are compared with a URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Byte-for-byte comparison
    #[default]
    Exact,
    /// Comparison after lowercasing both sides
    CaseInsensitive,
}

/// Category weights in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Weights {
    pub security: u32,
    pub performance: u32,
    pub seo: u32,
    pub accessibility: u32,
    pub best_practices: u32,
}

impl Weights {
    pub fn for_category(&self, category: Category) -> u32 {
        match category {
            Category::Security => self.security,
            Category::Performance => self.performance,
            Category::Seo => self.seo,
            Category::Accessibility => self.accessibility,
            Category::BestPractices => self.best_practices,
        }
    }

    /// Sum of all weights, widened so arbitrary caller values cannot overflow.
    pub fn total(&self) -> u64 {
        Category::iter()
            .map(|c| u64::from(self.for_category(c)))
            .sum()
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            security: WEIGHT_SECURITY,
            performance: WEIGHT_PERFORMANCE,
            seo: WEIGHT_SEO,
            accessibility: WEIGHT_ACCESSIBILITY,
            best_practices: WEIGHT_BEST_PRACTICES,
        }
    }
}

/// Literal tables consulted by the analyzers.
///
/// # Examples
///
/// ```
/// use url_inspector::ScoringConfig;
///
/// let config = ScoringConfig {
///     suspicious_tlds: vec![".zip".to_string()],
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoringConfig {
    /// Schemes the parser accepts (lowercase, without colon)
    pub allowed_schemes: Vec<String>,

    /// Standard port per scheme
    pub standard_ports: BTreeMap<String, u16>,

    /// Hostname suffixes that cost the security bonus
    pub suspicious_tlds: Vec<String>,

    /// Case-insensitive regular expressions matched against the raw input
    pub injection_signatures: Vec<String>,

    /// Weights of the overall score
    pub weights: Weights,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            allowed_schemes: DEFAULT_ALLOWED_SCHEMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            standard_ports: DEFAULT_STANDARD_PORTS
                .iter()
                .map(|(scheme, port)| (scheme.to_string(), *port))
                .collect(),
            suspicious_tlds: DEFAULT_SUSPICIOUS_TLDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            injection_signatures: DEFAULT_INJECTION_SIGNATURES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            weights: Weights::default(),
        }
    }
}

impl ScoringConfig {
    /// Standard port of a scheme, if known.
    pub fn standard_port(&self, scheme: &str) -> Option<u16> {
        self.standard_ports.get(scheme).copied()
    }

    /// Checks the tables for values the analyzers cannot work with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.allowed_schemes.is_empty() {
            return Err(ConfigValidationError::new(
                "allowed_schemes",
                "at least one scheme must be allowed (e.g. \"https\")",
            ));
        }
        if let Some(bad) = self
            .allowed_schemes
            .iter()
            .find(|s| s.is_empty() || s.ends_with(':') || s.chars().any(|c| c.is_ascii_uppercase()))
        {
            return Err(ConfigValidationError::new(
                "allowed_schemes",
                format!("scheme '{bad}' must be lowercase and written without a trailing colon"),
            ));
        }

        if let Some(bad) = self.suspicious_tlds.iter().find(|t| !t.starts_with('.') || t.len() < 2) {
            return Err(ConfigValidationError::new(
                "suspicious_tlds",
                format!("TLD '{bad}' must start with a dot, e.g. \".tk\""),
            ));
        }

        for pattern in &self.injection_signatures {
            if let Err(e) = RegexBuilder::new(pattern).case_insensitive(true).build() {
                return Err(ConfigValidationError::new(
                    "injection_signatures",
                    format!("pattern '{pattern}' is not a valid regular expression: {e}"),
                ));
            }
        }

        if let Some(category) = Category::iter().find(|c| self.weights.for_category(*c) > 100) {
            return Err(ConfigValidationError::new(
                "weights",
                format!(
                    "weight for {} is {}, each weight must be at most 100 percent",
                    category,
                    self.weights.for_category(category)
                ),
            ));
        }

        let total = self.weights.total();
        if total != 100 {
            return Err(ConfigValidationError::new(
                "weights",
                format!("category weights must sum to 100 percent, got {total}"),
            ));
        }

        Ok(())
    }
}
