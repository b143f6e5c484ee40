//! The URL quality scorer.

use std::sync::LazyLock;

use chrono::Utc;
use log::{debug, trace};

use crate::analysis::{
    analyze_accessibility, analyze_best_practices, analyze_performance, analyze_seo,
};
use crate::config::ScoringConfig;
use crate::error_handling::{ConfigValidationError, ParseError};
use crate::models::{AnalysisResult, CategoryReports, UrlComponents};
use crate::parse::parse_url;
use crate::scoring::calculate_overall_score;
use crate::security::{analyze_security, find_security_warnings, SecurityPatterns, SecurityWarning};

static DEFAULT_ANALYZER: LazyLock<Analyzer> = LazyLock::new(|| {
    Analyzer::new(ScoringConfig::default()).expect("built-in scoring tables are valid")
});

/// Parses a URL and scores it in five categories.
///
/// An `Analyzer` owns its validated configuration and compiled patterns and
/// never changes them, so one instance can be shared freely across threads.
///
/// # Examples
///
/// ```
/// use url_inspector::{Analyzer, ScoringConfig};
///
/// let analyzer = Analyzer::new(ScoringConfig::default()).unwrap();
/// let result = analyzer.analyze("https://example.com/");
/// assert!(result.is_valid);
/// assert_eq!(result.overall_score, 99);
///
/// let result = analyzer.analyze("not a url");
/// assert!(!result.is_valid);
/// assert_eq!(result.overall_score, 0);
/// ```
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: ScoringConfig,
    patterns: SecurityPatterns,
}

impl Analyzer {
    /// Validates the configuration and compiles its patterns.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the first invalid field.
    pub fn new(config: ScoringConfig) -> Result<Self, ConfigValidationError> {
        config.validate()?;
        let patterns = SecurityPatterns::compile(&config.injection_signatures)?;
        Ok(Self { config, patterns })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Parses a URL with this analyzer's scheme allow-list.
    pub fn parse(&self, raw: &str) -> Result<UrlComponents, ParseError> {
        parse_url(raw, &self.config)
    }

    /// Scores the five categories of an already-parsed URL.
    pub fn score(&self, components: &UrlComponents, raw: &str) -> CategoryReports {
        CategoryReports {
            security: analyze_security(components, raw, &self.config, &self.patterns),
            performance: analyze_performance(components),
            seo: analyze_seo(components),
            accessibility: analyze_accessibility(components, raw),
            best_practices: analyze_best_practices(components, raw),
        }
    }

    /// Security warnings of an already-parsed URL, in detection order.
    pub fn security_warnings(&self, components: &UrlComponents, raw: &str) -> Vec<SecurityWarning> {
        find_security_warnings(components, raw, &self.config, &self.patterns)
    }

    /// Analyzes one URL string.
    ///
    /// Never fails: a parse error produces a result with `is_valid == false`,
    /// an overall score of 0 and the error attached. The call is synchronous
    /// and performs no I/O.
    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        let timestamp = Utc::now();
        let input = raw.trim();

        match self.parse(input) {
            Ok(components) => {
                let categories = self.score(&components, input);
                let overall_score = calculate_overall_score(&categories, &self.config.weights);
                trace!("Scored {} -> {}", components.href, overall_score);
                AnalysisResult {
                    original: raw.to_string(),
                    is_valid: true,
                    timestamp,
                    components: Some(components),
                    categories: Some(categories),
                    overall_score,
                    error: None,
                }
            }
            Err(e) => {
                debug!("Invalid URL {:?}: {}", raw, e);
                AnalysisResult {
                    original: raw.to_string(),
                    is_valid: false,
                    timestamp,
                    components: None,
                    categories: None,
                    overall_score: 0,
                    error: Some(e),
                }
            }
        }
    }
}

/// Analyzes one URL string with the built-in configuration.
///
/// ```
/// let result = url_inspector::analyze("http://example.com/Some_Page/");
/// assert!(result.is_valid);
/// assert!(result.overall_score < 99);
/// ```
pub fn analyze(raw: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(raw)
}
