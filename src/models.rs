//! Data model for analysis results.
//!
//! Everything here is plain data: produced once per `analyze` call and never
//! mutated afterwards. All types serialize with serde so any presentation
//! layer (terminal, JSON, structured log) can render them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::error_handling::ParseError;

/// Decomposed parts of a parsed absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    /// Scheme without the trailing colon (e.g. "https")
    pub protocol: String,
    /// Host as serialized by the URL parser (IPv6 literals keep their brackets)
    pub hostname: String,
    /// Port written in the URL, if it differs from the scheme default
    pub port: Option<u16>,
    /// Explicit port, or the protocol default when none was written
    pub effective_port: Option<u16>,
    pub path: String,
    /// Query string without the leading `?`
    pub query: Option<String>,
    /// Fragment without the leading `#`
    pub fragment: Option<String>,
    pub origin: String,
    pub username: String,
    /// Whether a password was present. The password itself is never kept.
    pub has_password: bool,
    /// Normalized serialization of the whole URL, with any password masked
    pub href: String,
    /// Character length of the normalized URL as parsed, password included
    pub url_length: usize,
}

impl UrlComponents {
    /// Password as shown to users: masked when present, empty otherwise.
    pub fn masked_password(&self) -> &'static str {
        if self.has_password {
            "***"
        } else {
            ""
        }
    }
}

/// The five scoring dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Security,
    Performance,
    Seo,
    Accessibility,
    BestPractices,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Security => "Security",
            Category::Performance => "Performance",
            Category::Seo => "SEO",
            Category::Accessibility => "Accessibility",
            Category::BestPractices => "Best Practices",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dimension's score plus the issues and recommendations behind it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Always within 0..=100
    pub score: u8,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl CategoryReport {
    /// Builds a report from a raw running total, clamping it into 0..=100.
    pub(crate) fn from_raw(raw: i32, issues: Vec<String>, recommendations: Vec<String>) -> Self {
        Self {
            score: clamp_score(raw),
            issues,
            recommendations,
        }
    }
}

/// Clamps a running total into the 0..=100 score range.
pub(crate) fn clamp_score(raw: i32) -> u8 {
    // Cast is lossless after the clamp.
    raw.clamp(0, 100) as u8
}

/// Raw measurements taken by the performance analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PerformanceMetrics {
    pub url_length: usize,
    pub parameter_count: usize,
    pub path_depth: usize,
}

/// Performance category report with the metrics it was computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PerformanceReport {
    #[serde(flatten)]
    pub report: CategoryReport,
    pub metrics: PerformanceMetrics,
}

/// The five category reports of a valid URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryReports {
    pub security: CategoryReport,
    pub performance: PerformanceReport,
    pub seo: CategoryReport,
    pub accessibility: CategoryReport,
    pub best_practices: CategoryReport,
}

impl CategoryReports {
    /// Returns the report for a category.
    pub fn get(&self, category: Category) -> &CategoryReport {
        match category {
            Category::Security => &self.security,
            Category::Performance => &self.performance.report,
            Category::Seo => &self.seo,
            Category::Accessibility => &self.accessibility,
            Category::BestPractices => &self.best_practices,
        }
    }
}

/// Result of one `analyze` call.
///
/// Invalid inputs carry `is_valid == false`, an `overall_score` of 0 and the
/// parse error. No category is computed for them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// The input exactly as supplied
    pub original: String,
    pub is_valid: bool,
    pub timestamp: DateTime<Utc>,
    pub components: Option<UrlComponents>,
    pub categories: Option<CategoryReports>,
    pub overall_score: u8,
    pub error: Option<ParseError>,
}

impl AnalysisResult {
    /// Grade band of the overall score.
    pub fn grade(&self) -> ScoreGrade {
        ScoreGrade::from_score(self.overall_score)
    }
}

/// Coarse band a score falls into, used for coloring and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreGrade {
    Poor,
    Warning,
    Good,
    Excellent,
}

impl ScoreGrade {
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => ScoreGrade::Excellent,
            70..=89 => ScoreGrade::Good,
            50..=69 => ScoreGrade::Warning,
            _ => ScoreGrade::Poor,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreGrade::Excellent => "excellent",
            ScoreGrade::Good => "good",
            ScoreGrade::Warning => "warning",
            ScoreGrade::Poor => "poor",
        }
    }
}
