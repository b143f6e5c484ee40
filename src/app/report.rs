//! Human-readable and JSON rendering of analysis results.

use colored::*;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::models::{AnalysisResult, Category, ScoreGrade, UrlComponents};

/// One line of output: an analysis result plus the blocklist verdict.
#[derive(Debug, Serialize)]
pub struct ReportEntry<'a> {
    #[serde(flatten)]
    pub result: &'a AnalysisResult,
    /// Grade band, absent for invalid input
    pub grade: Option<ScoreGrade>,
    pub blocked: bool,
    /// Machine-readable codes of the security warnings raised
    pub warnings: Vec<&'static str>,
}

impl<'a> ReportEntry<'a> {
    pub fn new(result: &'a AnalysisResult, blocked: bool) -> Self {
        Self {
            result,
            grade: result.is_valid.then(|| result.grade()),
            blocked,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(mut self, codes: Vec<&'static str>) -> Self {
        self.warnings = codes;
        self
    }
}

/// Label and value of every component worth showing. The password is masked.
fn component_rows(components: &UrlComponents) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Protocol", format!("{}:", components.protocol)),
        ("Hostname", components.hostname.clone()),
    ];
    match (components.port, components.effective_port) {
        (Some(port), _) => rows.push(("Port", port.to_string())),
        (None, Some(port)) => rows.push(("Port", format!("{port} (default)"))),
        (None, None) => {}
    }
    rows.push(("Path", components.path.clone()));
    let optional = [
        ("Query", components.query.as_deref().unwrap_or_default()),
        ("Fragment", components.fragment.as_deref().unwrap_or_default()),
        ("Origin", components.origin.as_str()),
        ("Username", components.username.as_str()),
        ("Password", components.masked_password()),
    ];
    for (label, value) in optional {
        // Opaque origins serialize as "null"
        if !value.is_empty() && value != "null" {
            rows.push((label, value.to_string()));
        }
    }
    rows
}

fn paint_score(score: u8) -> ColoredString {
    let text = format!("{score:>3}");
    match ScoreGrade::from_score(score) {
        ScoreGrade::Excellent => text.green().bold(),
        ScoreGrade::Good => text.cyan(),
        ScoreGrade::Warning => text.yellow(),
        ScoreGrade::Poor => text.red().bold(),
    }
}

/// Renders a multi-line colored text report.
pub fn render_text(entry: &ReportEntry<'_>) -> String {
    let result = entry.result;
    let (Some(components), Some(categories)) = (&result.components, &result.categories) else {
        let reason = result
            .error
            .as_ref()
            .map(|e| e.to_string())
            .unwrap_or_else(|| "Invalid URL".to_string());
        return format!("{} {}\n    {}\n", "✗".red().bold(), result.original.trim(), reason.red());
    };

    let mut out = format!(
        "{} {}/100 ({}){}\n",
        components.href.bold(),
        paint_score(result.overall_score),
        result.grade().as_str(),
        if entry.blocked {
            format!(" {}", "[BLOCKED]".red().bold())
        } else {
            String::new()
        }
    );

    for (label, value) in component_rows(components) {
        out.push_str(&format!("    {} {}\n", format!("{label:<9}").dimmed(), value));
    }

    for category in Category::iter() {
        let report = categories.get(category);
        out.push_str(&format!("  {:<15} {}\n", category.as_str(), paint_score(report.score)));
        if category == Category::Performance {
            let metrics = categories.performance.metrics;
            out.push_str(&format!(
                "    {}\n",
                format!(
                    "length {}, {} query parameters, path depth {}",
                    metrics.url_length, metrics.parameter_count, metrics.path_depth
                )
                .dimmed()
            ));
        }
        for issue in &report.issues {
            out.push_str(&format!("    {} {}\n", "✗".yellow(), issue));
        }
        for recommendation in &report.recommendations {
            out.push_str(&format!("    {} {}\n", "→".blue(), recommendation));
        }
    }
    out
}

/// Renders the entry as a single-line JSON object.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(entry: &ReportEntry<'_>) -> serde_json::Result<String> {
    serde_json::to_string(entry)
}
