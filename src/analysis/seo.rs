//! SEO scoring: hostname and path conventions search engines prefer.

use crate::models::{CategoryReport, UrlComponents};

pub fn analyze_seo(components: &UrlComponents) -> CategoryReport {
    let mut score = 100;
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();
    let path = components.path.as_str();

    if components.hostname.starts_with("www.") {
        score -= 5;
        recommendations.push("Consider using non-www version".to_string());
    }

    if path.ends_with('/') && path != "/" {
        score -= 5;
        issues.push("Trailing slash present".to_string());
    }

    // Runs on the encoded path, so the hex digits of %XX escapes count too
    if path.chars().any(|c| c.is_ascii_uppercase()) {
        score -= 10;
        issues.push("Uppercase characters in path".to_string());
    }

    if path.contains('_') {
        score -= 5;
        recommendations.push("Use hyphens instead of underscores".to_string());
    }

    if components.fragment.as_deref().is_some_and(|f| !f.is_empty()) {
        score -= 5;
        issues.push("Fragment identifier present".to_string());
    }

    CategoryReport::from_raw(score, issues, recommendations)
}
