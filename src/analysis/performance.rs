//! Performance scoring: URL length, query size and path depth.

use crate::config::{
    MAX_PATH_DEPTH, MAX_QUERY_PARAMS, MAX_URL_LENGTH, MODERATE_QUERY_PARAMS, MODERATE_URL_LENGTH,
};
use crate::models::{CategoryReport, PerformanceMetrics, PerformanceReport, UrlComponents};
use crate::parse::{path_depth, query_parameter_count};

/// Measures the URL. Metrics are recorded whether or not they cost points.
pub fn measure(components: &UrlComponents) -> PerformanceMetrics {
    PerformanceMetrics {
        url_length: components.url_length,
        parameter_count: query_parameter_count(components.query.as_deref()),
        path_depth: path_depth(&components.path),
    }
}

/// Scores a parsed URL starting from 100 and subtracting penalties.
pub fn analyze_performance(components: &UrlComponents) -> PerformanceReport {
    let metrics = measure(components);
    let mut score = 100;
    let mut issues = Vec::new();

    if metrics.url_length > MAX_URL_LENGTH {
        score -= 20;
        issues.push(format!("URL too long (>{MAX_URL_LENGTH} chars)"));
    } else if metrics.url_length > MODERATE_URL_LENGTH {
        score -= 10;
        issues.push("URL moderately long".to_string());
    }

    if metrics.parameter_count > MAX_QUERY_PARAMS {
        score -= 15;
        issues.push("Too many query parameters".to_string());
    } else if metrics.parameter_count > MODERATE_QUERY_PARAMS {
        // Small penalty, not worth an issue
        score -= 5;
    }

    if metrics.path_depth > MAX_PATH_DEPTH {
        score -= 10;
        issues.push("Deep URL structure".to_string());
    }

    PerformanceReport {
        report: CategoryReport::from_raw(score, issues, Vec::new()),
        metrics,
    }
}
