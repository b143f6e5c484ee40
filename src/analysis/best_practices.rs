//! Best-practice checks: a fixed list of pass/fail rules with point values.

use crate::config::{MAX_PATH_PIECES, MAX_URL_LENGTH, MODERATE_QUERY_PARAMS};
use crate::models::{CategoryReport, UrlComponents};
use crate::parse::query_parameter_count;

/// Characters that are risky to paste into markup or shells unescaped.
const SUSPICIOUS_CHARS: &[char] = &['<', '>', '\'', '"', '&'];

/// One rule: whether it passed, what it is worth, and the violation text.
struct Check {
    passed: bool,
    points: i32,
    violation: &'static str,
}

fn checks(components: &UrlComponents, raw: &str) -> [Check; 5] {
    [
        Check {
            passed: components.url_length <= MAX_URL_LENGTH,
            points: 15,
            violation: "URL exceeds recommended length",
        },
        Check {
            passed: !raw.contains(' '),
            points: 10,
            violation: "URL contains spaces",
        },
        Check {
            // Counts the empty piece before the leading slash
            passed: components.path.split('/').count() <= MAX_PATH_PIECES,
            points: 10,
            violation: "URL path too deep",
        },
        Check {
            passed: query_parameter_count(components.query.as_deref()) <= MODERATE_QUERY_PARAMS,
            points: 10,
            violation: "Too many query parameters",
        },
        Check {
            passed: !raw.contains(SUSPICIOUS_CHARS),
            points: 15,
            violation: "Suspicious characters detected",
        },
    ]
}

/// Scores a parsed URL. Violations are reported as issues.
pub fn analyze_best_practices(components: &UrlComponents, raw: &str) -> CategoryReport {
    let mut score = 100;
    let mut issues = Vec::new();

    for check in checks(components, raw) {
        if !check.passed {
            score -= check.points;
            issues.push(check.violation.to_string());
        }
    }

    CategoryReport::from_raw(score, issues, Vec::new())
}
