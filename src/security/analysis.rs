//! Security scoring.

use super::types::SecurityWarning;
use super::url_validation::{has_suspicious_tld, SecurityPatterns};
use crate::config::ScoringConfig;
use crate::models::{CategoryReport, UrlComponents};

/// Points available when every security check passes.
const SECURITY_BUDGET: i32 = 95;

/// Collects the security warnings for a parsed URL.
///
/// # Arguments
///
/// * `components` - The parsed URL
/// * `raw` - The input as supplied (scanned for injection signatures before
///   the parser percent-encodes them)
/// * `config` - Standard ports and suspicious TLDs
/// * `patterns` - Compiled domain and injection patterns
pub fn find_security_warnings(
    components: &UrlComponents,
    raw: &str,
    config: &ScoringConfig,
    patterns: &SecurityPatterns,
) -> Vec<SecurityWarning> {
    let mut warnings = Vec::new();

    if components.protocol != "https" {
        warnings.push(SecurityWarning::NoHttps);
    }

    if let Some(port) = components.port {
        if config.standard_port(&components.protocol) != Some(port) {
            warnings.push(SecurityWarning::NonStandardPort(port));
        }
    }

    if !patterns.is_valid_domain(&components.hostname) {
        warnings.push(SecurityWarning::InvalidDomain);
    }

    if patterns.has_injection_patterns(raw) {
        warnings.push(SecurityWarning::InjectionPattern);
    }

    if components.has_password {
        warnings.push(SecurityWarning::PasswordInUrl);
    }

    if has_suspicious_tld(&components.hostname, &config.suspicious_tlds) {
        warnings.push(SecurityWarning::SuspiciousTld);
    }

    warnings
}

/// Scores the security of a parsed URL.
///
/// The score is additive: each passing check contributes its points, so a URL
/// with no warnings scores 95.
pub fn analyze_security(
    components: &UrlComponents,
    raw: &str,
    config: &ScoringConfig,
    patterns: &SecurityPatterns,
) -> CategoryReport {
    let warnings = find_security_warnings(components, raw, config, patterns);

    let withheld: i32 = warnings.iter().map(SecurityWarning::points).sum();
    let issues = warnings.iter().map(SecurityWarning::description).collect();
    let recommendations = warnings
        .iter()
        .filter_map(SecurityWarning::recommendation)
        .map(str::to_string)
        .collect();

    CategoryReport::from_raw(SECURITY_BUDGET - withheld, issues, recommendations)
}
