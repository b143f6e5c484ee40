//! Hostname and content checks used by the security analyzer.
//!
//! This module provides:
//! - A strict DNS-label grammar check for hostnames
//! - IP literal detection (IPv4 and bracketed IPv6)
//! - Suspicious TLD matching
//! - A compiled set of case-insensitive injection signatures

use std::net::{Ipv4Addr, Ipv6Addr};

use regex::{Regex, RegexSet, RegexSetBuilder};

use crate::error_handling::ConfigValidationError;

/// Dot-separated labels of 1-63 alphanumerics/hyphens, no leading or trailing hyphen.
const DOMAIN_PATTERN: &str =
    r"^[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(\.[a-zA-Z0-9]([a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

/// Compiled regular expressions for hostname and content checks.
///
/// Built once per `Analyzer` and reused for every URL.
#[derive(Debug, Clone)]
pub struct SecurityPatterns {
    domain: Regex,
    injection: RegexSet,
}

impl SecurityPatterns {
    /// Compiles the domain grammar and the given injection signatures.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` if a signature is not a valid regular expression.
    pub fn compile(injection_signatures: &[String]) -> Result<Self, ConfigValidationError> {
        let domain = Regex::new(DOMAIN_PATTERN).map_err(|e| {
            ConfigValidationError::new("domain_pattern", format!("failed to compile: {e}"))
        })?;
        let injection = RegexSetBuilder::new(injection_signatures)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                ConfigValidationError::new(
                    "injection_signatures",
                    format!("failed to compile injection signatures: {e}"),
                )
            })?;
        Ok(Self { domain, injection })
    }

    /// Returns `true` if the hostname is a well-formed DNS name and not an IP literal.
    pub fn is_valid_domain(&self, hostname: &str) -> bool {
        self.domain.is_match(hostname) && !is_ip_address(hostname)
    }

    /// Returns `true` if any injection signature occurs in `text`.
    pub fn has_injection_patterns(&self, text: &str) -> bool {
        self.injection.is_match(text)
    }
}

/// Checks if a hostname is an IPv4 literal or a (possibly bracketed) IPv6 literal.
pub fn is_ip_address(hostname: &str) -> bool {
    if hostname.parse::<Ipv4Addr>().is_ok() {
        return true;
    }
    let unbracketed = hostname
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(hostname);
    unbracketed.parse::<Ipv6Addr>().is_ok()
}

/// Checks if a hostname ends with one of the given TLD suffixes (e.g. ".tk").
///
/// Comparison ignores ASCII case; hostnames from the URL parser are already lowercase.
/// A fully-qualified host with a trailing dot does not match, the same way it
/// fails the domain-format check.
pub fn has_suspicious_tld(hostname: &str, suspicious_tlds: &[String]) -> bool {
    let host = hostname.to_ascii_lowercase();
    suspicious_tlds
        .iter()
        .any(|tld| host.ends_with(&tld.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_INJECTION_SIGNATURES;

    fn patterns() -> SecurityPatterns {
        let signatures: Vec<String> = DEFAULT_INJECTION_SIGNATURES
            .iter()
            .map(|s| s.to_string())
            .collect();
        SecurityPatterns::compile(&signatures).unwrap()
    }

    #[test]
    fn test_valid_domains() {
        let p = patterns();
        assert!(p.is_valid_domain("example.com"));
        assert!(p.is_valid_domain("sub.example.co.uk"));
        assert!(p.is_valid_domain("my-site.example"));
        assert!(p.is_valid_domain("localhost"));
        assert!(p.is_valid_domain("a"));
        assert!(p.is_valid_domain("xn--bcher-kva.example"));
    }

    #[test]
    fn test_invalid_domains() {
        let p = patterns();
        assert!(!p.is_valid_domain("-example.com"));
        assert!(!p.is_valid_domain("example-.com"));
        assert!(!p.is_valid_domain("exa_mple.com"));
        assert!(!p.is_valid_domain("example..com"));
        assert!(!p.is_valid_domain(""));
        let long_label = "a".repeat(64);
        assert!(!p.is_valid_domain(&format!("{long_label}.com")));
        let max_label = "a".repeat(63);
        assert!(p.is_valid_domain(&format!("{max_label}.com")));
    }

    #[test]
    fn test_ip_literals_are_not_valid_domains() {
        let p = patterns();
        // Matches the label grammar but is an address
        assert!(!p.is_valid_domain("192.168.1.1"));
        assert!(!p.is_valid_domain("8.8.8.8"));
        assert!(!p.is_valid_domain("[::1]"));
        assert!(!p.is_valid_domain("[2001:db8::1]"));
    }

    #[test]
    fn test_is_ip_address() {
        assert!(is_ip_address("127.0.0.1"));
        assert!(is_ip_address("::1"));
        assert!(is_ip_address("[fe80::1]"));
        assert!(is_ip_address("[2001:db8:0:0:0:0:0:1]"));
        assert!(!is_ip_address("example.com"));
        assert!(!is_ip_address("1.2.3"));
        assert!(!is_ip_address("[example]"));
    }

    #[test]
    fn test_injection_patterns_detected() {
        let p = patterns();
        assert!(p.has_injection_patterns("https://x.com/?q=<script>alert(1)</script>"));
        assert!(p.has_injection_patterns("https://x.com/?q=<SCRIPT>"));
        assert!(p.has_injection_patterns("https://x.com/?u=JavaScript:alert(1)"));
        assert!(p.has_injection_patterns("https://x.com/?u=vbscript:msgbox"));
        assert!(p.has_injection_patterns("https://x.com/?a=<img onerror=x>"));
        assert!(p.has_injection_patterns("https://x.com/?a=<body onload=x>"));
        assert!(p.has_injection_patterns("https://x.com/?a=eval(1)"));
        assert!(p.has_injection_patterns("https://x.com/?id=1 UNION ALL SELECT pw"));
        assert!(p.has_injection_patterns("https://x.com/?q=1;DROP TABLE users"));
    }

    #[test]
    fn test_injection_patterns_clean_urls() {
        let p = patterns();
        assert!(!p.has_injection_patterns("https://example.com/"));
        assert!(!p.has_injection_patterns("https://example.com/scripts/app.js"));
        assert!(!p.has_injection_patterns("https://example.com/?evaluate=1"));
        assert!(!p.has_injection_patterns("https://example.com/union/station"));
    }

    #[test]
    fn test_invalid_signature_fails_to_compile() {
        let err = SecurityPatterns::compile(&["eval(".to_string()]).unwrap_err();
        assert_eq!(err.field, "injection_signatures");
    }

    #[test]
    fn test_has_suspicious_tld() {
        let tlds: Vec<String> = vec![".tk".into(), ".ml".into(), ".ga".into(), ".cf".into()];
        assert!(has_suspicious_tld("free-prizes.tk", &tlds));
        assert!(has_suspicious_tld("example.ML", &tlds));
        assert!(!has_suspicious_tld("example.cf.", &tlds));
        assert!(!has_suspicious_tld("example.com", &tlds));
        assert!(!has_suspicious_tld("tk.example.com", &tlds));
        assert!(!has_suspicious_tld("example.gallery", &tlds));
    }
}
