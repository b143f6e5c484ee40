//! URL parsing and decomposition.
//!
//! Turns a raw string into `UrlComponents`, or a `ParseError` when the string
//! is not an absolute URL with an allowed scheme and a host. Parsing follows
//! the WHATWG URL standard via the `url` crate.

use log::debug;
use url::Url;

use crate::config::ScoringConfig;
use crate::error_handling::ParseError;
use crate::models::UrlComponents;

/// Parses and validates a raw URL string.
///
/// Surrounding whitespace is ignored. No partial result is ever returned: the
/// input either yields complete components or an error.
///
/// # Errors
///
/// - `ParseError::Empty` for empty or whitespace-only input
/// - `ParseError::Malformed` when the string is not an absolute URL
/// - `ParseError::UnsupportedScheme` when the scheme is not in `config.allowed_schemes`
/// - `ParseError::MissingHost` when the URL has no host
///
/// # Examples
///
/// ```
/// use url_inspector::{parse_url, ScoringConfig};
///
/// let config = ScoringConfig::default();
/// let components = parse_url("https://example.com:8443/a?b=1#c", &config).unwrap();
/// assert_eq!(components.protocol, "https");
/// assert_eq!(components.port, Some(8443));
/// assert!(parse_url("ftp://example.com", &config).is_err());
/// ```
pub fn parse_url(raw: &str, config: &ScoringConfig) -> Result<UrlComponents, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| ParseError::Malformed {
        reason: e.to_string(),
    })?;

    let scheme = url.scheme();
    if !config.allowed_schemes.iter().any(|s| s == scheme) {
        debug!("Rejecting scheme '{scheme}' for {trimmed}");
        return Err(ParseError::UnsupportedScheme {
            scheme: scheme.to_string(),
            allowed: config.allowed_schemes.join(", "),
        });
    }

    let hostname = match url.host_str() {
        Some(host) if !host.is_empty() => host.to_string(),
        _ => return Err(ParseError::MissingHost),
    };

    Ok(UrlComponents {
        protocol: scheme.to_string(),
        hostname,
        port: url.port(),
        effective_port: url.port().or_else(|| config.standard_port(scheme)),
        path: url.path().to_string(),
        query: url.query().map(str::to_string),
        fragment: url.fragment().map(str::to_string),
        origin: url.origin().ascii_serialization(),
        username: url.username().to_string(),
        has_password: url.password().is_some(),
        href: masked_href(&url),
        url_length: url.as_str().chars().count(),
    })
}

/// Serializes the URL with any password replaced by `***`.
fn masked_href(url: &Url) -> String {
    if url.password().is_none() {
        return url.to_string();
    }
    let mut masked = url.clone();
    // Only fails for URLs that cannot carry credentials, and those have no password.
    let _ = masked.set_password(Some("***"));
    masked.to_string()
}

/// Number of `key=value` pairs in a query string. Empty pairs (`a=1&&b=2`) are skipped.
pub fn query_parameter_count(query: Option<&str>) -> usize {
    query
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).count())
        .unwrap_or(0)
}

/// Number of non-empty `/`-separated segments in a path.
pub fn path_depth(path: &str) -> usize {
    path.split('/').filter(|segment| !segment.is_empty()).count()
}
