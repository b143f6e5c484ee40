//! Security analysis and warning detection.
//!
//! This module inspects a parsed URL for security issues:
//! - Missing HTTPS
//! - Non-standard ports
//! - IP literals or malformed hostnames
//! - Script and SQL injection signatures
//! - Passwords in the userinfo
//! - Suspicious top-level domains

mod analysis;
mod types;
mod url_validation;

pub use analysis::{analyze_security, find_security_warnings};
pub use types::SecurityWarning;
pub use url_validation::{has_suspicious_tld, is_ip_address, SecurityPatterns};
