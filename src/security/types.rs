//! Security warning types.

/// Types of security warnings that can be detected in a URL
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SecurityWarning {
    /// URL uses a scheme other than HTTPS
    NoHttps,
    /// Explicit port differs from the scheme's standard port
    NonStandardPort(u16),
    /// Hostname is an IP literal or breaks the DNS label grammar
    InvalidDomain,
    /// URL contains a script or SQL injection signature
    InjectionPattern,
    /// URL carries a password in its userinfo
    PasswordInUrl,
    /// Hostname ends with a TLD often used for abuse
    SuspiciousTld,
}

impl SecurityWarning {
    /// Returns a human-readable description of the warning
    pub fn description(&self) -> String {
        match self {
            SecurityWarning::NoHttps => "Not using HTTPS".to_string(),
            SecurityWarning::NonStandardPort(port) => format!("Using non-standard port: {port}"),
            SecurityWarning::InvalidDomain => "Invalid domain format".to_string(),
            SecurityWarning::InjectionPattern => {
                "Potential injection patterns detected".to_string()
            }
            SecurityWarning::PasswordInUrl => "Password visible in URL".to_string(),
            SecurityWarning::SuspiciousTld => "Suspicious top-level domain".to_string(),
        }
    }

    /// Returns a short code for the warning (for structured output)
    pub fn code(&self) -> &'static str {
        match self {
            SecurityWarning::NoHttps => "no_https",
            SecurityWarning::NonStandardPort(_) => "non_standard_port",
            SecurityWarning::InvalidDomain => "invalid_domain",
            SecurityWarning::InjectionPattern => "injection_pattern",
            SecurityWarning::PasswordInUrl => "password_in_url",
            SecurityWarning::SuspiciousTld => "suspicious_tld",
        }
    }

    /// Follow-up advice shown alongside the warning, if any
    pub fn recommendation(&self) -> Option<&'static str> {
        match self {
            SecurityWarning::NoHttps => Some("Switch to HTTPS for better security"),
            SecurityWarning::NonStandardPort(_) => {
                Some("Serve the site on the standard port for its protocol")
            }
            _ => None,
        }
    }

    /// Points withheld from the security score when this warning fires
    pub fn points(&self) -> i32 {
        match self {
            SecurityWarning::NoHttps => 30,
            SecurityWarning::NonStandardPort(_) => 10,
            SecurityWarning::InvalidDomain => 20,
            SecurityWarning::InjectionPattern => 15,
            SecurityWarning::PasswordInUrl => 10,
            SecurityWarning::SuspiciousTld => 10,
        }
    }
}
