//! Configuration constants.
//!
//! Literal tables used to build the default `ScoringConfig` and `Blocklist`,
//! plus the timing defaults of the interactive shell.

use std::time::Duration;

/// Schemes accepted by the parser unless configured otherwise.
pub const DEFAULT_ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Standard port per scheme. Used both for the effective port of a URL and
/// for the security port check.
pub const DEFAULT_STANDARD_PORTS: &[(&str, u16)] = &[
    ("http", 80),
    ("https", 443),
    ("ftp", 21),
    ("ws", 80),
    ("wss", 443),
];

/// Top-level domains frequently abused for throwaway or malicious sites.
pub const DEFAULT_SUSPICIOUS_TLDS: &[&str] = &[".tk", ".ml", ".ga", ".cf"];

/// Case-insensitive regular expressions for script and SQL injection markers.
pub const DEFAULT_INJECTION_SIGNATURES: &[&str] = &[
    r"<script",
    r"javascript:",
    r"vbscript:",
    r"onload=",
    r"onerror=",
    r"eval\(",
    r"union.*select",
    r"drop.*table",
];

/// URLs rejected by the `check` command unless a blocklist file is given.
pub const DEFAULT_BLOCKED_URLS: &[&str] = &[
    "https://blockedexample.com",
    "https://malicioussite.com",
    "https://phishingsite.com",
    "https://youtube.com",
    "https://www.instagram.com/",
];

/// Category weights in percent. Must sum to 100.
pub const WEIGHT_SECURITY: u32 = 30;
pub const WEIGHT_PERFORMANCE: u32 = 25;
pub const WEIGHT_SEO: u32 = 20;
pub const WEIGHT_ACCESSIBILITY: u32 = 15;
pub const WEIGHT_BEST_PRACTICES: u32 = 10;

// URL length thresholds
/// Hard upper bound for URL length (common browser and server limit)
pub const MAX_URL_LENGTH: usize = 2048;
/// Length above which a URL is considered moderately long
pub const MODERATE_URL_LENGTH: usize = 1024;

// Query parameter thresholds
pub const MAX_QUERY_PARAMS: usize = 20;
pub const MODERATE_QUERY_PARAMS: usize = 10;

// Path thresholds
/// Non-empty segment count above which a path is "deep"
pub const MAX_PATH_DEPTH: usize = 8;
/// Maximum number of `/`-separated pieces (leading empty piece included)
pub const MAX_PATH_PIECES: usize = 5;

/// Quiet period before interactive input is evaluated.
pub const INPUT_DEBOUNCE: Duration = Duration::from_millis(300);
/// Quiet period before bulk (multi-line) input is evaluated.
pub const BULK_INPUT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Bounds of the optional simulated latency, in milliseconds.
pub const SIMULATED_DELAY_MIN_MS: u64 = 200;
pub const SIMULATED_DELAY_MAX_MS: u64 = 700;
