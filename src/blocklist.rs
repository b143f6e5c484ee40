//! Static URL blocklist.
//!
//! The check is a plain membership test, independent of scoring. A URL is
//! first validated with the same parser as the scorer, so invalid input is
//! reported as a parse error and never as "blocked". It is then matched on both
//! its trimmed raw form and its normalized serialization, against entries that
//! are themselves stored raw and normalized. `MatchPolicy` decides whether the
//! comparison is case-sensitive.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Serialize;
use url::Url;

use crate::config::{MatchPolicy, ScoringConfig, DEFAULT_BLOCKED_URLS};
use crate::error_handling::ParseError;
use crate::parse::parse_url;

/// Outcome of a blocklist check on a valid URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlocklistVerdict {
    /// Normalized form of the checked URL
    pub url: String,
    pub blocked: bool,
}

/// Immutable set of blocked URLs.
#[derive(Debug, Clone)]
pub struct Blocklist {
    entries: HashSet<String>,
    policy: MatchPolicy,
}

impl Blocklist {
    /// Builds a blocklist from entries. Blank entries are ignored.
    pub fn new<I, S>(entries: I, policy: MatchPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = HashSet::new();
        for entry in entries {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            set.insert(match_key(entry, policy));
            if let Some(normalized) = normalize(entry) {
                set.insert(match_key(&normalized, policy));
            }
        }
        Self {
            entries: set,
            policy,
        }
    }

    /// The built-in list of blocked URLs.
    pub fn with_defaults(policy: MatchPolicy) -> Self {
        Self::new(DEFAULT_BLOCKED_URLS.iter(), policy)
    }

    /// Loads one entry per line. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file(path: &Path, policy: MatchPolicy) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read blocklist file: {}", path.display()))?;
        let list = Self::new(parse_entries(&text), policy);
        info!(
            "Loaded blocklist from {} ({} match keys)",
            path.display(),
            list.entries.len()
        );
        Ok(list)
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Number of stored match keys (raw and normalized forms are stored separately).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Membership test on an already-validated URL.
    ///
    /// `raw` is the input as typed and `normalized` its serialized form.
    pub fn is_blocked(&self, raw: &str, normalized: &str) -> bool {
        self.entries.contains(&match_key(raw.trim(), self.policy))
            || self.entries.contains(&match_key(normalized, self.policy))
    }

    /// Validates a URL and checks it against the list.
    ///
    /// # Errors
    ///
    /// Returns the `ParseError` if the URL is invalid or uses a disallowed scheme.
    pub fn check(&self, raw: &str, config: &ScoringConfig) -> Result<BlocklistVerdict, ParseError> {
        let components = parse_url(raw, config)?;
        let blocked = self.is_blocked(raw, &components.href);
        debug!("Blocklist check {} -> blocked={}", components.href, blocked);
        Ok(BlocklistVerdict {
            url: components.href,
            blocked,
        })
    }
}

impl Default for Blocklist {
    fn default() -> Self {
        Self::with_defaults(MatchPolicy::default())
    }
}

/// Extracts entries from blocklist file contents.
pub fn parse_entries(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

fn normalize(entry: &str) -> Option<String> {
    Url::parse(entry).ok().map(|u| u.to_string())
}

fn match_key(value: &str, policy: MatchPolicy) -> String {
    match policy {
        MatchPolicy::Exact => value.to_string(),
        MatchPolicy::CaseInsensitive => value.to_lowercase(),
    }
}
