//! Accessibility scoring: how easy the URL is to read, type and share.

use crate::models::{clamp_score, CategoryReport, UrlComponents};

/// Neutral readability; the category score moves by the distance from it.
const READABILITY_BASELINE: i32 = 50;

/// Scores the readability of a path on a 0..=100 scale centered on 50.
///
/// Long paths and underscores cost points, hyphen-separated words earn up to
/// 20, and a trailing number (usually an opaque ID) costs 10.
pub fn readability_score(path: &str) -> u8 {
    let mut score = READABILITY_BASELINE;

    let length = path.chars().count();
    if length > 100 {
        score -= 20;
    } else if length > 50 {
        score -= 10;
    }

    let hyphens = path.matches('-').count() as i32;
    score += (hyphens * 5).min(20);

    let underscores = path.matches('_').count() as i32;
    score -= underscores * 3;

    if path.ends_with(|c: char| c.is_ascii_digit()) {
        score -= 10;
    }

    clamp_score(score)
}

/// Returns `true` if the text contains a `%XX` escape.
fn has_percent_encoding(text: &str) -> bool {
    text.as_bytes()
        .windows(3)
        .any(|w| w[0] == b'%' && w[1].is_ascii_hexdigit() && w[2].is_ascii_hexdigit())
}

/// Scores a parsed URL.
///
/// Non-ASCII characters are looked for in `raw` because the parser encodes
/// them; percent escapes are looked for in the normalized href so that
/// characters the parser had to encode are counted too.
pub fn analyze_accessibility(components: &UrlComponents, raw: &str) -> CategoryReport {
    let mut score = 100;
    let mut issues = Vec::new();

    if !raw.is_ascii() {
        score -= 10;
        issues.push("Non-ASCII characters present".to_string());
    }

    if has_percent_encoding(&components.href) {
        score -= 5;
        issues.push("URL-encoded characters present".to_string());
    }

    score += i32::from(readability_score(&components.path)) - READABILITY_BASELINE;

    CategoryReport::from_raw(score, issues, Vec::new())
}
