//! End-of-run statistics.

use std::time::Duration;

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{OutcomeType, ProcessingStats};
use crate::models::Category;

/// Logs outcome counts and per-category issue counts.
pub fn print_processing_statistics(stats: &ProcessingStats) {
    let total = stats.total_processed();
    info!("Outcome Counts ({} total):", total);
    for outcome in OutcomeType::iter() {
        let count = stats.get_outcome_count(outcome);
        if count > 0 {
            info!("   {}: {}", outcome.as_str(), count);
        }
    }

    let total_issues = stats.total_issues();
    if total_issues > 0 {
        info!("Issue Counts ({} total):", total_issues);
        for category in Category::iter() {
            let count = stats.get_issue_count(category);
            if count > 0 {
                info!("   {}: {}", category.as_str(), count);
            }
        }
    }
}

/// Logs a one-line summary with the elapsed time and mean time per URL.
pub fn print_timing_statistics(stats: &ProcessingStats, elapsed: Duration) {
    let total = stats.total_processed();
    let per_url_ms = if total > 0 {
        elapsed.as_secs_f64() * 1000.0 / total as f64
    } else {
        0.0
    };
    info!(
        "✅ Analyzed {} URL{} ({} valid, {} invalid, {} blocked) in {:.3}s ({:.3}ms per URL)",
        total,
        if total == 1 { "" } else { "s" },
        stats.get_outcome_count(OutcomeType::Valid),
        stats.get_outcome_count(OutcomeType::Invalid),
        stats.get_outcome_count(OutcomeType::Blocked),
        elapsed.as_secs_f64(),
        per_url_ms
    );
}
