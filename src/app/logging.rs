//! Progress logging for bulk runs.

use log::info;
use std::time::Instant;

/// Logs how many URLs have been analyzed so far and the current rate.
pub fn log_progress(start_time: Instant, completed: usize, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Analyzed {}/{} URLs in {:.2} seconds (~{:.1} URLs/sec)",
        completed, total, elapsed_secs, rate
    );
}
