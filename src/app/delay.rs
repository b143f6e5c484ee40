//! Simulated network latency.
//!
//! The scorer never performs I/O. The interactive shell can still pause
//! before showing a result so the output pacing resembles a remote check.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

use crate::config::{SIMULATED_DELAY_MAX_MS, SIMULATED_DELAY_MIN_MS};

/// Default delay range in milliseconds.
pub const DEFAULT_DELAY_RANGE: RangeInclusive<u64> = SIMULATED_DELAY_MIN_MS..=SIMULATED_DELAY_MAX_MS;

/// Sleeps for a random number of milliseconds drawn from `range_ms`.
///
/// Returns `false` if `cancel` fired before the delay elapsed, `true` otherwise.
pub async fn simulate_latency(range_ms: RangeInclusive<u64>, cancel: &CancellationToken) -> bool {
    let millis = if range_ms.is_empty() {
        *range_ms.start()
    } else {
        rand::rng().random_range(range_ms)
    };
    log::trace!("Simulating {}ms of latency", millis);

    tokio::select! {
        _ = cancel.cancelled() => false,
        _ = tokio::time::sleep(Duration::from_millis(millis)) => true,
    }
}
