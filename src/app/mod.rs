//! Presentation shell for the binary.
//!
//! This module provides input reading, report rendering, the interactive
//! debouncer, the simulated latency and the end-of-run statistics. None of it
//! is needed to score a URL.

pub mod debounce;
pub mod delay;
pub mod input;
pub mod logging;
pub mod report;
pub mod statistics;

// Re-export public API
pub use debounce::Debouncer;
pub use delay::{simulate_latency, DEFAULT_DELAY_RANGE};
pub use input::{read_source, split_lines};
pub use logging::log_progress;
pub use report::{render_json, render_text, ReportEntry};
pub use statistics::{print_processing_statistics, print_timing_statistics};
