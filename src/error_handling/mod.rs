//! Error handling and processing statistics.
//!
//! This module provides:
//! - Error type definitions (parse, configuration, initialization)
//! - Outcome kinds for bulk runs
//! - Processing statistics tracking

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{ConfigValidationError, InitializationError, OutcomeType, ParseError};
