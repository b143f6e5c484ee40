//! Process-wide setup for the binary.
//!
//! Only the logger lives here; everything the scorer needs is owned by an
//! `Analyzer` and built on demand.

mod logger;

// Re-export public API
pub use logger::init_logger_with;
