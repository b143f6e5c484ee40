//! Per-category URL analyzers.
//!
//! Each analyzer is a pure function of an already-parsed URL (plus the raw
//! input where the parser would hide what is being looked for) and cannot fail.
//! Security lives in its own module next to its pattern tables.

mod accessibility;
mod best_practices;
mod performance;
mod seo;

// Re-export public API
pub use accessibility::{analyze_accessibility, readability_score};
pub use best_practices::analyze_best_practices;
pub use performance::{analyze_performance, measure};
pub use seo::analyze_seo;
