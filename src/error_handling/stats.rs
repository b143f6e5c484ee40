//! Processing statistics tracking.
//!
//! This module provides thread-safe counters for bulk runs: how many inputs
//! were valid, invalid or blocked, and how many issues each category raised.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::OutcomeType;
use crate::models::Category;

/// Thread-safe processing statistics tracker.
///
/// All outcome and category counters are initialized to zero on creation, so
/// the struct can be shared across tasks behind an `Arc`.
pub struct ProcessingStats {
    outcomes: HashMap<OutcomeType, AtomicUsize>,
    issues: HashMap<Category, AtomicUsize>,
}

impl ProcessingStats {
    pub fn new() -> Self {
        let mut outcomes = HashMap::new();
        for outcome in OutcomeType::iter() {
            outcomes.insert(outcome, AtomicUsize::new(0));
        }

        let mut issues = HashMap::new();
        for category in Category::iter() {
            issues.insert(category, AtomicUsize::new(0));
        }

        ProcessingStats { outcomes, issues }
    }

    /// Increment an outcome counter.
    pub fn increment_outcome(&self, outcome: OutcomeType) {
        if let Some(counter) = self.outcomes.get(&outcome) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment outcome counter for {:?} which is not in the map.",
                outcome
            );
        }
    }

    /// Add `count` issues to a category counter.
    pub fn add_issues(&self, category: Category, count: usize) {
        if let Some(counter) = self.issues.get(&category) {
            counter.fetch_add(count, Ordering::Relaxed);
        }
    }

    pub fn get_outcome_count(&self, outcome: OutcomeType) -> usize {
        self.outcomes
            .get(&outcome)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub fn get_issue_count(&self, category: Category) -> usize {
        self.issues
            .get(&category)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Total number of inputs processed (every input has exactly one outcome).
    pub fn total_processed(&self) -> usize {
        OutcomeType::iter()
            .map(|o| self.get_outcome_count(o))
            .sum()
    }

    pub fn total_issues(&self) -> usize {
        Category::iter().map(|c| self.get_issue_count(c)).sum()
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}
