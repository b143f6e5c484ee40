//! Weighted overall score.

use strum::IntoEnumIterator;

use crate::config::Weights;
use crate::models::{Category, CategoryReports};

/// Combines the category scores into an overall score in 0..=100.
///
/// Weights are integer percentages, so the weighted sum is exact; the result
/// is rounded half up. Weights need not be validated: any `u32` values are
/// accepted without overflow.
pub fn calculate_overall_score(reports: &CategoryReports, weights: &Weights) -> u8 {
    let total_weight = weights.total();
    if total_weight == 0 {
        return 0;
    }
    // u8 * u32 summed five times always fits in u64
    let weighted: u64 = Category::iter()
        .map(|c| u64::from(reports.get(c).score) * u64::from(weights.for_category(c)))
        .sum();
    let rounded = (weighted + total_weight / 2) / total_weight;
    // Weighted mean of values <= 100 stays <= 100.
    rounded.min(100) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryReport, PerformanceReport};

    fn reports(scores: [u8; 5]) -> CategoryReports {
        let r = |score| CategoryReport {
            score,
            ..Default::default()
        };
        CategoryReports {
            security: r(scores[0]),
            performance: PerformanceReport {
                report: r(scores[1]),
                metrics: Default::default(),
            },
            seo: r(scores[2]),
            accessibility: r(scores[3]),
            best_practices: r(scores[4]),
        }
    }

    #[test]
    fn test_overall_score_perfect_url() {
        // 95*.30 + 100*.25 + 100*.20 + 100*.15 + 100*.10 = 98.5, rounded up
        let score = calculate_overall_score(&reports([95, 100, 100, 100, 100]), &Weights::default());
        assert_eq!(score, 99);
    }

    #[test]
    fn test_overall_score_bounds() {
        assert_eq!(
            calculate_overall_score(&reports([0, 0, 0, 0, 0]), &Weights::default()),
            0
        );
        assert_eq!(
            calculate_overall_score(&reports([100, 100, 100, 100, 100]), &Weights::default()),
            100
        );
    }

    #[test]
    fn test_overall_score_weighting() {
        // Only security counts: 30% of 100
        assert_eq!(
            calculate_overall_score(&reports([100, 0, 0, 0, 0]), &Weights::default()),
            30
        );
        // Only best practices counts: 10% of 100
        assert_eq!(
            calculate_overall_score(&reports([0, 0, 0, 0, 100]), &Weights::default()),
            10
        );
    }

    #[test]
    fn test_overall_score_rounding() {
        // 65*.30 + 100*.25 + 100*.20 + 100*.15 + 100*.10 = 89.5 -> 90
        assert_eq!(
            calculate_overall_score(&reports([65, 100, 100, 100, 100]), &Weights::default()),
            90
        );
        // 64*.30 + 100*.70 = 89.2 -> 89
        assert_eq!(
            calculate_overall_score(&reports([64, 100, 100, 100, 100]), &Weights::default()),
            89
        );
    }

    #[test]
    fn test_overall_score_extreme_weights() {
        let weights = Weights {
            security: u32::MAX,
            performance: u32::MAX,
            seo: u32::MAX,
            accessibility: u32::MAX,
            best_practices: u32::MAX,
        };
        assert_eq!(
            calculate_overall_score(&reports([100, 100, 100, 100, 100]), &weights),
            100
        );
        assert_eq!(
            calculate_overall_score(&reports([80, 80, 80, 80, 80]), &weights),
            80
        );
    }

    #[test]
    fn test_overall_score_custom_weights() {
        let weights = Weights {
            security: 100,
            performance: 0,
            seo: 0,
            accessibility: 0,
            best_practices: 0,
        };
        assert_eq!(
            calculate_overall_score(&reports([42, 100, 100, 100, 100]), &weights),
            42
        );
    }
}
