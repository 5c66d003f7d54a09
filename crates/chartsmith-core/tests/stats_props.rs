// File: crates/chartsmith-core/tests/stats_props.rs
// Purpose: Property checks over the statistics engine.

use chartsmith_core::stats::{five_number_summary, moving_average, outliers};
use proptest::prelude::*;

proptest! {
    #[test]
    fn summary_is_ordered(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let s = five_number_summary(&values);
        prop_assert!(s.min <= s.q1);
        prop_assert!(s.q1 <= s.median);
        prop_assert!(s.median <= s.q3);
        prop_assert!(s.q3 <= s.max);
    }

    #[test]
    fn outliers_are_exactly_the_fenced_out(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let s = five_number_summary(&values);
        let lo = s.q1 - 1.5 * s.iqr();
        let hi = s.q3 + 1.5 * s.iqr();
        let out = outliers(&values);
        let expected: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| *v < lo || *v > hi)
            .collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn moving_average_is_index_aligned(
        values in prop::collection::vec(-1e3f64..1e3, 0..100),
        window in 0usize..20,
    ) {
        let out = moving_average(&values, window);
        prop_assert_eq!(out.len(), values.len());
        let w = window.max(1);
        for (i, v) in out.iter().enumerate() {
            if i + 1 < w {
                prop_assert!(v.is_nan());
            } else {
                prop_assert!(v.is_finite());
            }
        }
    }
}
