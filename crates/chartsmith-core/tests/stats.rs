// File: crates/chartsmith-core/tests/stats.rs
// Purpose: Validate the statistics engine against worked examples and edges.

use chartsmith_core::document::{DimValue, DimensionSpec};
use chartsmith_core::stats::{encode_dimension, five_number_summary, moving_average, outliers};

#[test]
fn five_number_summary_even_length() {
    // sorted: [60, 70, 75, 85, 88, 90], n = 6
    let s = five_number_summary(&[85.0, 70.0, 90.0, 60.0, 75.0, 88.0]);
    assert_eq!(s.min, 60.0);
    assert_eq!(s.q1, 70.0);
    assert_eq!(s.median, 80.0); // avg(75, 85)
    assert_eq!(s.q3, 88.0);
    assert_eq!(s.max, 90.0);
}

#[test]
fn five_number_summary_odd_length() {
    let s = five_number_summary(&[5.0, 1.0, 3.0, 2.0, 4.0]);
    assert_eq!(s.min, 1.0);
    assert_eq!(s.median, 3.0);
    assert_eq!(s.max, 5.0);
}

#[test]
fn five_number_summary_empty_is_zero() {
    let s = five_number_summary(&[]);
    assert_eq!(s.as_array(), [0.0; 5]);
}

#[test]
fn five_number_summary_ignores_non_finite() {
    let with_noise = five_number_summary(&[1.0, f64::NAN, 2.0, f64::INFINITY, 3.0]);
    let clean = five_number_summary(&[1.0, 2.0, 3.0]);
    assert_eq!(with_noise, clean);
}

#[test]
fn outliers_within_fence_is_empty() {
    // iqr = 18, fence [43, 115]: nothing escapes.
    let out = outliers(&[85.0, 70.0, 90.0, 60.0, 75.0, 88.0]);
    assert!(out.is_empty());
}

#[test]
fn outliers_keep_order_and_duplicates() {
    let values = [200.0, 10.0, 11.0, 12.0, 10.0, 11.0, 13.0, 200.0];
    let out = outliers(&values);
    assert_eq!(out, vec![200.0, 200.0]);
}

#[test]
fn moving_average_warm_up_is_nan() {
    let out = moving_average(&[1.0, 2.0, 3.0, 4.0], 3);
    assert!(out[0].is_nan());
    assert!(out[1].is_nan());
    assert_eq!(out[2], 2.0);
    assert_eq!(out[3], 3.0);
}

#[test]
fn moving_average_sentinel_differs_from_zero() {
    let out = moving_average(&[0.0, 0.0, 0.0], 2);
    assert!(out[0].is_nan());
    assert_eq!(out[1], 0.0);
    assert_eq!(out[2], 0.0);
}

#[test]
fn moving_average_window_zero_clamped() {
    let out = moving_average(&[4.0, 6.0], 0);
    assert_eq!(out, vec![4.0, 6.0]);
}

#[test]
fn encode_numeric_passes_through() {
    let dim = DimensionSpec::numeric("load", 0.0, 100.0);
    assert_eq!(encode_dimension(&DimValue::Number(42.5), &dim), 42.5);
}

#[test]
fn encode_categorical_indexes_first_match() {
    let dim = DimensionSpec::categorical(
        "region",
        vec!["north".into(), "south".into(), "south".into(), "east".into()],
    );
    assert_eq!(encode_dimension(&DimValue::Label("south".into()), &dim), 1.0);
    assert_eq!(encode_dimension(&DimValue::Label("east".into()), &dim), 3.0);
    // Absent labels fall back to 0, by contract.
    assert_eq!(encode_dimension(&DimValue::Label("west".into()), &dim), 0.0);
}
