// File: crates/chartsmith-core/src/stats.rs
// Summary: Derived-statistics engine: five-number summary, IQR outliers,
//          trailing moving average, dimension encoding.
// Notes:
// - Non-finite inputs are ignored rather than propagated; every function is
//   total over arbitrary f64 slices.

use crate::document::{DimValue, DimensionSpec, DomainKind};

/// Min/quartile/median spread of a distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    /// [min, q1, median, q3, max] in renderer order.
    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Five-number summary over `values`. Quartiles use lower-index selection
/// (`sorted[floor(n*q)]`), not linear interpolation. Empty or all-non-finite
/// input yields the all-zero summary.
pub fn five_number_summary(values: &[f64]) -> FiveNumberSummary {
    let mut v: Vec<f64> = values.iter().copied().filter(|x| x.is_finite()).collect();
    let n = v.len();
    if n == 0 {
        return FiveNumberSummary::default();
    }
    // All entries are finite, so the comparison is total.
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let q1 = v[(n as f64 * 0.25).floor() as usize];
    let q3 = v[(n as f64 * 0.75).floor() as usize];
    let median = if n % 2 == 1 {
        v[n / 2]
    } else {
        (v[n / 2 - 1] + v[n / 2]) / 2.0
    };
    FiveNumberSummary {
        min: v[0],
        q1,
        median,
        q3,
        max: v[n - 1],
    }
}

/// Values strictly outside the Tukey fence `[q1 - 1.5*iqr, q3 + 1.5*iqr]`,
/// in original order with duplicates kept.
pub fn outliers(values: &[f64]) -> Vec<f64> {
    let s = five_number_summary(values);
    let fence_lo = s.q1 - 1.5 * s.iqr();
    let fence_hi = s.q3 + 1.5 * s.iqr();
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite() && (*v < fence_lo || *v > fence_hi))
        .collect()
}

/// Trailing moving average with a NaN warm-up sentinel: output `i` is NaN for
/// `i < window-1`, otherwise the mean of the finite entries among the last
/// `window` inputs ending at `i`. A window of 0 is treated as 1 so the output
/// stays index-aligned with the input.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    let w = window.max(1);
    let mut out = Vec::with_capacity(values.len());
    for i in 0..values.len() {
        if i + 1 < w {
            out.push(f64::NAN);
            continue;
        }
        let mut sum = 0.0;
        let mut count = 0usize;
        for &v in &values[i + 1 - w..=i] {
            if v.is_finite() {
                sum += v;
                count += 1;
            }
        }
        out.push(if count == 0 { f64::NAN } else { sum / count as f64 });
    }
    out
}

/// Numeric encoding of a record cell against its dimension.
///
/// Numeric domains pass numbers through; a label under a numeric domain is
/// parsed, falling back to the domain minimum. Categorical domains encode a
/// label as its index in the category list (first match), with 0 as the
/// documented fallback for absent labels; a number is accepted as an index
/// when it is already in range.
pub fn encode_dimension(value: &DimValue, spec: &DimensionSpec) -> f64 {
    match (&spec.domain, value) {
        (DomainKind::Numeric { .. }, DimValue::Number(n)) => *n,
        (DomainKind::Numeric { min, .. }, DimValue::Label(s)) => {
            s.trim().parse::<f64>().unwrap_or(*min)
        }
        (DomainKind::Categorical(cats), DimValue::Label(s)) => {
            cats.iter().position(|c| c == s).unwrap_or(0) as f64
        }
        (DomainKind::Categorical(cats), DimValue::Number(n)) => {
            if n.is_finite() && *n >= 0.0 && (*n as usize) < cats.len() {
                n.floor()
            } else {
                0.0
            }
        }
    }
}
