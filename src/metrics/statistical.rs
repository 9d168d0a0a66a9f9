//! Statistical helper functions for drift metrics.

use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Copy and sort values ascending
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}

/// Index of the half-open bin `[lo, hi)` holding `value`.
///
/// `inner_edges` are the interior boundaries; the outermost bins extend to ±∞,
/// so every finite value lands in one of `inner_edges.len() + 1` bins.
pub fn bin_index(value: f64, inner_edges: &[f64]) -> usize {
    inner_edges.partition_point(|&edge| edge <= value)
}

/// Count samples per bin
pub fn bin_counts(data: &[f64], inner_edges: &[f64]) -> Vec<usize> {
    let mut counts = vec![0; inner_edges.len() + 1];
    for &val in data {
        counts[bin_index(val, inner_edges)] += 1;
    }
    counts
}

/// Two-sample Kolmogorov-Smirnov statistic over pre-sorted samples.
///
/// Tied values advance both empirical CDFs together, so the result does not
/// depend on argument order.
pub fn ks_statistic(sorted_a: &[f64], sorted_b: &[f64]) -> f64 {
    let n1 = sorted_a.len() as f64;
    let n2 = sorted_b.len() as f64;

    let mut d_max = 0.0f64;
    let mut i = 0usize;
    let mut j = 0usize;

    while i < sorted_a.len() && j < sorted_b.len() {
        let x = sorted_a[i].min(sorted_b[j]);
        while i < sorted_a.len() && sorted_a[i] <= x {
            i += 1;
        }
        while j < sorted_b.len() && sorted_b[j] <= x {
            j += 1;
        }
        let diff = (i as f64 / n1 - j as f64 / n2).abs();
        d_max = d_max.max(diff);
    }

    d_max
}

/// Approximate p-value for KS statistic using Kolmogorov distribution
pub fn ks_p_value(lambda: f64) -> f64 {
    // Q_KS(0.2) differs from 1 by less than 1e-10 and the series below
    // converges too slowly to be trusted there.
    if lambda < 0.2 {
        return 1.0;
    }
    // Asymptotic approximation: P(D > d) ≈ 2 * sum_{k=1}^∞ (-1)^{k+1} * exp(-2 * k^2 * λ^2)
    let mut p = 0.0;
    for k in 1..=100 {
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        let term = sign * (-2.0 * f64::from(k).powi(2) * lambda.powi(2)).exp();
        p += term;
        if term.abs() < 1e-12 {
            break;
        }
    }
    (2.0 * p).clamp(0.0, 1.0)
}

/// KS p-value for sample sizes `n1` and `n2` with Stephens' effective-size correction
pub fn ks_two_sample_p_value(d: f64, n1: usize, n2: usize) -> f64 {
    let (n1, n2) = (n1 as f64, n2 as f64);
    let en = ((n1 * n2) / (n1 + n2)).sqrt();
    ks_p_value((en + 0.12 + 0.11 / en) * d)
}

/// Upper-tail chi-square probability
pub fn chi_square_p_value(chi_sq: f64, df: usize) -> f64 {
    if df == 0 || chi_sq <= 0.0 {
        return 1.0;
    }
    ChiSquared::new(df as f64)
        .map(|dist| dist.sf(chi_sq))
        .unwrap_or(1.0)
        .clamp(0.0, 1.0)
}
