//! Tests for drift metrics.

use super::*;
use crate::data::DatasetRole;
use approx::assert_abs_diff_eq;

fn numeric(values: impl IntoIterator<Item = f64>) -> Sample {
    Sample::numerical("x", values)
}

fn categories(counts: &[(&str, usize)]) -> Sample {
    let labels = counts
        .iter()
        .flat_map(|&(label, n)| std::iter::repeat(label).take(n));
    Sample::categorical("color", labels)
}

// -------------------------------------------------------------------------
// MetricKind / DecisionMode
// -------------------------------------------------------------------------

#[test]
fn test_metric_kind_names_round_trip() {
    for kind in MetricKind::all() {
        assert_eq!(kind.name().parse::<MetricKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!("wasserstein".parse::<MetricKind>().is_err());
}

#[test]
fn test_metric_kind_feature_types() {
    assert_eq!(MetricKind::Psi.feature_type(), FeatureType::Numerical);
    assert_eq!(MetricKind::Ks.feature_type(), FeatureType::Numerical);
    assert_eq!(MetricKind::ChiSquare.feature_type(), FeatureType::Categorical);
}

#[test]
fn test_metric_kind_serde() {
    let kind: MetricKind = serde_json::from_str(r#""chi_square""#).unwrap();
    assert_eq!(kind, MetricKind::ChiSquare);
    assert_eq!(serde_json::to_string(&MetricKind::Ks).unwrap(), r#""ks""#);
}

#[test]
fn test_decision_modes_are_fixed_per_metric() {
    assert_eq!(Psi::default().decision_mode(), DecisionMode::Statistic);
    assert_eq!(ChiSquare::default().decision_mode(), DecisionMode::PValue);
    assert_eq!(KolmogorovSmirnov::default().decision_mode(), DecisionMode::PValue);
    assert_eq!(
        KolmogorovSmirnov::new(DecisionMode::Statistic).decision_mode(),
        DecisionMode::Statistic
    );
}

#[test]
fn test_metrics_as_trait_objects() {
    let metrics: Vec<Box<dyn DriftMetric>> = vec![
        Box::new(Psi::default()),
        Box::new(KolmogorovSmirnov::default()),
        Box::new(ChiSquare::default()),
    ];
    let kinds: Vec<_> = metrics.iter().map(|m| m.kind()).collect();
    assert_eq!(kinds, MetricKind::all().to_vec());
}

// -------------------------------------------------------------------------
// PSI
// -------------------------------------------------------------------------

#[test]
fn test_psi_identical_is_zero() {
    let r = numeric((0..100).map(f64::from));
    let result = Psi::default().compute(&r, &r).unwrap();
    assert_eq!(result.metric, MetricKind::Psi);
    assert_eq!(result.statistic, 0.0);
    assert!(result.p_value.is_none());
}

#[test]
fn test_psi_shifted_distribution() {
    let r = numeric((0..100).map(f64::from));
    let c = numeric((50..150).map(f64::from));
    let result = Psi::default().compute(&r, &c).unwrap();
    // Five emptied bins contribute (1e-4 - 0.1) * ln(1e-3) each, the tail bin 0.5 * ln 6.
    let expected = 5.0 * (PSI_EPSILON - 0.1) * (PSI_EPSILON / 0.1).ln() + 0.5 * 6.0f64.ln();
    assert_abs_diff_eq!(result.statistic, expected, epsilon = 1e-9);
}

#[test]
fn test_psi_equal_width_edges() {
    let edges = Psi::new(4, Binning::EqualWidth).inner_edges(&[0.0, 8.0, 4.0]);
    assert_eq!(edges, vec![2.0, 4.0, 6.0]);
}

#[test]
fn test_psi_quantile_edges() {
    let reference: Vec<f64> = (0..10).map(f64::from).collect();
    let edges = Psi::new(5, Binning::Quantile).inner_edges(&reference);
    assert_eq!(edges, vec![2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn test_psi_quantile_identical_is_zero() {
    let r = numeric((0..57).map(|i| f64::from(i * i % 13)));
    let result = Psi::new(10, Binning::Quantile).compute(&r, &r).unwrap();
    assert_eq!(result.statistic, 0.0);
}

#[test]
fn test_psi_bins_kept_as_given() {
    assert_eq!(Psi::new(1, Binning::EqualWidth).bins(), 1);
    assert!(Psi::new(1, Binning::EqualWidth).inner_edges(&[0.0, 8.0]).is_empty());
    assert_eq!(Psi::new(7, Binning::Quantile).bins(), 7);
    assert_eq!(Psi::default().binning(), Binning::EqualWidth);
}

#[test]
fn test_psi_constant_reference() {
    let r = numeric([5.0; 20]);
    assert_eq!(Psi::default().compute(&r, &r).unwrap().statistic, 0.0);

    let below = numeric([1.0; 20]);
    assert!(Psi::default().compute(&r, &below).unwrap().statistic > 1.0);
}

#[test]
fn test_psi_rejects_categorical() {
    let r = Sample::categorical("x", ["a"]);
    let err = Psi::default().compute(&r, &r).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: FeatureType::Numerical, .. }));
}

#[test]
fn test_psi_rejects_empty_current() {
    let r = numeric([1.0, 2.0]);
    let c = numeric([f64::NAN]);
    let err = Psi::default().compute(&r, &c).unwrap_err();
    assert!(matches!(err, Error::EmptySample { role: DatasetRole::Current, .. }));
}

// -------------------------------------------------------------------------
// KS
// -------------------------------------------------------------------------

#[test]
fn test_ks_identical() {
    let r = numeric((0..100).map(f64::from));
    let result = KolmogorovSmirnov::default().compute(&r, &r).unwrap();
    assert_eq!(result.statistic, 0.0);
    assert_eq!(result.p_value, Some(1.0));
}

#[test]
fn test_ks_shifted() {
    let r = numeric((0..100).map(f64::from));
    let c = numeric((50..150).map(f64::from));
    let result = KolmogorovSmirnov::default().compute(&r, &c).unwrap();
    assert_abs_diff_eq!(result.statistic, 0.5, epsilon = 1e-12);
    assert!(result.p_value.unwrap() < 1e-6);
}

#[test]
fn test_ks_symmetric() {
    let r = numeric([0.3, 1.7, 2.2, 2.2, 5.0, 9.1]);
    let c = numeric([1.0, 2.2, 3.3, 4.4]);
    let ks = KolmogorovSmirnov::default();
    let forward = ks.compute(&r, &c).unwrap();
    let backward = ks.compute(&c, &r).unwrap();
    assert_eq!(forward.statistic, backward.statistic);
    assert_eq!(forward.p_value, backward.p_value);
}

#[test]
fn test_ks_order_independent() {
    let a = numeric([3.0, 1.0, 2.0, 8.0]);
    let b = numeric([8.0, 2.0, 1.0, 3.0]);
    let c = numeric([4.0, 5.0, 6.0]);
    let ks = KolmogorovSmirnov::default();
    assert_eq!(ks.compute(&a, &c).unwrap(), ks.compute(&b, &c).unwrap());
}

#[test]
fn test_ks_rejects_empty_reference() {
    let r = numeric(Vec::new());
    let c = numeric([1.0]);
    let err = KolmogorovSmirnov::default().compute(&r, &c).unwrap_err();
    assert!(matches!(err, Error::EmptySample { role: DatasetRole::Reference, .. }));
}

// -------------------------------------------------------------------------
// Chi-square
// -------------------------------------------------------------------------

#[test]
fn test_chi_square_identical() {
    let s = categories(&[("a", 30), ("b", 30), ("c", 30)]);
    let result = ChiSquare::default().compute(&s, &s).unwrap();
    assert_eq!(result.metric, MetricKind::ChiSquare);
    assert_abs_diff_eq!(result.statistic, 0.0);
    assert_eq!(result.p_value, Some(1.0));
}

#[test]
fn test_chi_square_two_categories_with_yates() {
    let r = categories(&[("a", 50), ("b", 50)]);
    let c = categories(&[("a", 80), ("b", 20)]);
    let result = ChiSquare::default().compute(&r, &c).unwrap();
    // |o - e| = 15 in every cell, corrected to 14.5
    let expected = 14.5f64.powi(2) * (2.0 / 65.0 + 2.0 / 35.0);
    assert_abs_diff_eq!(result.statistic, expected, epsilon = 1e-9);
    assert!(result.p_value.unwrap() < 1e-3);
}

#[test]
fn test_chi_square_category_only_in_current() {
    let r = categories(&[("a", 20), ("b", 20)]);
    let c = categories(&[("a", 20), ("b", 10), ("c", 10)]);
    let result = ChiSquare::default().compute(&r, &c).unwrap();
    assert!(result.statistic > 0.0);
    assert!(result.p_value.unwrap() < 0.05);
}

#[test]
fn test_chi_square_insufficient_expected_count() {
    let s = categories(&[("a", 10), ("b", 2)]);
    let err = ChiSquare::default().compute(&s, &s).unwrap_err();
    match err {
        Error::InsufficientData { feature, category, expected, minimum } => {
            assert_eq!(feature, "color");
            assert_eq!(category, "b");
            assert_abs_diff_eq!(expected, 2.0);
            assert_abs_diff_eq!(minimum, DEFAULT_MIN_EXPECTED_COUNT);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_chi_square_configurable_minimum() {
    let s = categories(&[("a", 10), ("b", 2)]);
    let metric = ChiSquare::new(1.0);
    assert_abs_diff_eq!(metric.min_expected_count(), 1.0);
    assert!(metric.compute(&s, &s).is_ok());
}

#[test]
fn test_chi_square_single_category() {
    let s = categories(&[("only", 12)]);
    let result = ChiSquare::default().compute(&s, &s).unwrap();
    assert_eq!(result.statistic, 0.0);
    assert_eq!(result.p_value, Some(1.0));
}

#[test]
fn test_chi_square_rejects_numerical() {
    let s = numeric([1.0, 2.0]);
    let err = ChiSquare::default().compute(&s, &s).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { expected: FeatureType::Categorical, .. }));
}
