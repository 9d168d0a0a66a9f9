//! Threshold configuration schema.
//!
//! Mirrors the on-disk format:
//!
//! ```yaml
//! metrics:
//!   psi:
//!     default_threshold: 0.1
//!     feature_thresholds:
//!       age: 0.15
//!   ks:
//!     default_threshold: 0.05
//!     mode: p_value
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metrics::{
    Binning, ChiSquare, DecisionMode, DriftMetric, KolmogorovSmirnov, MetricKind, Psi,
    DEFAULT_MIN_EXPECTED_COUNT, DEFAULT_PSI_BINS,
};

/// Layered drift thresholds, keyed by metric.
///
/// Read-only once loaded; every stage borrows it immutably.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    #[serde(default)]
    pub metrics: BTreeMap<MetricKind, MetricConfig>,
}

/// Thresholds and tuning for a single metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    /// Threshold used when no per-feature override exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_threshold: Option<f64>,

    /// Per-feature threshold overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_thresholds: BTreeMap<String, f64>,

    /// Stricter cutoff separating warning from critical (KS, chi-square)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_threshold: Option<f64>,

    /// Per-feature critical cutoff overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub feature_critical_thresholds: BTreeMap<String, f64>,

    /// Decision mode (KS only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<DecisionMode>,

    /// Number of bins (PSI only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bins: Option<usize>,

    /// Bin boundary strategy (PSI only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binning: Option<Binning>,

    /// Minimum expected cell count (chi-square only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_expected_count: Option<f64>,
}

impl ThresholdConfig {
    /// Empty configuration; every resolution fails until thresholds are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commonly used defaults: PSI 0.1, KS p < 0.05, chi-square p < 0.05.
    pub fn recommended() -> Self {
        Self::new()
            .with_default_threshold(MetricKind::Psi, 0.1)
            .with_default_threshold(MetricKind::Ks, 0.05)
            .with_default_threshold(MetricKind::ChiSquare, 0.05)
    }

    /// Set the default threshold for a metric
    pub fn with_default_threshold(mut self, metric: MetricKind, threshold: f64) -> Self {
        self.entry(metric).default_threshold = Some(threshold);
        self
    }

    /// Override the threshold for one feature
    pub fn with_feature_threshold(
        mut self,
        metric: MetricKind,
        feature: impl Into<String>,
        threshold: f64,
    ) -> Self {
        self.entry(metric).feature_thresholds.insert(feature.into(), threshold);
        self
    }

    /// Set the stricter severity cutoff for a metric
    pub fn with_critical_threshold(mut self, metric: MetricKind, threshold: f64) -> Self {
        self.entry(metric).critical_threshold = Some(threshold);
        self
    }

    /// Override the severity cutoff for one feature
    pub fn with_feature_critical_threshold(
        mut self,
        metric: MetricKind,
        feature: impl Into<String>,
        threshold: f64,
    ) -> Self {
        self.entry(metric).feature_critical_thresholds.insert(feature.into(), threshold);
        self
    }

    /// Select KS statistic or p-value decisions
    pub fn with_ks_mode(mut self, mode: DecisionMode) -> Self {
        self.entry(MetricKind::Ks).mode = Some(mode);
        self
    }

    /// Configure PSI binning
    pub fn with_psi_binning(mut self, bins: usize, binning: Binning) -> Self {
        let entry = self.entry(MetricKind::Psi);
        entry.bins = Some(bins);
        entry.binning = Some(binning);
        self
    }

    /// Configure the chi-square validity minimum
    pub fn with_min_expected_count(mut self, count: f64) -> Self {
        self.entry(MetricKind::ChiSquare).min_expected_count = Some(count);
        self
    }

    /// Settings for a metric, if configured
    pub fn metric_config(&self, metric: MetricKind) -> Option<&MetricConfig> {
        self.metrics.get(&metric)
    }

    /// Decision mode the detector applies to `metric`
    pub fn decision_mode(&self, metric: MetricKind) -> DecisionMode {
        match metric {
            MetricKind::Psi => DecisionMode::Statistic,
            MetricKind::ChiSquare => DecisionMode::PValue,
            MetricKind::Ks => self
                .metric_config(metric)
                .and_then(|c| c.mode)
                .unwrap_or_default(),
        }
    }

    /// Instantiate the metric calculator with its configured tuning
    pub fn build_metric(&self, metric: MetricKind) -> Box<dyn DriftMetric> {
        let settings = self.metric_config(metric);
        match metric {
            MetricKind::Psi => Box::new(Psi::new(
                settings.and_then(|c| c.bins).unwrap_or(DEFAULT_PSI_BINS),
                settings.and_then(|c| c.binning).unwrap_or_default(),
            )),
            MetricKind::Ks => Box::new(KolmogorovSmirnov::new(self.decision_mode(metric))),
            MetricKind::ChiSquare => Box::new(ChiSquare::new(
                settings
                    .and_then(|c| c.min_expected_count)
                    .unwrap_or(DEFAULT_MIN_EXPECTED_COUNT),
            )),
        }
    }

    fn entry(&mut self, metric: MetricKind) -> &mut MetricConfig {
        self.metrics.entry(metric).or_default()
    }
}
