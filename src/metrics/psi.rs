//! Population Stability Index.

use serde::{Deserialize, Serialize};

use super::statistical::{bin_counts, sorted};
use super::{numerical_pair, DecisionMode, DriftMetric, MetricKind, MetricResult};
use crate::data::Sample;
use crate::error::Result;

/// Floor applied to any bin proportion before the ratio and logarithm.
pub const PSI_EPSILON: f64 = 1e-4;

/// Default number of bins
pub const DEFAULT_PSI_BINS: usize = 10;

/// How bin boundaries are derived from the reference sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binning {
    /// Equal-width bins spanning the reference `[min, max]`
    #[default]
    EqualWidth,
    /// Reference quantiles (deciles for the default 10 bins)
    Quantile,
}

/// PSI over reference-derived bins; the outer bins extend to ±∞.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Psi {
    bins: usize,
    binning: Binning,
}

impl Default for Psi {
    fn default() -> Self {
        Self { bins: DEFAULT_PSI_BINS, binning: Binning::EqualWidth }
    }
}

impl Psi {
    /// Create a PSI metric.
    ///
    /// Fewer than two bins leaves a single bin and a PSI of zero;
    /// [`validate_config`](crate::config::validate_config) rejects such configs.
    pub fn new(bins: usize, binning: Binning) -> Self {
        Self { bins, binning }
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn binning(&self) -> Binning {
        self.binning
    }

    /// Interior bin boundaries derived from a non-empty reference sample.
    pub fn inner_edges(&self, reference: &[f64]) -> Vec<f64> {
        let sorted_reference = sorted(reference);
        let n = sorted_reference.len();
        match self.binning {
            Binning::EqualWidth => {
                let min = sorted_reference[0];
                let max = sorted_reference[n - 1];
                let width = (max - min) / self.bins as f64;
                (1..self.bins).map(|i| min + width * i as f64).collect()
            }
            Binning::Quantile => (1..self.bins)
                .map(|i| sorted_reference[(n * i / self.bins).min(n - 1)])
                .collect(),
        }
    }
}

/// Floored per-bin proportions
fn proportions(counts: &[usize], total: usize) -> Vec<f64> {
    let total = total as f64;
    counts
        .iter()
        .map(|&c| (c as f64 / total).max(PSI_EPSILON))
        .collect()
}

impl DriftMetric for Psi {
    fn kind(&self) -> MetricKind {
        MetricKind::Psi
    }

    fn decision_mode(&self) -> DecisionMode {
        DecisionMode::Statistic
    }

    fn compute(&self, reference: &Sample, current: &Sample) -> Result<MetricResult> {
        let (reference_values, current_values) = numerical_pair(MetricKind::Psi, reference, current)?;

        let edges = self.inner_edges(reference_values);
        let reference_pct =
            proportions(&bin_counts(reference_values, &edges), reference_values.len());
        let current_pct = proportions(&bin_counts(current_values, &edges), current_values.len());

        let psi: f64 = reference_pct
            .iter()
            .zip(&current_pct)
            .map(|(&r, &c)| (c - r) * (c / r).ln())
            .sum();

        tracing::debug!(feature = reference.feature(), bins = self.bins, psi, "computed PSI");

        Ok(MetricResult { metric: MetricKind::Psi, statistic: psi, p_value: None })
    }
}
