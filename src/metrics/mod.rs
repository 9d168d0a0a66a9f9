//! Drift metrics.
//!
//! Provides statistical measures of divergence between a reference and a
//! current sample of the same feature:
//! - Population Stability Index (numerical, statistic-driven)
//! - Kolmogorov-Smirnov test (numerical, p-value or statistic driven)
//! - Chi-square contingency test (categorical, p-value driven)
//!
//! Every metric is a pure [`DriftMetric`]: no shared state, no side effects,
//! identical output for identical input.

mod chi_square;
mod ks;
mod psi;
mod statistical;

#[cfg(test)]
mod tests;

pub use chi_square::{ChiSquare, DEFAULT_MIN_EXPECTED_COUNT};
pub use ks::KolmogorovSmirnov;
pub use psi::{Binning, Psi, DEFAULT_PSI_BINS, PSI_EPSILON};
pub use statistical::{
    bin_counts, bin_index, chi_square_p_value, ks_p_value, ks_statistic, ks_two_sample_p_value,
};

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::{DatasetRole, FeatureType, Sample};
use crate::error::{Error, Result};

/// Drift metric identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Population Stability Index
    Psi,
    /// Two-sample Kolmogorov-Smirnov test
    Ks,
    /// Chi-square contingency test
    ChiSquare,
}

impl MetricKind {
    /// Configuration key of this metric
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Psi => "psi",
            MetricKind::Ks => "ks",
            MetricKind::ChiSquare => "chi_square",
        }
    }

    /// Feature type the metric operates on
    pub fn feature_type(&self) -> FeatureType {
        match self {
            MetricKind::Psi | MetricKind::Ks => FeatureType::Numerical,
            MetricKind::ChiSquare => FeatureType::Categorical,
        }
    }

    /// All metrics, in configuration order
    pub fn all() -> [MetricKind; 3] {
        [MetricKind::Psi, MetricKind::Ks, MetricKind::ChiSquare]
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "psi" => Ok(MetricKind::Psi),
            "ks" => Ok(MetricKind::Ks),
            "chi_square" => Ok(MetricKind::ChiSquare),
            other => Err(Error::config(format!(
                "unknown metric '{other}' (must be one of: psi, ks, chi_square)"
            ))),
        }
    }
}

/// How a metric's output is compared against its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionMode {
    /// Drift iff `statistic >= threshold`
    Statistic,
    /// Drift iff `p_value < threshold`
    #[default]
    PValue,
}

impl fmt::Display for DecisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionMode::Statistic => write!(f, "statistic"),
            DecisionMode::PValue => write!(f, "p_value"),
        }
    }
}

/// Output of one metric evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricResult {
    pub metric: MetricKind,
    pub statistic: f64,
    /// `None` for PSI
    pub p_value: Option<f64>,
}

/// A drift statistic over two samples of one feature.
pub trait DriftMetric: Send + Sync {
    /// Which metric this is
    fn kind(&self) -> MetricKind;

    /// Fixed comparison rule for this metric's result
    fn decision_mode(&self) -> DecisionMode;

    /// Compute the statistic for `current` relative to `reference`
    fn compute(&self, reference: &Sample, current: &Sample) -> Result<MetricResult>;
}

/// Borrow both samples as numeric slices, rejecting empty or categorical input.
pub(crate) fn numerical_pair<'a>(
    metric: MetricKind,
    reference: &'a Sample,
    current: &'a Sample,
) -> Result<(&'a [f64], &'a [f64])> {
    let r = as_numerical(metric, reference)?;
    let c = as_numerical(metric, current)?;
    non_empty(reference, DatasetRole::Reference)?;
    non_empty(current, DatasetRole::Current)?;
    Ok((r, c))
}

/// Borrow both samples as category labels, rejecting empty or numeric input.
pub(crate) fn categorical_pair<'a>(
    metric: MetricKind,
    reference: &'a Sample,
    current: &'a Sample,
) -> Result<(&'a [String], &'a [String])> {
    let wrong_type = |sample: &Sample| Error::TypeMismatch {
        feature: sample.feature().to_string(),
        expected: FeatureType::Categorical,
        detail: format!("metric '{metric}' cannot be computed over numerical samples"),
    };
    let r = reference.as_categorical().ok_or_else(|| wrong_type(reference))?;
    let c = current.as_categorical().ok_or_else(|| wrong_type(current))?;
    non_empty(reference, DatasetRole::Reference)?;
    non_empty(current, DatasetRole::Current)?;
    Ok((r, c))
}

fn as_numerical(metric: MetricKind, sample: &Sample) -> Result<&[f64]> {
    sample.as_numerical().ok_or_else(|| Error::TypeMismatch {
        feature: sample.feature().to_string(),
        expected: FeatureType::Numerical,
        detail: format!("metric '{metric}' cannot be computed over categorical samples"),
    })
}

fn non_empty(sample: &Sample, role: DatasetRole) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::EmptySample { feature: sample.feature().to_string(), role });
    }
    Ok(())
}
