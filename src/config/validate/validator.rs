//! Configuration validation logic
//!
//! Validates threshold configuration for correctness before any metric runs.

use crate::config::schema::{MetricConfig, ThresholdConfig};
use crate::error::{Error, Result};
use crate::metrics::MetricKind;

/// Validate a threshold configuration
///
/// Checks:
/// - Every threshold and critical cutoff is finite and > 0
/// - Metric-specific tuning only appears under the metric it belongs to
/// - PSI uses at least two bins
/// - The chi-square minimum expected count is finite and non-negative
pub fn validate_config(config: &ThresholdConfig) -> Result<()> {
    for (&metric, settings) in &config.metrics {
        validate_thresholds(metric, settings)?;
        validate_tuning(metric, settings)?;
    }
    Ok(())
}

/// Reject thresholds that cannot drive a meaningful comparison.
pub fn validate_threshold(metric: MetricKind, feature: Option<&str>, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::InvalidThreshold {
            metric,
            feature: feature.map(str::to_string),
            value,
        });
    }
    Ok(())
}

fn validate_thresholds(metric: MetricKind, settings: &MetricConfig) -> Result<()> {
    for value in [settings.default_threshold, settings.critical_threshold].into_iter().flatten() {
        validate_threshold(metric, None, value)?;
    }
    for (feature, &value) in settings
        .feature_thresholds
        .iter()
        .chain(&settings.feature_critical_thresholds)
    {
        validate_threshold(metric, Some(feature), value)?;
    }
    Ok(())
}

fn validate_tuning(metric: MetricKind, settings: &MetricConfig) -> Result<()> {
    if settings.mode.is_some() && metric != MetricKind::Ks {
        return Err(Error::config(format!(
            "metrics.{metric}.mode is only supported for ks; {metric} has a fixed decision mode"
        )));
    }

    if metric != MetricKind::Psi && (settings.bins.is_some() || settings.binning.is_some()) {
        return Err(Error::config(format!(
            "metrics.{metric}.bins/binning are only supported for psi"
        )));
    }
    if let Some(bins) = settings.bins {
        if bins < 2 {
            return Err(Error::config(format!(
                "metrics.psi.bins must be at least 2, got {bins}"
            )));
        }
    }

    if let Some(count) = settings.min_expected_count {
        if metric != MetricKind::ChiSquare {
            return Err(Error::config(format!(
                "metrics.{metric}.min_expected_count is only supported for chi_square"
            )));
        }
        if !count.is_finite() || count < 0.0 {
            return Err(Error::config(format!(
                "metrics.chi_square.min_expected_count must be finite and >= 0, got {count}"
            )));
        }
    }

    Ok(())
}
