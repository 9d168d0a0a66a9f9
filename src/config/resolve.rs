//! Threshold resolution: per-feature override, then metric default.

use super::schema::ThresholdConfig;
use crate::error::{Error, Result};
use crate::metrics::{DecisionMode, MetricKind};

/// Severity cutoff for p-value-driven decisions when none is configured.
pub const DEFAULT_CRITICAL_P_VALUE: f64 = 0.01;

/// Severity cutoff for KS statistic-mode decisions when none is configured.
pub const DEFAULT_CRITICAL_KS_STATISTIC: f64 = 0.2;

/// Effective decision threshold for `(metric, feature)`.
pub fn resolve_threshold(
    config: &ThresholdConfig,
    metric: MetricKind,
    feature: &str,
) -> Result<f64> {
    let settings = config.metric_config(metric);

    settings
        .and_then(|c| c.feature_thresholds.get(feature).copied())
        .or_else(|| settings.and_then(|c| c.default_threshold))
        .ok_or_else(|| Error::MissingThreshold { metric, feature: feature.to_string() })
}

/// Effective warning/critical cutoff for `(metric, feature)`.
///
/// Resolved like [`resolve_threshold`], but falls back to a built-in constant
/// for the decision mode instead of failing.
pub fn resolve_critical_threshold(
    config: &ThresholdConfig,
    metric: MetricKind,
    feature: &str,
    mode: DecisionMode,
) -> f64 {
    let settings = config.metric_config(metric);

    settings
        .and_then(|c| c.feature_critical_thresholds.get(feature).copied())
        .or_else(|| settings.and_then(|c| c.critical_threshold))
        .unwrap_or(match mode {
            DecisionMode::PValue => DEFAULT_CRITICAL_P_VALUE,
            DecisionMode::Statistic => DEFAULT_CRITICAL_KS_STATISTIC,
        })
}
