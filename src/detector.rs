//! Drift detector: turns a metric result and a threshold into a decision.
//!
//! The detector never recomputes a metric; it only applies the comparison
//! rule selected by the metric's [`DecisionMode`].

use serde::Serialize;

use crate::config::validate_threshold;
use crate::error::{Error, Result};
use crate::metrics::{DecisionMode, MetricKind, MetricResult};

/// Outcome of comparing one metric result against its threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriftDecision {
    pub feature: String,
    pub metric: MetricKind,
    pub statistic: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
    pub threshold: f64,
    pub mode: DecisionMode,
    drift_detected: bool,
}

impl DriftDecision {
    /// Whether the comparison rule flagged drift
    pub fn drift_detected(&self) -> bool {
        self.drift_detected
    }

    /// The value compared against the threshold
    pub fn compared_value(&self) -> Option<f64> {
        match self.mode {
            DecisionMode::Statistic => Some(self.statistic),
            DecisionMode::PValue => self.p_value,
        }
    }
}

/// Decide drift for `feature` from a computed metric result.
///
/// - `Statistic`: drift iff `statistic >= threshold`
/// - `PValue`: drift iff `p_value < threshold`
pub fn detect(
    feature: &str,
    result: &MetricResult,
    threshold: f64,
    mode: DecisionMode,
) -> Result<DriftDecision> {
    validate_threshold(result.metric, Some(feature), threshold)?;

    let drift_detected = match mode {
        DecisionMode::Statistic => result.statistic >= threshold,
        DecisionMode::PValue => {
            let p_value = result.p_value.ok_or(Error::MissingPValue { metric: result.metric })?;
            p_value < threshold
        }
    };

    tracing::debug!(
        feature,
        metric = %result.metric,
        statistic = result.statistic,
        p_value = ?result.p_value,
        threshold,
        mode = %mode,
        drift_detected,
        "drift decision"
    );

    Ok(DriftDecision {
        feature: feature.to_string(),
        metric: result.metric,
        statistic: result.statistic,
        p_value: result.p_value,
        threshold,
        mode,
        drift_detected,
    })
}
