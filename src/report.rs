//! Machine-readable drift report.
//!
//! The flattened shape downstream consumers read:
//!
//! ```json
//! {
//!   "drift_detected": true,
//!   "alerts": [{"feature": "age", "metric": "psi", "severity": "critical",
//!               "statistic": 0.42, "threshold": 0.1}],
//!   "per_feature": {"age": {"statistic": 0.42, "threshold": 0.1, "drift_detected": true}}
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::alert::{Alert, Severity};
use crate::metrics::MetricKind;

/// Top-level report of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    pub drift_detected: bool,
    pub alerts: Vec<AlertEntry>,
    pub per_feature: BTreeMap<String, FeatureEntry>,
}

/// One alert line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEntry {
    pub feature: String,
    pub metric: MetricKind,
    pub severity: Severity,
    pub statistic: f64,
    pub threshold: f64,
}

/// Per-feature decision summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEntry {
    pub statistic: f64,
    pub threshold: f64,
    pub drift_detected: bool,
}

impl From<&Alert> for AlertEntry {
    fn from(alert: &Alert) -> Self {
        Self {
            feature: alert.feature.clone(),
            metric: alert.metric,
            severity: alert.severity,
            statistic: alert.decision.statistic,
            threshold: alert.decision.threshold,
        }
    }
}

/// Summary counts of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriftSummary {
    /// Total number of features checked
    pub total_features: usize,
    /// Number of features with detected drift
    pub drifted_features: usize,
    /// Number of warning-level alerts
    pub warnings: usize,
    /// Number of critical-level alerts
    pub critical: usize,
}

impl DriftSummary {
    /// Count drifted features and alert severities
    pub fn from_alerts(alerts: &[Alert]) -> Self {
        Self {
            total_features: alerts.len(),
            drifted_features: alerts.iter().filter(|a| a.decision.drift_detected()).count(),
            warnings: alerts.iter().filter(|a| a.severity == Severity::Warning).count(),
            critical: alerts.iter().filter(|a| a.severity == Severity::Critical).count(),
        }
    }
}
