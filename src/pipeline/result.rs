//! Pipeline result.

use std::collections::BTreeMap;

use crate::alert::Alert;
use crate::detector::DriftDecision;
use crate::error::{Error, Result};
use crate::report::{AlertEntry, DriftReport, DriftSummary, FeatureEntry};

/// Outcome of one pipeline run; immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineResult {
    drift_detected: bool,
    alerts: Vec<Alert>,
    per_feature: BTreeMap<String, DriftDecision>,
}

impl PipelineResult {
    pub(crate) fn new(alerts: Vec<Alert>, per_feature: BTreeMap<String, DriftDecision>) -> Self {
        let drift_detected = per_feature.values().any(DriftDecision::drift_detected);
        Self { drift_detected, alerts, per_feature }
    }

    /// True iff any feature's decision flagged drift
    pub fn drift_detected(&self) -> bool {
        self.drift_detected
    }

    /// One alert per feature spec, in input order
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Alerts with severity above `None`
    pub fn actionable_alerts(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter().filter(|a| a.is_actionable())
    }

    /// Decisions keyed by feature name
    pub fn per_feature(&self) -> &BTreeMap<String, DriftDecision> {
        &self.per_feature
    }

    /// Decision for one feature
    pub fn decision(&self, feature: &str) -> Option<&DriftDecision> {
        self.per_feature.get(feature)
    }

    pub fn summary(&self) -> DriftSummary {
        DriftSummary::from_alerts(&self.alerts)
    }

    /// Flatten into the machine-readable report shape
    pub fn report(&self) -> DriftReport {
        DriftReport {
            drift_detected: self.drift_detected,
            alerts: self.alerts.iter().map(AlertEntry::from).collect(),
            per_feature: self
                .per_feature
                .iter()
                .map(|(name, d)| {
                    let entry = FeatureEntry {
                        statistic: d.statistic,
                        threshold: d.threshold,
                        drift_detected: d.drift_detected(),
                    };
                    (name.clone(), entry)
                })
                .collect(),
        }
    }

    /// Serialize the report as JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(&self.report())
            .map_err(|e| Error::Serialization { message: e.to_string() })
    }
}
