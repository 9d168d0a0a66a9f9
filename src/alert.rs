//! Alert classification (Andon signal).
//!
//! Severity is a fixed interpretive scale layered on top of the detector's
//! decision. For PSI the bands ignore the configured threshold entirely, so a
//! decision may report drift with severity `None` or the reverse; both are
//! exposed on the [`Alert`].

use serde::{Deserialize, Serialize};

use crate::config::{resolve_critical_threshold, ThresholdConfig};
use crate::detector::DriftDecision;
use crate::metrics::{DecisionMode, MetricKind};

/// PSI at or above this value is at least a warning.
pub const PSI_WARNING_BAND: f64 = 0.1;

/// PSI at or above this value is critical.
pub const PSI_CRITICAL_BAND: f64 = 0.2;

/// Severity levels for drift
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// No drift of interest
    None,
    /// Warning: potential drift, investigate
    Warning,
    /// Critical: investigate or retrain
    Critical,
}

/// Severity assigned to one drift decision
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Alert {
    pub feature: String,
    pub metric: MetricKind,
    pub severity: Severity,
    pub decision: DriftDecision,
}

impl Alert {
    /// Whether the alert warrants attention
    pub fn is_actionable(&self) -> bool {
        self.severity != Severity::None
    }
}

/// Map a PSI value onto the fixed bands
pub fn psi_severity(psi: f64) -> Severity {
    if psi >= PSI_CRITICAL_BAND {
        Severity::Critical
    } else if psi >= PSI_WARNING_BAND {
        Severity::Warning
    } else {
        Severity::None
    }
}

/// Severity for hypothesis-test decisions given the stricter cutoff.
///
/// In p-value mode the cutoff is a p-value (`p < cutoff` is critical); in
/// statistic mode it is a statistic (`statistic >= cutoff` is critical).
pub fn hypothesis_severity(decision: &DriftDecision, critical_cutoff: f64) -> Severity {
    if !decision.drift_detected() {
        return Severity::None;
    }
    let critical = match decision.mode {
        DecisionMode::Statistic => decision.statistic >= critical_cutoff,
        DecisionMode::PValue => decision.p_value.is_some_and(|p| p < critical_cutoff),
    };
    if critical {
        Severity::Critical
    } else {
        Severity::Warning
    }
}

/// Classify a decision, resolving the critical cutoff from `config`.
pub fn classify(decision: DriftDecision, config: &ThresholdConfig) -> Alert {
    let severity = match decision.metric {
        MetricKind::Psi => psi_severity(decision.statistic),
        MetricKind::Ks | MetricKind::ChiSquare => {
            let cutoff = resolve_critical_threshold(
                config,
                decision.metric,
                &decision.feature,
                decision.mode,
            );
            hypothesis_severity(&decision, cutoff)
        }
    };

    if severity != Severity::None {
        tracing::warn!(
            feature = %decision.feature,
            metric = %decision.metric,
            severity = ?severity,
            statistic = decision.statistic,
            "drift alert"
        );
    }

    Alert { feature: decision.feature.clone(), metric: decision.metric, severity, decision }
}
