//! Two-sample Kolmogorov-Smirnov test.

use super::statistical::{ks_statistic, ks_two_sample_p_value, sorted};
use super::{numerical_pair, DecisionMode, DriftMetric, MetricKind, MetricResult};
use crate::data::Sample;
use crate::error::Result;

/// KS test; the decision mode is chosen by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KolmogorovSmirnov {
    mode: DecisionMode,
}

impl KolmogorovSmirnov {
    pub fn new(mode: DecisionMode) -> Self {
        Self { mode }
    }
}

impl DriftMetric for KolmogorovSmirnov {
    fn kind(&self) -> MetricKind {
        MetricKind::Ks
    }

    fn decision_mode(&self) -> DecisionMode {
        self.mode
    }

    fn compute(&self, reference: &Sample, current: &Sample) -> Result<MetricResult> {
        let (reference_values, current_values) = numerical_pair(MetricKind::Ks, reference, current)?;

        let statistic = ks_statistic(&sorted(reference_values), &sorted(current_values));
        let p_value =
            ks_two_sample_p_value(statistic, reference_values.len(), current_values.len());

        tracing::debug!(
            feature = reference.feature(),
            statistic,
            p_value,
            "computed KS statistic"
        );

        Ok(MetricResult { metric: MetricKind::Ks, statistic, p_value: Some(p_value) })
    }
}
