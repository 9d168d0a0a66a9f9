//! Chi-square test of independence over a 2×k contingency table.

use std::collections::BTreeMap;

use super::statistical::chi_square_p_value;
use super::{categorical_pair, DecisionMode, DriftMetric, MetricKind, MetricResult};
use crate::data::Sample;
use crate::error::{Error, Result};

/// Smallest expected cell count for which the test is considered valid.
pub const DEFAULT_MIN_EXPECTED_COUNT: f64 = 5.0;

/// Chi-square contingency test between reference and current category counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquare {
    min_expected_count: f64,
}

impl Default for ChiSquare {
    fn default() -> Self {
        Self { min_expected_count: DEFAULT_MIN_EXPECTED_COUNT }
    }
}

impl ChiSquare {
    pub fn new(min_expected_count: f64) -> Self {
        Self { min_expected_count }
    }

    pub fn min_expected_count(&self) -> f64 {
        self.min_expected_count
    }
}

/// Per-category `(reference, current)` counts over the union of categories.
fn contingency_table<'a>(
    reference: &'a [String],
    current: &'a [String],
) -> BTreeMap<&'a str, (usize, usize)> {
    let mut table: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for label in reference {
        table.entry(label.as_str()).or_default().0 += 1;
    }
    for label in current {
        table.entry(label.as_str()).or_default().1 += 1;
    }
    table
}

impl DriftMetric for ChiSquare {
    fn kind(&self) -> MetricKind {
        MetricKind::ChiSquare
    }

    fn decision_mode(&self) -> DecisionMode {
        DecisionMode::PValue
    }

    fn compute(&self, reference: &Sample, current: &Sample) -> Result<MetricResult> {
        let (reference_labels, current_labels) =
            categorical_pair(MetricKind::ChiSquare, reference, current)?;

        let table = contingency_table(reference_labels, current_labels);
        let n_reference = reference_labels.len() as f64;
        let n_current = current_labels.len() as f64;
        let total = n_reference + n_current;
        let df = table.len().saturating_sub(1);

        let mut chi_sq = 0.0;
        for (&category, &(r_count, c_count)) in &table {
            let column_total = (r_count + c_count) as f64;
            for (observed, row_total) in [(r_count, n_reference), (c_count, n_current)] {
                let expected = row_total * column_total / total;
                if expected < self.min_expected_count {
                    return Err(Error::InsufficientData {
                        feature: reference.feature().to_string(),
                        category: category.to_string(),
                        expected,
                        minimum: self.min_expected_count,
                    });
                }
                let mut deviation = (observed as f64 - expected).abs();
                if df == 1 {
                    // Yates continuity correction
                    deviation -= deviation.min(0.5);
                }
                chi_sq += deviation * deviation / expected;
            }
        }

        let (statistic, p_value) =
            if df == 0 { (0.0, 1.0) } else { (chi_sq, chi_square_p_value(chi_sq, df)) };

        tracing::debug!(
            feature = reference.feature(),
            categories = table.len(),
            statistic,
            p_value,
            "computed chi-square statistic"
        );

        Ok(MetricResult { metric: MetricKind::ChiSquare, statistic, p_value: Some(p_value) })
    }
}
