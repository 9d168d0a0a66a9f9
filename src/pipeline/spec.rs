//! Feature specifications.

use serde::{Deserialize, Serialize};

use crate::data::FeatureType;
use crate::metrics::MetricKind;

/// What to evaluate for one feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureSpec {
    pub feature_name: String,
    pub feature_type: FeatureType,
    pub metric: MetricKind,
    /// Takes precedence over every configured threshold for this feature
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_override: Option<f64>,
}

impl FeatureSpec {
    pub fn new(
        feature_name: impl Into<String>,
        feature_type: FeatureType,
        metric: MetricKind,
    ) -> Self {
        Self { feature_name: feature_name.into(), feature_type, metric, threshold_override: None }
    }

    /// Numerical feature evaluated with `metric`
    pub fn numerical(feature_name: impl Into<String>, metric: MetricKind) -> Self {
        Self::new(feature_name, FeatureType::Numerical, metric)
    }

    /// Categorical feature evaluated with the chi-square test
    pub fn categorical(feature_name: impl Into<String>) -> Self {
        Self::new(feature_name, FeatureType::Categorical, MetricKind::ChiSquare)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold_override = Some(threshold);
        self
    }
}
