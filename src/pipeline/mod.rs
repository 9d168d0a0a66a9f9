//! Drift pipeline.
//!
//! Runs Windowing → Metrics → threshold resolution → Detector → Alert for
//! each feature spec in order and assembles a [`PipelineResult`]. The first
//! failing feature aborts the run; no partial result is returned.
//!
//! ## Example
//!
//! ```
//! use driftguard::{run, Dataset, FeatureSpec, MetricKind, ThresholdConfig};
//!
//! let reference = Dataset::builder().numeric("age", (0..200).map(f64::from)).build()?;
//! let current = Dataset::builder().numeric("age", (100..300).map(f64::from)).build()?;
//!
//! let specs = [FeatureSpec::numerical("age", MetricKind::Psi)];
//! let result = run(&reference, &current, &specs, &ThresholdConfig::recommended())?;
//! assert!(result.drift_detected());
//! # Ok::<(), driftguard::Error>(())
//! ```

mod result;
mod spec;


pub use result::PipelineResult;
pub use spec::FeatureSpec;

use std::collections::{BTreeMap, HashSet};

use crate::alert::{classify, Alert};
use crate::config::{resolve_threshold, validate_config, ThresholdConfig};
use crate::data::Dataset;
use crate::detector::detect;
use crate::error::{Error, Result};
use crate::window::extract_samples;

/// Evaluate `feature_specs` over `reference` and `current` using `config`.
pub fn run(
    reference: &Dataset,
    current: &Dataset,
    feature_specs: &[FeatureSpec],
    config: &ThresholdConfig,
) -> Result<PipelineResult> {
    DriftPipeline::new(config).run(reference, current, feature_specs)
}

/// Pipeline bound to a read-only threshold configuration.
///
/// Holds no mutable state, so one instance may evaluate features from
/// several threads at once.
#[derive(Debug, Clone, Copy)]
pub struct DriftPipeline<'a> {
    config: &'a ThresholdConfig,
}

impl<'a> DriftPipeline<'a> {
    pub fn new(config: &'a ThresholdConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ThresholdConfig {
        self.config
    }

    /// Run every feature spec in order.
    ///
    /// The configuration is validated first, so builder-made configs obey the
    /// same rules as loaded ones.
    pub fn run(
        &self,
        reference: &Dataset,
        current: &Dataset,
        feature_specs: &[FeatureSpec],
    ) -> Result<PipelineResult> {
        validate_config(self.config)?;
        check_unique(feature_specs)?;

        let mut alerts = Vec::with_capacity(feature_specs.len());
        let mut per_feature = BTreeMap::new();

        for spec in feature_specs {
            let alert = self.evaluate(reference, current, spec)?;
            per_feature.insert(spec.feature_name.clone(), alert.decision.clone());
            alerts.push(alert);
        }

        let result = PipelineResult::new(alerts, per_feature);
        let summary = result.summary();
        tracing::info!(
            features = summary.total_features,
            drifted = summary.drifted_features,
            warnings = summary.warnings,
            critical = summary.critical,
            drift_detected = result.drift_detected(),
            "drift pipeline complete"
        );

        Ok(result)
    }

    /// Evaluate a single feature spec end to end.
    pub fn evaluate_feature(
        &self,
        reference: &Dataset,
        current: &Dataset,
        spec: &FeatureSpec,
    ) -> Result<Alert> {
        validate_config(self.config)?;
        self.evaluate(reference, current, spec)
    }

    fn evaluate(
        &self,
        reference: &Dataset,
        current: &Dataset,
        spec: &FeatureSpec,
    ) -> Result<Alert> {
        let feature = spec.feature_name.as_str();

        let required = spec.metric.feature_type();
        if spec.feature_type != required {
            return Err(Error::TypeMismatch {
                feature: feature.to_string(),
                expected: required,
                detail: format!(
                    "metric '{}' cannot evaluate a feature declared {}",
                    spec.metric, spec.feature_type
                ),
            });
        }

        let (reference_sample, current_sample) =
            extract_samples(reference, current, feature, spec.feature_type)?;

        let metric = self.config.build_metric(spec.metric);
        let result = metric.compute(&reference_sample, &current_sample)?;

        let threshold = match spec.threshold_override {
            Some(threshold) => threshold,
            None => resolve_threshold(self.config, spec.metric, feature)?,
        };

        let decision = detect(feature, &result, threshold, metric.decision_mode())?;
        Ok(classify(decision, self.config))
    }
}

fn check_unique(feature_specs: &[FeatureSpec]) -> Result<()> {
    let mut seen = HashSet::with_capacity(feature_specs.len());
    for spec in feature_specs {
        if !seen.insert(spec.feature_name.as_str()) {
            return Err(Error::DuplicateFeature { feature: spec.feature_name.clone() });
        }
    }
    Ok(())
}
