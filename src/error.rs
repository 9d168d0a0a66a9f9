//! Error types with actionable diagnostics (Andon principle).
//!
//! Every stage of the engine raises its failures synchronously through this
//! single taxonomy. Errors are never caught and reinterpreted by a later stage;
//! they travel unchanged to the caller of [`crate::pipeline::run`].

use std::path::PathBuf;

use thiserror::Error;

use crate::data::{DatasetRole, FeatureType};
use crate::metrics::MetricKind;

/// Result type alias for driftguard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the drift-decision engine.
#[derive(Error, Debug)]
pub enum Error {
    /// Named column is absent from one of the datasets.
    #[error("Feature '{feature}' not found in {role} dataset\n  → Check the column name or the dataset schema")]
    FeatureNotFound { feature: String, role: DatasetRole },

    /// Declared feature type (or metric requirement) disagrees with the data.
    #[error("Type mismatch for feature '{feature}': expected {expected}, {detail}")]
    TypeMismatch { feature: String, expected: FeatureType, detail: String },

    /// Chi-square validity requirement violated.
    #[error("Insufficient data for feature '{feature}': expected count {expected:.3} for category '{category}' is below the minimum of {minimum}\n  → Collect more samples or merge rare categories")]
    InsufficientData { feature: String, category: String, expected: f64, minimum: f64 },

    /// No per-feature override and no metric default configured.
    #[error("No threshold configured for metric '{metric}' and feature '{feature}'\n  → Set metrics.{metric}.default_threshold or metrics.{metric}.feature_thresholds.{feature}")]
    MissingThreshold { metric: MetricKind, feature: String },

    /// A sample was empty after missing-value removal.
    #[error("Feature '{feature}' has no usable values in {role} dataset after dropping missing values")]
    EmptySample { feature: String, role: DatasetRole },

    /// Threshold is non-finite or not strictly positive.
    #[error("Invalid threshold {value} for metric '{metric}'{}: must be finite and > 0", scope_suffix(.feature))]
    InvalidThreshold { metric: MetricKind, feature: Option<String>, value: f64 },

    /// Row window sizes do not fit the dataset.
    #[error("Invalid window: {message}")]
    InvalidWindow { message: String },

    /// Dataset construction failed (ragged or duplicate columns).
    #[error("Invalid dataset: {message}")]
    InvalidDataset { message: String },

    /// The same feature appears in more than one feature spec.
    #[error("Feature '{feature}' is listed more than once\n  → Each feature may be evaluated by a single metric per run")]
    DuplicateFeature { feature: String },

    /// A p-value-driven decision was requested for a result without a p-value.
    #[error("Metric '{metric}' produced no p-value but its decision mode requires one")]
    MissingPValue { metric: MetricKind },

    /// Serialization of a result failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Configuration could not be read, parsed or validated.
    #[error("Invalid configuration{}: {message}", path_suffix(.path))]
    Config { path: Option<PathBuf>, message: String },
}

fn scope_suffix(feature: &Option<String>) -> String {
    feature.as_ref().map(|f| format!(" (feature '{f}')")).unwrap_or_default()
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
}

impl Error {
    /// Create a configuration error without a source file.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config { path: None, message: message.into() }
    }

    /// Feature the error is attributed to, when there is one.
    pub fn feature(&self) -> Option<&str> {
        match self {
            Self::FeatureNotFound { feature, .. }
            | Self::TypeMismatch { feature, .. }
            | Self::InsufficientData { feature, .. }
            | Self::MissingThreshold { feature, .. }
            | Self::EmptySample { feature, .. }
            | Self::DuplicateFeature { feature } => Some(feature),
            Self::InvalidThreshold { feature, .. } => feature.as_deref(),
            _ => None,
        }
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::FeatureNotFound { .. } => "E001",
            Self::TypeMismatch { .. } => "E002",
            Self::InsufficientData { .. } => "E003",
            Self::MissingThreshold { .. } => "E004",
            Self::EmptySample { .. } => "E005",
            Self::InvalidThreshold { .. } => "E010",
            Self::InvalidWindow { .. } => "E020",
            Self::InvalidDataset { .. } => "E021",
            Self::DuplicateFeature { .. } => "E022",
            Self::MissingPValue { .. } => "E030",
            Self::Config { .. } => "E040",
            Self::Serialization { .. } => "E050",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_unique() {
        let errors = vec![
            Error::FeatureNotFound { feature: "a".into(), role: DatasetRole::Reference },
            Error::TypeMismatch {
                feature: "a".into(),
                expected: FeatureType::Numerical,
                detail: String::new(),
            },
            Error::InsufficientData {
                feature: "a".into(),
                category: "x".into(),
                expected: 1.0,
                minimum: 5.0,
            },
            Error::MissingThreshold { metric: MetricKind::Psi, feature: "a".into() },
            Error::EmptySample { feature: "a".into(), role: DatasetRole::Current },
            Error::InvalidThreshold { metric: MetricKind::Ks, feature: None, value: 0.0 },
            Error::InvalidWindow { message: String::new() },
            Error::InvalidDataset { message: String::new() },
            Error::DuplicateFeature { feature: "a".into() },
            Error::MissingPValue { metric: MetricKind::Psi },
            Error::config("bad"),
            Error::Serialization { message: String::new() },
        ];
        let mut codes: Vec<_> = errors.iter().map(Error::code).collect();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_feature_not_found_names_dataset() {
        let err = Error::FeatureNotFound { feature: "age".into(), role: DatasetRole::Current };
        let msg = err.to_string();
        assert!(msg.contains("'age'"));
        assert!(msg.contains("current"));
        assert_eq!(err.feature(), Some("age"));
    }

    #[test]
    fn test_missing_threshold_suggests_config_key() {
        let err = Error::MissingThreshold { metric: MetricKind::Ks, feature: "age".into() };
        assert!(err.to_string().contains("metrics.ks.default_threshold"));
    }

    #[test]
    fn test_invalid_threshold_message_scope() {
        let global = Error::InvalidThreshold { metric: MetricKind::Psi, feature: None, value: -1.0 };
        assert!(!global.to_string().contains("feature"));

        let scoped = Error::InvalidThreshold {
            metric: MetricKind::Psi,
            feature: Some("age".into()),
            value: 0.0,
        };
        assert!(scoped.to_string().contains("feature 'age'"));
        assert_eq!(scoped.feature(), Some("age"));
    }

    #[test]
    fn test_config_error_path_suffix() {
        let err = Error::Config { path: Some("drift.yaml".into()), message: "oops".into() };
        assert!(err.to_string().contains("in drift.yaml"));
        assert!(!Error::config("oops").to_string().contains(" in "));
    }
}
