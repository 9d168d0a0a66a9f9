//! Batch drift-decision engine.
//!
//! Compares a reference dataset against a current dataset feature by feature
//! and decides whether the distribution has drifted:
//! - Windowing extracts per-feature samples and drops missing cells
//! - Metrics compute PSI, Kolmogorov-Smirnov or chi-square statistics
//! - Thresholds resolve per feature from a layered configuration
//! - The detector turns a statistic and threshold into a boolean decision
//! - Alerts classify each decision as none, warning or critical
//!
//! # Quick Start
//!
//! ```
//! use driftguard::{run, Dataset, FeatureSpec, MetricKind, Severity, ThresholdConfig};
//!
//! let reference = Dataset::builder()
//!     .numeric("age", (0..500).map(|i| 20.0 + i as f64 * 0.12))
//!     .categorical("plan", ["free", "pro"].repeat(250))
//!     .build()?;
//! let current = Dataset::builder()
//!     .numeric("age", (0..500).map(|i| 40.0 + i as f64 * 0.12))
//!     .categorical("plan", ["free", "pro"].repeat(250))
//!     .build()?;
//!
//! let specs = [FeatureSpec::numerical("age", MetricKind::Psi), FeatureSpec::categorical("plan")];
//! let result = run(&reference, &current, &specs, &ThresholdConfig::recommended())?;
//!
//! assert!(result.drift_detected());
//! assert_eq!(result.alerts()[0].severity, Severity::Critical);
//! assert!(!result.decision("plan").unwrap().drift_detected());
//! # Ok::<(), driftguard::Error>(())
//! ```

pub mod alert;
pub mod config;
pub mod data;
pub mod detector;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod window;

pub use alert::{classify, Alert, Severity};
pub use config::{resolve_threshold, MetricConfig, ThresholdConfig};
pub use data::{Dataset, DatasetBuilder, DatasetRole, FeatureType, Sample, SampleValues, Value};
pub use detector::{detect, DriftDecision};
pub use error::{Error, Result};
pub use metrics::{
    Binning, ChiSquare, DecisionMode, DriftMetric, KolmogorovSmirnov, MetricKind, MetricResult, Psi,
};
pub use pipeline::{run, DriftPipeline, FeatureSpec, PipelineResult};
pub use report::{DriftReport, DriftSummary};
pub use window::{extract_samples, split_rows};
