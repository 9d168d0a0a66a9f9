//! Threshold configuration.
//!
//! - `schema`: the layered [`ThresholdConfig`] structure and its builders
//! - `resolve`: per-feature override → metric default resolution
//! - `validate`: range and placement checks
//! - `loader`: YAML/JSON loading with validation

mod loader;
mod resolve;
mod schema;
pub mod validate;


pub use resolve::{
    resolve_critical_threshold, resolve_threshold, DEFAULT_CRITICAL_KS_STATISTIC,
    DEFAULT_CRITICAL_P_VALUE,
};
pub use schema::{MetricConfig, ThresholdConfig};
pub use validate::{validate_config, validate_threshold};
