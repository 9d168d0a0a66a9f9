//! In-memory tabular data model.
//!
//! Loading datasets from files is left to the caller; the engine only needs
//! named columns of equal length whose cells are numbers, text or missing.

mod dataset;
mod sample;


pub use dataset::{Column, Dataset, DatasetBuilder};
pub use sample::{Sample, SampleValues};

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric cell (NaN and infinities count as missing for numerical features)
    Number(f64),
    /// Text cell, always a category label
    Text(String),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Declared type of a feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureType {
    /// Continuous numeric feature (PSI, KS)
    Numerical,
    /// Discrete category labels (chi-square)
    Categorical,
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureType::Numerical => write!(f, "numerical"),
            FeatureType::Categorical => write!(f, "categorical"),
        }
    }
}

/// Which side of the comparison a dataset plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetRole {
    Reference,
    Current,
}

impl fmt::Display for DatasetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetRole::Reference => write!(f, "reference"),
            DatasetRole::Current => write!(f, "current"),
        }
    }
}
