//! One feature's values drawn from one dataset.

use super::FeatureType;

/// Values of a [`Sample`].
#[derive(Clone, Debug, PartialEq)]
pub enum SampleValues {
    /// Finite numeric values
    Numerical(Vec<f64>),
    /// Category labels
    Categorical(Vec<String>),
}

/// Ordered values of a single feature with missing values already removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Sample {
    feature: String,
    values: SampleValues,
}

impl Sample {
    /// Numeric sample; NaN and infinite values are dropped as missing.
    pub fn numerical(feature: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let values = values.into_iter().filter(|v| v.is_finite()).collect();
        Self { feature: feature.into(), values: SampleValues::Numerical(values) }
    }

    /// Categorical sample
    pub fn categorical<S: Into<String>>(
        feature: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let values = values.into_iter().map(Into::into).collect();
        Self { feature: feature.into(), values: SampleValues::Categorical(values) }
    }

    pub fn feature(&self) -> &str {
        &self.feature
    }

    pub fn values(&self) -> &SampleValues {
        &self.values
    }

    pub fn feature_type(&self) -> FeatureType {
        match self.values {
            SampleValues::Numerical(_) => FeatureType::Numerical,
            SampleValues::Categorical(_) => FeatureType::Categorical,
        }
    }

    pub fn len(&self) -> usize {
        match &self.values {
            SampleValues::Numerical(v) => v.len(),
            SampleValues::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Numeric values, if this is a numerical sample
    pub fn as_numerical(&self) -> Option<&[f64]> {
        match &self.values {
            SampleValues::Numerical(v) => Some(v),
            SampleValues::Categorical(_) => None,
        }
    }

    /// Category labels, if this is a categorical sample
    pub fn as_categorical(&self) -> Option<&[String]> {
        match &self.values {
            SampleValues::Categorical(v) => Some(v),
            SampleValues::Numerical(_) => None,
        }
    }
}
