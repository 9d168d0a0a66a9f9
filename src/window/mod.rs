//! Windowing: turning datasets into comparable samples.
//!
//! - [`extract_samples`] pulls one named column out of the reference and
//!   current datasets and validates it against the declared feature type.
//! - [`split_rows`] carves a single dataset into a leading reference window and
//!   a trailing current window.
//!
//! Missing cells are dropped here, before any metric sees the data. Insertion
//! order is preserved so downstream binning is deterministic.


use crate::data::{Dataset, DatasetRole, FeatureType, Sample, Value};
use crate::error::{Error, Result};

/// Extract the `feature` column from both datasets as validated samples.
pub fn extract_samples(
    reference: &Dataset,
    current: &Dataset,
    feature: &str,
    feature_type: FeatureType,
) -> Result<(Sample, Sample)> {
    let reference_cells = lookup(reference, feature, DatasetRole::Reference)?;
    let current_cells = lookup(current, feature, DatasetRole::Current)?;

    let reference_sample = to_sample(reference_cells, feature, feature_type, DatasetRole::Reference)?;
    let current_sample = to_sample(current_cells, feature, feature_type, DatasetRole::Current)?;

    tracing::debug!(
        feature,
        feature_type = %feature_type,
        reference_len = reference_sample.len(),
        current_len = current_sample.len(),
        "extracted feature samples"
    );

    Ok((reference_sample, current_sample))
}

/// Split `data` into its first `reference_size` rows and last `current_size` rows.
///
/// The windows may overlap when their sizes sum past the dataset length.
pub fn split_rows(
    data: &Dataset,
    reference_size: usize,
    current_size: usize,
) -> Result<(Dataset, Dataset)> {
    if reference_size == 0 {
        return Err(Error::InvalidWindow {
            message: "reference_size must be greater than 0".to_string(),
        });
    }
    if current_size == 0 {
        return Err(Error::InvalidWindow {
            message: "current_size must be greater than 0".to_string(),
        });
    }

    let n_rows = data.len();
    if reference_size > n_rows {
        return Err(Error::InvalidWindow {
            message: format!("reference_size ({reference_size}) exceeds data size ({n_rows})"),
        });
    }
    if current_size > n_rows {
        return Err(Error::InvalidWindow {
            message: format!("current_size ({current_size}) exceeds data size ({n_rows})"),
        });
    }

    Ok((data.slice_rows(0, reference_size), data.slice_rows(n_rows - current_size, n_rows)))
}

fn lookup<'a>(data: &'a Dataset, feature: &str, role: DatasetRole) -> Result<&'a [Option<Value>]> {
    data.column(feature)
        .ok_or_else(|| Error::FeatureNotFound { feature: feature.to_string(), role })
}

fn to_sample(
    cells: &[Option<Value>],
    feature: &str,
    feature_type: FeatureType,
    role: DatasetRole,
) -> Result<Sample> {
    let sample = match feature_type {
        FeatureType::Numerical => Sample::numerical(feature, numeric_values(cells, feature, role)?),
        FeatureType::Categorical => {
            Sample::categorical(feature, category_labels(cells, feature, role)?)
        }
    };

    if sample.is_empty() {
        return Err(Error::EmptySample { feature: feature.to_string(), role });
    }
    Ok(sample)
}

fn numeric_values(cells: &[Option<Value>], feature: &str, role: DatasetRole) -> Result<Vec<f64>> {
    let mut values = Vec::with_capacity(cells.len());
    for (row, cell) in cells.iter().enumerate() {
        match cell {
            Some(Value::Number(v)) => values.push(*v),
            Some(Value::Text(text)) => {
                return Err(Error::TypeMismatch {
                    feature: feature.to_string(),
                    expected: FeatureType::Numerical,
                    detail: format!("found text value '{text}' at row {row} of {role} dataset"),
                })
            }
            None => {}
        }
    }
    Ok(values)
}

fn category_labels(
    cells: &[Option<Value>],
    feature: &str,
    role: DatasetRole,
) -> Result<Vec<String>> {
    let mut labels = Vec::with_capacity(cells.len());
    for (row, cell) in cells.iter().enumerate() {
        match cell {
            Some(Value::Text(text)) => labels.push(text.clone()),
            Some(Value::Number(v)) if v.is_nan() => {}
            Some(Value::Number(v)) if v.is_finite() && v.fract() == 0.0 => {
                // -0.0 and 0.0 share a label
                labels.push(format!("{}", *v + 0.0));
            }
            Some(Value::Number(v)) => {
                return Err(Error::TypeMismatch {
                    feature: feature.to_string(),
                    expected: FeatureType::Categorical,
                    detail: format!(
                        "found continuous value {v} at row {row} of {role} dataset"
                    ),
                })
            }
            None => {}
        }
    }
    Ok(labels)
}
