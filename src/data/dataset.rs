//! Column-oriented dataset and its builder.

use std::collections::BTreeMap;

use super::Value;
use crate::error::{Error, Result};

/// Cells of one column; `None` marks a missing value.
pub type Column = Vec<Option<Value>>;

/// Named columns of equal length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    columns: BTreeMap<String, Column>,
    n_rows: usize,
}

impl Dataset {
    /// Start building a dataset
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.n_rows
    }

    /// Whether the dataset has no rows
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in sorted order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&[Option<Value>]> {
        self.columns.get(name).map(Vec::as_slice)
    }

    /// Rows `[start, end)` of every column.
    pub(crate) fn slice_rows(&self, start: usize, end: usize) -> Dataset {
        let columns = self
            .columns
            .iter()
            .map(|(name, cells)| (name.clone(), cells[start..end].to_vec()))
            .collect();
        Dataset { columns, n_rows: end - start }
    }
}

/// Builder for [`Dataset`].
///
/// Length and name checks are deferred to [`DatasetBuilder::build`] so columns
/// can be chained freely.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<(String, Column)>,
}

impl DatasetBuilder {
    /// Add a column of raw cells
    pub fn column(mut self, name: impl Into<String>, cells: Column) -> Self {
        self.columns.push((name.into(), cells));
        self
    }

    /// Add a fully populated numeric column
    pub fn numeric(self, name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        let cells = values.into_iter().map(|v| Some(Value::Number(v))).collect();
        self.column(name, cells)
    }

    /// Add a fully populated text column
    pub fn categorical<S: Into<String>>(
        self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = S>,
    ) -> Self {
        let cells = values.into_iter().map(|v| Some(Value::Text(v.into()))).collect();
        self.column(name, cells)
    }

    /// Validate and build the dataset
    pub fn build(self) -> Result<Dataset> {
        let n_rows = self.columns.first().map_or(0, |(_, cells)| cells.len());
        let mut columns = BTreeMap::new();

        for (name, cells) in self.columns {
            if cells.len() != n_rows {
                return Err(Error::InvalidDataset {
                    message: format!(
                        "column '{name}' has {} rows, expected {n_rows}",
                        cells.len()
                    ),
                });
            }
            if columns.contains_key(&name) {
                return Err(Error::InvalidDataset {
                    message: format!("duplicate column '{name}'"),
                });
            }
            columns.insert(name, cells);
        }

        Ok(Dataset { columns, n_rows })
    }
}
