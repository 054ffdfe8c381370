//! Column-oriented feature table.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dataset::value::{FeatureKind, Value};
use crate::error::{NaiveBayesError, Result};

/// A typed column of feature values.
///
/// The variant is the storage type of the column and therefore fixes the
/// [`FeatureKind`] of the feature for the lifetime of a trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "lowercase")]
pub enum Column {
    /// Text values (categorical feature)
    Categorical(Vec<String>),
    /// Numeric values (continuous feature)
    Continuous(Vec<f64>),
}

impl Column {
    /// Create a categorical column from anything that yields string-like items.
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Column::Categorical(values.into_iter().map(Into::into).collect())
    }

    /// Number of values in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Categorical(values) => values.len(),
            Column::Continuous(values) => values.len(),
        }
    }

    /// Check if the column has no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The feature kind implied by the storage type.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Column::Categorical(_) => FeatureKind::Categorical,
            Column::Continuous(_) => FeatureKind::Continuous,
        }
    }

    /// Get the value at `row`, if in range.
    pub fn value(&self, row: usize) -> Option<Value> {
        match self {
            Column::Categorical(values) => values.get(row).cloned().map(Value::Text),
            Column::Continuous(values) => values.get(row).copied().map(Value::Number),
        }
    }

    /// Build a new column holding the values at `rows`, in that order.
    fn take(&self, rows: &[usize]) -> Self {
        match self {
            Column::Categorical(values) => {
                Column::Categorical(rows.iter().map(|&i| values[i].clone()).collect())
            }
            Column::Continuous(values) => {
                Column::Continuous(rows.iter().map(|&i| values[i]).collect())
            }
        }
    }
}

/// An ordered collection of named columns of equal length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in insertion order
    names: Vec<String>,
    /// Column data, parallel to `names`
    columns: Vec<Column>,
    /// Number of rows shared by every column
    n_rows: usize,
}

impl Table {
    /// Create a table from named columns.
    ///
    /// Fails if a name is empty or repeated, or if the columns differ in length.
    pub fn from_columns(columns: Vec<(String, Column)>) -> Result<Self> {
        let n_rows = columns.first().map(|(_, c)| c.len()).unwrap_or(0);
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(columns.len());
        let mut data = Vec::with_capacity(columns.len());

        for (name, column) in columns {
            if name.is_empty() {
                return Err(NaiveBayesError::dataset("Column name cannot be empty"));
            }
            if !seen.insert(name.clone()) {
                return Err(NaiveBayesError::dataset(format!(
                    "Column '{name}' appears more than once"
                )));
            }
            if column.len() != n_rows {
                return Err(NaiveBayesError::dimension_mismatch(
                    format!("{n_rows} rows in column '{name}'"),
                    column.len(),
                ));
            }
            names.push(name);
            data.push(column);
        }

        Ok(Table {
            names,
            columns: data,
            n_rows,
        })
    }

    /// Create a table from rows of values.
    ///
    /// Each column takes its kind from the first row; every later row must
    /// agree, since mixed types within one column are not supported.
    pub fn from_rows<S: AsRef<str>>(names: &[S], rows: &[Vec<Value>]) -> Result<Self> {
        let mut columns: Vec<(String, Column)> = Vec::with_capacity(names.len());

        for (col, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let kind = match rows.first().and_then(|row| row.get(col)) {
                Some(value) => value.kind(),
                None if rows.is_empty() => FeatureKind::Continuous,
                None => {
                    return Err(NaiveBayesError::dimension_mismatch(
                        format!("{} values per row", names.len()),
                        rows[0].len(),
                    ));
                }
            };

            let mut column = match kind {
                FeatureKind::Categorical => Column::Categorical(Vec::with_capacity(rows.len())),
                FeatureKind::Continuous => Column::Continuous(Vec::with_capacity(rows.len())),
            };

            for (i, row) in rows.iter().enumerate() {
                if row.len() != names.len() {
                    return Err(NaiveBayesError::dimension_mismatch(
                        format!("{} values per row", names.len()),
                        format!("{} in row {i}", row.len()),
                    ));
                }
                match (&mut column, &row[col]) {
                    (Column::Categorical(values), Value::Text(s)) => values.push(s.clone()),
                    (Column::Continuous(values), Value::Number(n)) => values.push(*n),
                    (_, value) => {
                        return Err(NaiveBayesError::dataset(format!(
                            "Column '{name}' is {kind} but row {i} holds a {} value",
                            value.kind()
                        )));
                    }
                }
            }

            columns.push((name.to_string(), column));
        }

        Self::from_columns(columns)
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| &self.columns[idx])
    }

    /// Iterate over `(name, column)` pairs in column order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names.iter().map(String::as_str).zip(self.columns.iter())
    }

    /// Get all column names in order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    /// Get one row as `(name, value)` pairs, if in range.
    pub fn row(&self, row: usize) -> Option<Vec<(&str, Value)>> {
        if row >= self.n_rows {
            return None;
        }
        self.columns()
            .map(|(name, column)| column.value(row).map(|value| (name, value)))
            .collect()
    }

    /// Build a new table holding the rows at `rows`, in that order.
    pub fn take_rows(&self, rows: &[usize]) -> Result<Self> {
        if let Some(&bad) = rows.iter().find(|&&i| i >= self.n_rows) {
            return Err(NaiveBayesError::dataset(format!(
                "Row index {bad} out of range for a table of {} rows",
                self.n_rows
            )));
        }

        Ok(Table {
            names: self.names.clone(),
            columns: self.columns.iter().map(|c| c.take(rows)).collect(),
            n_rows: rows.len(),
        })
    }
}
