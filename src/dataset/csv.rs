//! CSV dataset loader.
//!
//! The first row holds the column names. One column is the class label; all
//! other columns become features:
//! ```csv
//! color,size,label
//! red,1.0,A
//! red,1.2,A
//! blue,5.0,B
//! ```
//!
//! A feature column is continuous when every cell parses as a number and
//! categorical otherwise. The type is decided once per column, from the
//! training file. Prediction files are read against the trained schema so
//! their columns keep the kinds the model was fitted with.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::dataset::table::{Column, Table};
use crate::dataset::value::FeatureKind;
use crate::error::{NaiveBayesError, Result};

/// A feature table together with its label column.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledTable {
    /// Feature columns (every column except the target)
    pub features: Table,
    /// Class label of each row
    pub labels: Vec<String>,
    /// Name of the target column the labels were read from
    pub target: String,
}

/// A loader for labelled CSV datasets.
#[derive(Debug, Clone)]
pub struct CsvLoader {
    /// Name of the column holding class labels
    target: String,
    /// CSV delimiter character (default: ',')
    delimiter: u8,
    /// Whether to trim whitespace from fields
    trim: bool,
}

impl CsvLoader {
    /// Create a loader reading labels from the `target` column.
    pub fn new<S: Into<String>>(target: S) -> Self {
        CsvLoader {
            target: target.into(),
            delimiter: b',',
            trim: true,
        }
    }

    /// Set a custom delimiter character. Only ASCII delimiters are supported.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self> {
        if !delimiter.is_ascii() {
            return Err(NaiveBayesError::invalid_config(format!(
                "CSV delimiter must be an ASCII character, got '{delimiter}'"
            )));
        }
        self.delimiter = delimiter as u8;
        Ok(self)
    }

    /// Set whether to trim whitespace from fields.
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Load a labelled dataset from a file.
    pub fn load_path<P: AsRef<Path>>(&self, path: P) -> Result<LabeledTable> {
        let path = path.as_ref();
        log::debug!("Loading dataset from {}", path.display());
        let file = File::open(path)?;
        self.load_reader(file)
    }

    /// Load a labelled dataset from CSV text.
    pub fn load_str(&self, input: &str) -> Result<LabeledTable> {
        self.load_reader(input.as_bytes())
    }

    /// Load an unlabelled feature table from a file.
    ///
    /// Columns listed in `schema` are built as the given kind instead of being
    /// inferred; pass the trained schema (see `ParameterStore::schema`). A
    /// column named like the target is dropped if present, so the same file
    /// layout can be used for training and prediction.
    pub fn load_features_path<P: AsRef<Path>>(
        &self,
        path: P,
        schema: &[(&str, FeatureKind)],
    ) -> Result<Table> {
        let file = File::open(path.as_ref())?;
        self.load_features_reader(file, schema)
    }

    /// Load an unlabelled feature table from CSV text.
    pub fn load_features_str(&self, input: &str, schema: &[(&str, FeatureKind)]) -> Result<Table> {
        self.load_features_reader(input.as_bytes(), schema)
    }

    fn load_features_reader<R: Read>(
        &self,
        reader: R,
        schema: &[(&str, FeatureKind)],
    ) -> Result<Table> {
        let (headers, records) = self.read_records(reader)?;
        let keep: Vec<usize> = (0..headers.len())
            .filter(|&i| headers[i] != self.target)
            .collect();
        build_table(&headers, &records, &keep, schema)
    }

    fn load_reader<R: Read>(&self, reader: R) -> Result<LabeledTable> {
        let (headers, records) = self.read_records(reader)?;

        let target_idx = headers
            .iter()
            .position(|h| h == self.target)
            .ok_or_else(|| {
                NaiveBayesError::dataset(format!(
                    "Target column '{}' not found in header",
                    self.target
                ))
            })?;

        let labels = records
            .iter()
            .map(|record| record[target_idx].to_string())
            .collect();
        let keep: Vec<usize> = (0..headers.len()).filter(|&i| i != target_idx).collect();
        let features = build_table(&headers, &records, &keep, &[])?;

        log::debug!(
            "Loaded {} rows with {} features (target '{}')",
            features.n_rows(),
            features.n_columns(),
            self.target
        );

        Ok(LabeledTable {
            features,
            labels,
            target: self.target.clone(),
        })
    }

    fn read_records<R: Read>(&self, reader: R) -> Result<(StringRecord, Vec<StringRecord>)> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(NaiveBayesError::dataset("CSV header is empty"));
        }

        let records = reader.records().collect::<std::result::Result<Vec<_>, _>>()?;

        for (i, record) in records.iter().enumerate() {
            if let Some(col) = record.iter().position(str::is_empty) {
                return Err(NaiveBayesError::dataset(format!(
                    "Missing value in row {} column '{}'",
                    i + 1,
                    &headers[col]
                )));
            }
        }

        Ok((headers, records))
    }
}

/// Build a table from the columns at `keep`.
///
/// A column named in `schema` takes that kind; any other column has its type
/// inferred from its cells.
fn build_table(
    headers: &StringRecord,
    records: &[StringRecord],
    keep: &[usize],
    schema: &[(&str, FeatureKind)],
) -> Result<Table> {
    let columns = keep
        .iter()
        .map(|&col| -> Result<(String, Column)> {
            let name = &headers[col];
            let cells = records.iter().map(|r| &r[col]);
            let column = match schema.iter().find(|(n, _)| *n == name) {
                Some((_, FeatureKind::Categorical)) => Column::categorical(cells),
                Some((_, FeatureKind::Continuous)) => parse_continuous(name, cells)?,
                None => infer_column(cells),
            };
            Ok((name.to_string(), column))
        })
        .collect::<Result<Vec<_>>>()?;
    Table::from_columns(columns)
}

/// Parse every cell of a column known to be continuous.
fn parse_continuous<'a, I>(name: &str, cells: I) -> Result<Column>
where
    I: Iterator<Item = &'a str>,
{
    let values = cells
        .enumerate()
        .map(|(i, cell)| {
            cell.parse::<f64>().map_err(|_| {
                NaiveBayesError::dataset(format!(
                    "Column '{name}' is continuous but row {} holds '{cell}'",
                    i + 1
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Column::Continuous(values))
}

/// Infer the column type from its cells: numeric if every cell parses as f64.
fn infer_column<'a, I>(cells: I) -> Column
where
    I: Iterator<Item = &'a str> + Clone,
{
    let numbers: Option<Vec<f64>> = cells.clone().map(|cell| cell.parse::<f64>().ok()).collect();
    match numbers {
        Some(values) => Column::Continuous(values),
        None => Column::categorical(cells),
    }
}
