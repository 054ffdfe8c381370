//! Tabular data for training and prediction.
//!
//! A [`Table`] is an ordered set of named, typed [`Column`]s. The storage type
//! of a column decides how the classifier treats it: text columns are
//! categorical features, numeric columns are continuous features.
//!
//! # Example
//!
//! ```
//! use mixnb::dataset::{Column, Table};
//!
//! let table = Table::from_columns(vec![
//!     ("color".to_string(), Column::categorical(["red", "red", "blue"])),
//!     ("size".to_string(), Column::Continuous(vec![1.0, 1.2, 5.0])),
//! ])
//! .unwrap();
//!
//! assert_eq!(table.n_rows(), 3);
//! assert_eq!(table.feature_names(), vec!["color", "size"]);
//! ```

pub mod csv;
pub mod split;
pub mod table;
pub mod value;

pub use self::csv::{CsvLoader, LabeledTable};
pub use split::{TrainTestSplit, train_test_split};
pub use table::{Column, Table};
pub use value::{FeatureKind, Value};
