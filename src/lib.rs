//! # mixnb
//!
//! A Naive Bayes classifier for tables that mix categorical and continuous
//! attributes.
//!
//! ## Features
//!
//! - Frequency tables for categorical features, Gaussian densities for
//!   continuous ones, chosen per column from its storage type
//! - Immutable parameter store built once per fit
//! - Order-preserving parallel prediction
//! - CSV loading with per-column type inference
//! - Seeded repeated hold-out evaluation
//!
//! ## Example
//!
//! ```
//! use mixnb::classifier::NaiveBayes;
//! use mixnb::dataset::CsvLoader;
//!
//! let data = CsvLoader::new("label")
//!     .load_str("color,size,label\nred,1.0,A\nred,1.2,A\nblue,5.0,B\nblue,5.4,B")
//!     .unwrap();
//!
//! let mut model = NaiveBayes::new();
//! model.fit(&data.features, &data.labels).unwrap();
//! assert_eq!(model.predict(&data.features).unwrap(), data.labels);
//! ```

pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod evaluation;

pub mod prelude {
    pub use crate::classifier::{Classifier, NaiveBayes, NaiveBayesConfig};
    pub use crate::dataset::{Column, CsvLoader, Table, Value};
    pub use crate::error::{NaiveBayesError, Result};
    pub use crate::evaluation::{EvaluationConfig, SeedPolicy, evaluate, evaluate_naive_bayes};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
