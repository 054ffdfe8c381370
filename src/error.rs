//! Error types for the mixnb library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`NaiveBayesError`] enum.
//!
//! # Examples
//!
//! ```
//! use mixnb::error::{NaiveBayesError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(NaiveBayesError::schema("feature 'color' was not seen during training"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for mixnb operations.
#[derive(Error, Debug)]
pub enum NaiveBayesError {
    /// I/O errors (reading datasets or configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Row counts or lengths that must agree do not
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },

    /// The training table contains zero rows
    #[error("Cannot fit with zero training rows")]
    EmptyTrainingData,

    /// Model used before calling `fit`
    #[error("Model not fitted: call fit before {operation}")]
    NotFitted { operation: &'static str },

    /// Feature names or types differ between training and prediction
    #[error("Schema mismatch: {0}")]
    SchemaMismatch(String),

    /// A (feature, class) entry is missing from the parameter store
    #[error("Missing parameter for feature '{feature}' and class '{class}'")]
    MissingParameter { feature: String, class: String },

    /// Dataset construction or loading errors
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for operations that may fail with NaiveBayesError.
pub type Result<T> = std::result::Result<T, NaiveBayesError>;

impl NaiveBayesError {
    /// Create a new schema mismatch error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        NaiveBayesError::SchemaMismatch(msg.into())
    }

    /// Create a new dataset error.
    pub fn dataset<S: Into<String>>(msg: S) -> Self {
        NaiveBayesError::Dataset(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        NaiveBayesError::InvalidConfig(msg.into())
    }

    /// Create a new dimension mismatch error.
    pub fn dimension_mismatch<E: ToString, A: ToString>(expected: E, actual: A) -> Self {
        NaiveBayesError::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create a new missing parameter error.
    pub fn missing_parameter<F: Into<String>, C: Into<String>>(feature: F, class: C) -> Self {
        NaiveBayesError::MissingParameter {
            feature: feature.into(),
            class: class.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = NaiveBayesError::schema("unknown feature 'weight'");
        assert_eq!(
            error.to_string(),
            "Schema mismatch: unknown feature 'weight'"
        );

        let error = NaiveBayesError::dataset("empty header");
        assert_eq!(error.to_string(), "Dataset error: empty header");

        let error = NaiveBayesError::dimension_mismatch("3 labels", 2);
        assert_eq!(
            error.to_string(),
            "Dimension mismatch: expected 3 labels, got 2"
        );

        let error = NaiveBayesError::NotFitted {
            operation: "predict",
        };
        assert_eq!(
            error.to_string(),
            "Model not fitted: call fit before predict"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = NaiveBayesError::from(io_error);

        match error {
            NaiveBayesError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
