//! Cell values and feature kinds.
//!
//! ```
//! use mixnb::dataset::{FeatureKind, Value};
//!
//! let text = Value::from("red");
//! assert_eq!(text.as_text(), Some("red"));
//! assert_eq!(text.kind(), FeatureKind::Categorical);
//!
//! let number = Value::from(1.5);
//! assert_eq!(number.as_number(), Some(1.5));
//! assert_eq!(number.kind(), FeatureKind::Continuous);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a feature is modelled by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    /// Discrete values, modelled with frequency tables.
    Categorical,
    /// Real values, modelled with a Gaussian density.
    Continuous,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureKind::Categorical => write!(f, "categorical"),
            FeatureKind::Continuous => write!(f, "continuous"),
        }
    }
}

/// A single cell of a [`Table`](super::Table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value
    Number(f64),
    /// Text value
    Text(String),
}

impl Value {
    /// Convert to text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            Value::Number(_) => None,
        }
    }

    /// Convert to a number if this is a numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            Value::Text(_) => None,
        }
    }

    /// The feature kind a column of such values has.
    pub fn kind(&self) -> FeatureKind {
        match self {
            Value::Number(_) => FeatureKind::Continuous,
            Value::Text(_) => FeatureKind::Categorical,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
