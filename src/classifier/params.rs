//! Learned parameters: class priors and per-feature distributions.
//!
//! A [`ParameterStoreBuilder`] accumulates statistics while training and
//! [`ParameterStoreBuilder::build`] freezes them into a [`ParameterStore`],
//! which is never mutated afterwards.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::dataset::{Column, FeatureKind};
use crate::error::{NaiveBayesError, Result};

/// A class seen during training.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassPrior {
    /// Class label
    pub label: String,
    /// Number of training rows with this label
    pub count: usize,
    /// `count / total rows`
    pub prior: f64,
}

/// Distribution of one feature within one class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FeatureDistribution {
    /// Occurrence count of every observed value (not normalised).
    Categorical { frequencies: BTreeMap<String, usize> },
    /// Sample mean and sample standard deviation.
    Continuous { mean: f64, std: f64 },
}

impl FeatureDistribution {
    /// The feature kind this distribution models.
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureDistribution::Categorical { .. } => FeatureKind::Categorical,
            FeatureDistribution::Continuous { .. } => FeatureKind::Continuous,
        }
    }

    fn categorical<'a, I: Iterator<Item = &'a str>>(values: I) -> Self {
        let mut frequencies = BTreeMap::new();
        for value in values {
            *frequencies.entry(value.to_string()).or_insert(0) += 1;
        }
        FeatureDistribution::Categorical { frequencies }
    }

    /// Mean and `n - 1` standard deviation. Fewer than two values leave the
    /// deviation undefined (`NaN`); no values leave the mean undefined too.
    fn continuous(values: &[f64]) -> Self {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let sum_sq: f64 = values.iter().map(|x| (x - mean).powi(2)).sum();
        let std = (sum_sq / (n - 1.0)).sqrt();
        FeatureDistribution::Continuous { mean, std }
    }
}

/// Learned distributions of one feature, one per class.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureParameters {
    /// Feature name
    pub name: String,
    /// Kind decided from the training column
    pub kind: FeatureKind,
    /// Distributions, parallel to [`ParameterStore::classes`]
    pub per_class: Vec<FeatureDistribution>,
}

/// Immutable result of training.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterStore {
    classes: Vec<ClassPrior>,
    features: Vec<FeatureParameters>,
}

impl ParameterStore {
    /// Classes in their fixed (lexicographic) order.
    pub fn classes(&self) -> &[ClassPrior] {
        &self.classes
    }

    /// Class labels in their fixed order.
    pub fn labels(&self) -> Vec<&str> {
        self.classes.iter().map(|c| c.label.as_str()).collect()
    }

    /// Prior probability of `label`, if the class was seen.
    pub fn prior(&self, label: &str) -> Option<f64> {
        self.classes
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.prior)
    }

    /// All features in training column order.
    pub fn features(&self) -> &[FeatureParameters] {
        &self.features
    }

    /// Feature names with the kind each was trained as.
    pub fn schema(&self) -> Vec<(&str, FeatureKind)> {
        self.features
            .iter()
            .map(|f| (f.name.as_str(), f.kind))
            .collect()
    }

    /// Parameters of a feature by name.
    pub fn feature(&self, name: &str) -> Option<&FeatureParameters> {
        self.features.iter().find(|f| f.name == name)
    }

    /// Distribution of `feature` within `class`.
    pub fn distribution(&self, feature: &str, class: &str) -> Result<&FeatureDistribution> {
        let class_idx = self
            .classes
            .iter()
            .position(|c| c.label == class)
            .ok_or_else(|| NaiveBayesError::missing_parameter(feature, class))?;
        self.feature(feature)
            .and_then(|f| f.per_class.get(class_idx))
            .ok_or_else(|| NaiveBayesError::missing_parameter(feature, class))
    }
}

/// Accumulates training statistics into a [`ParameterStore`].
#[derive(Debug)]
pub struct ParameterStoreBuilder {
    classes: Vec<ClassPrior>,
    /// Row indices belonging to each class, parallel to `classes`
    class_rows: Vec<Vec<usize>>,
    n_rows: usize,
    features: Vec<FeatureParameters>,
    seen: HashSet<String>,
}

impl ParameterStoreBuilder {
    /// Start a builder from the training labels.
    ///
    /// Classes are ordered lexicographically by label; priors are the class
    /// frequencies.
    pub fn new(labels: &[String]) -> Result<Self> {
        if labels.is_empty() {
            return Err(NaiveBayesError::EmptyTrainingData);
        }

        let mut partition: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
        for (row, label) in labels.iter().enumerate() {
            partition.entry(label.as_str()).or_default().push(row);
        }

        let total = labels.len() as f64;
        let classes = partition
            .iter()
            .map(|(label, rows)| ClassPrior {
                label: label.to_string(),
                count: rows.len(),
                prior: rows.len() as f64 / total,
            })
            .collect();
        let class_rows = partition.into_values().collect();

        Ok(Self {
            classes,
            class_rows,
            n_rows: labels.len(),
            features: Vec::new(),
            seen: HashSet::new(),
        })
    }

    /// Estimate the per-class distributions of one feature column.
    pub fn add_feature(&mut self, name: &str, column: &Column) -> Result<&mut Self> {
        if column.len() != self.n_rows {
            return Err(NaiveBayesError::dimension_mismatch(
                format!("{} rows in feature '{name}'", self.n_rows),
                column.len(),
            ));
        }
        if !self.seen.insert(name.to_string()) {
            return Err(NaiveBayesError::schema(format!(
                "Feature '{name}' added twice"
            )));
        }

        let per_class: Vec<FeatureDistribution> = self
            .class_rows
            .iter()
            .map(|rows| match column {
                Column::Categorical(values) => {
                    FeatureDistribution::categorical(rows.iter().map(|&i| values[i].as_str()))
                }
                Column::Continuous(values) => {
                    let subset: Vec<f64> = rows.iter().map(|&i| values[i]).collect();
                    FeatureDistribution::continuous(&subset)
                }
            })
            .collect();

        for (class, dist) in self.classes.iter().zip(&per_class) {
            if let FeatureDistribution::Continuous { std, .. } = dist {
                if std.is_nan() || *std <= 0.0 {
                    log::warn!(
                        "Feature '{name}' has degenerate standard deviation {std} for class '{}'",
                        class.label
                    );
                }
            }
        }

        self.features.push(FeatureParameters {
            name: name.to_string(),
            kind: column.kind(),
            per_class,
        });
        Ok(self)
    }

    /// Freeze the accumulated statistics.
    pub fn build(self) -> ParameterStore {
        ParameterStore {
            classes: self.classes,
            features: self.features,
        }
    }
}
