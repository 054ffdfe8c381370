//! Naive Bayes over mixed categorical and continuous features.

use rayon::prelude::*;

use crate::classifier::config::NaiveBayesConfig;
use crate::classifier::likelihood::{categorical_likelihood, gaussian_density};
use crate::classifier::params::{
    FeatureDistribution, FeatureParameters, ParameterStore, ParameterStoreBuilder,
};
use crate::classifier::report::ParameterReport;
use crate::classifier::traits::Classifier;
use crate::dataset::{Column, Table};
use crate::error::{NaiveBayesError, Result};

/// Naive Bayes classifier.
///
/// Categorical features use per-class frequency tables, continuous features
/// use a per-class Gaussian density. The posterior score of a class is its
/// prior times the product of the feature likelihoods; the prediction is the
/// class with the highest score.
///
/// # Example
///
/// ```
/// use mixnb::classifier::NaiveBayes;
/// use mixnb::dataset::{Column, Table, Value};
///
/// let train = Table::from_columns(vec![
///     ("color".to_string(), Column::categorical(["red", "red", "blue"])),
///     ("size".to_string(), Column::Continuous(vec![1.0, 1.2, 5.0])),
/// ])
/// .unwrap();
/// let labels: Vec<String> = ["A", "A", "B"].iter().map(|s| s.to_string()).collect();
///
/// let mut model = NaiveBayes::new();
/// model.fit(&train, &labels).unwrap();
///
/// let query = Table::from_rows(
///     &["color", "size"],
///     &[vec![Value::from("red"), Value::from(1.1)]],
/// )
/// .unwrap();
/// assert_eq!(model.predict(&query).unwrap(), vec!["A"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    config: NaiveBayesConfig,
    /// Learned parameters, `None` until the first successful `fit`
    store: Option<ParameterStore>,
}

/// A prediction-time column matched to its learned parameters.
type BoundFeature<'a> = (&'a FeatureParameters, &'a Column);

impl NaiveBayes {
    /// Creates an untrained classifier with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an untrained classifier with the given configuration.
    pub fn with_config(config: NaiveBayesConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: None,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &NaiveBayesConfig {
        &self.config
    }

    /// Learned parameters, if fitted.
    pub fn parameters(&self) -> Option<&ParameterStore> {
        self.store.as_ref()
    }

    /// Class labels in the order used for scoring and tie-breaking.
    pub fn classes(&self) -> Result<Vec<&str>> {
        Ok(self.fitted("classes")?.labels())
    }

    /// Fits the model to a training table.
    ///
    /// Any previously learned parameters are replaced as a whole, and only
    /// once the new ones are complete.
    pub fn fit(&mut self, features: &Table, labels: &[String]) -> Result<()> {
        if features.n_rows() != labels.len() {
            return Err(NaiveBayesError::dimension_mismatch(
                format!("{} labels", features.n_rows()),
                labels.len(),
            ));
        }
        if features.is_empty() {
            return Err(NaiveBayesError::EmptyTrainingData);
        }

        let mut builder = ParameterStoreBuilder::new(labels)?;
        for (name, column) in features.columns() {
            builder.add_feature(name, column)?;
        }
        let store = builder.build();

        log::debug!(
            "Fitted {} classes over {} features from {} rows",
            store.classes().len(),
            store.features().len(),
            labels.len()
        );
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("\n{}", ParameterReport::from(&store));
        }

        self.store = Some(store);
        Ok(())
    }

    /// Predicts the most probable class of every row.
    pub fn predict(&self, features: &Table) -> Result<Vec<String>> {
        let store = self.fitted("predict")?;
        let labels = store.labels();

        self.map_rows("predict", features, |scores| {
            let best = argmax(&scores);
            labels[best].to_string()
        })
    }

    /// Unnormalised posterior score of every class, per row.
    ///
    /// Each inner vector is parallel to [`NaiveBayes::classes`].
    pub fn predict_scores(&self, features: &Table) -> Result<Vec<Vec<f64>>> {
        self.map_rows("predict_scores", features, |scores| scores)
    }

    /// Summary of the learned frequency and likelihood tables.
    pub fn report(&self) -> Result<ParameterReport> {
        Ok(ParameterReport::from(self.fitted("report")?))
    }

    fn fitted(&self, operation: &'static str) -> Result<&ParameterStore> {
        self.store
            .as_ref()
            .ok_or(NaiveBayesError::NotFitted { operation })
    }

    /// Score every row and map the class scores through `f`, keeping row order.
    fn map_rows<T, F>(&self, operation: &'static str, features: &Table, f: F) -> Result<Vec<T>>
    where
        T: Send,
        F: Fn(Vec<f64>) -> T + Sync,
    {
        let store = self.fitted(operation)?;
        let bound = bind_schema(store, features)?;

        if self.config.parallel {
            (0..features.n_rows())
                .into_par_iter()
                .map(|row| self.score_row(store, &bound, row).map(&f))
                .collect()
        } else {
            (0..features.n_rows())
                .map(|row| self.score_row(store, &bound, row).map(&f))
                .collect()
        }
    }

    /// Posterior score of every class for one row.
    fn score_row(
        &self,
        store: &ParameterStore,
        bound: &[BoundFeature<'_>],
        row: usize,
    ) -> Result<Vec<f64>> {
        store
            .classes()
            .iter()
            .enumerate()
            .map(|(class_idx, class)| -> Result<f64> {
                let mut score = class.prior;
                for (params, column) in bound {
                    let dist = params
                        .per_class
                        .get(class_idx)
                        .ok_or_else(|| {
                            NaiveBayesError::missing_parameter(&params.name, &class.label)
                        })?;
                    score *= self.likelihood(dist, column, row)?;
                }
                Ok(score)
            })
            .collect()
    }

    /// Likelihood of the value at `row` under one class distribution.
    fn likelihood(&self, dist: &FeatureDistribution, column: &Column, row: usize) -> Result<f64> {
        match (dist, column) {
            (FeatureDistribution::Categorical { frequencies }, Column::Categorical(values)) => Ok(
                categorical_likelihood(frequencies, &values[row], self.config.epsilon),
            ),
            (FeatureDistribution::Continuous { mean, std }, Column::Continuous(values)) => {
                let std = match self.config.min_std {
                    Some(floor) => std.max(floor),
                    None => *std,
                };
                Ok(gaussian_density(values[row], *mean, std))
            }
            _ => Err(NaiveBayesError::schema(format!(
                "expected a {} column, got {}",
                dist.kind(),
                column.kind()
            ))),
        }
    }
}

impl Classifier for NaiveBayes {
    fn fit(&mut self, features: &Table, labels: &[String]) -> Result<()> {
        NaiveBayes::fit(self, features, labels)
    }

    fn predict(&self, features: &Table) -> Result<Vec<String>> {
        NaiveBayes::predict(self, features)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

/// Match every column of `features` with its learned parameters.
///
/// The table must carry exactly the training features, with the same kinds.
/// A table without rows carries no values, so only its names are checked.
/// Columns keep the order of `features`.
fn bind_schema<'a>(store: &'a ParameterStore, features: &'a Table) -> Result<Vec<BoundFeature<'a>>> {
    let bound = features
        .columns()
        .map(|(name, column)| -> Result<BoundFeature<'a>> {
            let params = store.feature(name).ok_or_else(|| {
                NaiveBayesError::schema(format!("feature '{name}' was not seen during training"))
            })?;
            if !features.is_empty() && params.kind != column.kind() {
                return Err(NaiveBayesError::schema(format!(
                    "feature '{name}' was trained as {} but is {} here",
                    params.kind,
                    column.kind()
                )));
            }
            Ok((params, column))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(missing) = store
        .features()
        .iter()
        .find(|f| features.column(&f.name).is_none())
    {
        return Err(NaiveBayesError::schema(format!(
            "feature '{}' is missing from the input",
            missing.name
        )));
    }

    Ok(bound)
}

/// Index of the highest score. The first class wins ties, and a later class
/// replaces the current best only with a strictly greater score.
fn argmax(scores: &[f64]) -> usize {
    let mut best = 0;
    for (idx, &score) in scores.iter().enumerate().skip(1) {
        if score > scores[best] {
            best = idx;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn color_size_table() -> (Table, Vec<String>) {
        let table = Table::from_columns(vec![
            ("color".to_string(), Column::categorical(["red", "red", "blue"])),
            ("size".to_string(), Column::Continuous(vec![1.0, 1.2, 5.0])),
        ])
        .unwrap();
        (table, labels(&["A", "A", "B"]))
    }

    fn fitted(config: NaiveBayesConfig) -> NaiveBayes {
        let (table, labels) = color_size_table();
        let mut model = NaiveBayes::with_config(config).unwrap();
        model.fit(&table, &labels).unwrap();
        model
    }

    fn query(color: &str, size: f64) -> Table {
        Table::from_rows(
            &["color", "size"],
            &[vec![Value::from(color), Value::from(size)]],
        )
        .unwrap()
    }

    #[test]
    fn test_priors() {
        let model = fitted(NaiveBayesConfig::default());
        let store = model.parameters().unwrap();
        assert!((store.prior("A").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((store.prior("B").unwrap() - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(model.classes().unwrap(), vec!["A", "B"]);
    }

    #[test]
    fn test_predict_red_small_is_a() {
        let model = fitted(NaiveBayesConfig::default());
        assert_eq!(model.predict(&query("red", 1.1)).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_predict_blue_large_is_b_with_std_floor() {
        // Class B has a single row, so its deviation is undefined without a floor
        let model = fitted(NaiveBayesConfig::default().with_min_std(1e-3));
        assert_eq!(model.predict(&query("blue", 5.0)).unwrap(), vec!["B"]);
    }

    #[test]
    fn test_unguarded_degenerate_std_propagates() {
        let model = fitted(NaiveBayesConfig::default());
        let scores = model.predict_scores(&query("blue", 5.0)).unwrap();
        // Class A never saw "blue"; class B has an undefined deviation
        assert_eq!(scores[0][0], 0.0);
        assert!(scores[0][1].is_nan());
        // NaN never beats the earlier class
        assert_eq!(model.predict(&query("blue", 5.0)).unwrap(), vec!["A"]);
    }

    #[test]
    fn test_predict_scores_match_formula() {
        let model = fitted(NaiveBayesConfig::default());
        let scores = model.predict_scores(&query("red", 1.1)).unwrap();

        let std_a = (0.02_f64).sqrt();
        let expected_a =
            (2.0 / 3.0) * (2.0 / (2.0 + 1e-6)) * gaussian_density(1.1, 1.1, std_a);
        assert!((scores[0][0] - expected_a).abs() < 1e-9);
    }

    #[test]
    fn test_predict_before_fit() {
        let model = NaiveBayes::new();
        assert!(matches!(
            model.predict(&query("red", 1.0)),
            Err(NaiveBayesError::NotFitted { .. })
        ));
        assert!(model.report().is_err());
    }

    #[test]
    fn test_not_fitted_names_operation() {
        let model = NaiveBayes::new();
        assert!(matches!(
            model.predict_scores(&query("red", 1.0)),
            Err(NaiveBayesError::NotFitted {
                operation: "predict_scores"
            })
        ));
        assert!(matches!(
            model.predict(&query("red", 1.0)),
            Err(NaiveBayesError::NotFitted {
                operation: "predict"
            })
        ));
    }

    #[test]
    fn test_predict_empty_table() {
        let model = fitted(NaiveBayesConfig::default());
        // Without rows every column defaults to continuous
        let empty = Table::from_rows::<&str>(&["color", "size"], &[]).unwrap();
        assert_eq!(model.predict(&empty).unwrap(), Vec::<String>::new());
        assert!(model.predict_scores(&empty).unwrap().is_empty());

        // Names are still checked
        let unknown = Table::from_rows::<&str>(&["color", "weight"], &[]).unwrap();
        assert!(matches!(
            model.predict(&unknown),
            Err(NaiveBayesError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_schema_mismatch() {
        let model = fitted(NaiveBayesConfig::default());

        let unknown = Table::from_rows(
            &["color", "size", "weight"],
            &[vec![Value::from("red"), Value::from(1.0), Value::from(3.0)]],
        )
        .unwrap();
        assert!(matches!(
            model.predict(&unknown),
            Err(NaiveBayesError::SchemaMismatch(_))
        ));

        let missing = Table::from_rows(&["color"], &[vec![Value::from("red")]]).unwrap();
        assert!(matches!(
            model.predict(&missing),
            Err(NaiveBayesError::SchemaMismatch(_))
        ));

        let retyped = Table::from_rows(
            &["color", "size"],
            &[vec![Value::from("red"), Value::from("small")]],
        )
        .unwrap();
        assert!(matches!(
            model.predict(&retyped),
            Err(NaiveBayesError::SchemaMismatch(_))
        ));
    }

    #[test]
    fn test_fit_rejects_bad_input() {
        let (table, _) = color_size_table();
        let mut model = NaiveBayes::new();
        assert!(matches!(
            model.fit(&table, &labels(&["A", "B"])),
            Err(NaiveBayesError::DimensionMismatch { .. })
        ));

        let empty = Table::from_columns(vec![("x".to_string(), Column::Continuous(vec![]))]).unwrap();
        assert!(matches!(
            model.fit(&empty, &[]),
            Err(NaiveBayesError::EmptyTrainingData)
        ));
        assert!(model.parameters().is_none());
    }

    #[test]
    fn test_refit_replaces_parameters() {
        let mut model = fitted(NaiveBayesConfig::default());

        let table = Table::from_columns(vec![(
            "shape".to_string(),
            Column::categorical(["round", "square"]),
        )])
        .unwrap();
        model.fit(&table, &labels(&["X", "Y"])).unwrap();

        let store = model.parameters().unwrap();
        assert_eq!(store.labels(), vec!["X", "Y"]);
        assert!(store.feature("color").is_none());
        assert!(model.predict(&query("red", 1.1)).is_err());
    }

    #[test]
    fn test_argmax_ties_pick_first() {
        assert_eq!(argmax(&[0.0, 0.0, 0.0]), 0);
        assert_eq!(argmax(&[0.1, 0.3, 0.3]), 1);
        assert_eq!(argmax(&[f64::NAN, 0.5]), 0);
        assert_eq!(argmax(&[0.2, f64::NAN, 0.5]), 2);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let train = Table::from_columns(vec![
            (
                "color".to_string(),
                Column::categorical(["red", "red", "blue", "blue", "green", "red"]),
            ),
            (
                "size".to_string(),
                Column::Continuous(vec![1.0, 1.4, 5.0, 5.5, 3.0, 0.8]),
            ),
        ])
        .unwrap();
        let y = labels(&["A", "A", "B", "B", "B", "A"]);

        let mut sequential = NaiveBayes::new();
        sequential.fit(&train, &y).unwrap();
        let mut parallel =
            NaiveBayes::with_config(NaiveBayesConfig::default().with_parallel(true)).unwrap();
        parallel.fit(&train, &y).unwrap();

        assert_eq!(sequential.predict(&train).unwrap(), parallel.predict(&train).unwrap());
        assert_eq!(sequential.predict(&train).unwrap(), y);
    }

    #[test]
    fn test_classifier_trait_name() {
        let model = NaiveBayes::new();
        assert_eq!(Classifier::name(&model), "naive_bayes");
    }
}
