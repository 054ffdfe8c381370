//! Split / fit / predict / score loop.

use serde::{Deserialize, Serialize};

use crate::classifier::{Classifier, NaiveBayes};
use crate::dataset::{Table, train_test_split};
use crate::error::{NaiveBayesError, Result};
use crate::evaluation::config::EvaluationConfig;
use crate::evaluation::metrics::accuracy;

/// Outcome of one evaluation round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IterationResult {
    /// One-based round number
    pub iteration: usize,
    /// Seed used for the split
    pub seed: u64,
    pub train_rows: usize,
    pub test_rows: usize,
    /// Correct predictions / test rows
    pub accuracy: f64,
}

/// Outcome of a whole evaluation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub classifier: String,
    pub iterations: Vec<IterationResult>,
    /// Arithmetic mean of the per-round accuracies
    pub mean_accuracy: f64,
}

impl EvaluationReport {
    /// Per-round accuracies in round order.
    pub fn accuracies(&self) -> Vec<f64> {
        self.iterations.iter().map(|it| it.accuracy).collect()
    }
}

/// Run a repeated hold-out evaluation.
///
/// `factory` builds a fresh, untrained classifier for every round; the
/// classifier is used only through [`Classifier::fit`] and
/// [`Classifier::predict`].
pub fn evaluate<C, F>(
    config: &EvaluationConfig,
    features: &Table,
    labels: &[String],
    factory: F,
) -> Result<EvaluationReport>
where
    C: Classifier,
    F: Fn() -> Result<C>,
{
    config.validate()?;

    let mut iterations = Vec::with_capacity(config.iterations);
    let mut name = String::new();

    for i in 0..config.iterations {
        let seed = config.seed_policy.seed(i).ok_or_else(|| {
            NaiveBayesError::invalid_config(format!("no seed for iteration {}", i + 1))
        })?;
        let split = train_test_split(features, labels, config.test_ratio, seed)?;

        let mut classifier = factory()?;
        classifier.fit(&split.train_features, &split.train_labels)?;
        let predictions = classifier.predict(&split.test_features)?;
        let score = accuracy(&split.test_labels, &predictions)?;

        log::info!(
            "Iteration {}: accuracy {score:.4} (seed {seed}, {} test rows)",
            i + 1,
            split.test_labels.len()
        );

        if name.is_empty() {
            name = classifier.name().to_string();
        }
        iterations.push(IterationResult {
            iteration: i + 1,
            seed,
            train_rows: split.train_labels.len(),
            test_rows: split.test_labels.len(),
            accuracy: score,
        });
    }

    let mean_accuracy =
        iterations.iter().map(|it| it.accuracy).sum::<f64>() / iterations.len() as f64;
    log::info!("Mean accuracy over {} iterations: {mean_accuracy:.4}", iterations.len());

    Ok(EvaluationReport {
        classifier: name,
        iterations,
        mean_accuracy,
    })
}

/// [`evaluate`] with a [`NaiveBayes`] built from `config.classifier`.
pub fn evaluate_naive_bayes(
    config: &EvaluationConfig,
    features: &Table,
    labels: &[String],
) -> Result<EvaluationReport> {
    evaluate(config, features, labels, || {
        NaiveBayes::with_config(config.classifier.clone())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Column;
    use crate::evaluation::config::SeedPolicy;

    /// A classifier that always answers with the first training label.
    struct FirstLabel {
        label: Option<String>,
    }

    impl Classifier for FirstLabel {
        fn fit(&mut self, _features: &Table, labels: &[String]) -> Result<()> {
            self.label = labels.first().cloned();
            Ok(())
        }

        fn predict(&self, features: &Table) -> Result<Vec<String>> {
            let label = self.label.clone().ok_or(NaiveBayesError::NotFitted {
                operation: "predict",
            })?;
            Ok(vec![label; features.n_rows()])
        }

        fn name(&self) -> &str {
            "first_label"
        }
    }

    fn constant_dataset(n: usize) -> (Table, Vec<String>) {
        let table = Table::from_columns(vec![(
            "x".to_string(),
            Column::Continuous((0..n).map(|i| i as f64).collect()),
        )])
        .unwrap();
        (table, vec!["same".to_string(); n])
    }

    #[test]
    fn test_evaluate_with_custom_classifier() {
        let (table, labels) = constant_dataset(10);
        let config = EvaluationConfig::default().with_iterations(3);

        let report = evaluate(&config, &table, &labels, || Ok(FirstLabel { label: None })).unwrap();

        assert_eq!(report.classifier, "first_label");
        assert_eq!(report.iterations.len(), 3);
        assert_eq!(report.accuracies(), vec![1.0, 1.0, 1.0]);
        assert_eq!(report.mean_accuracy, 1.0);
        assert_eq!(
            report.iterations.iter().map(|it| it.seed).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert!(report.iterations.iter().all(|it| it.test_rows == 3 && it.train_rows == 7));
    }

    #[test]
    fn test_evaluate_uses_explicit_seeds() {
        let (table, labels) = constant_dataset(10);
        let config = EvaluationConfig::default()
            .with_iterations(2)
            .with_seed_policy(SeedPolicy::Explicit(vec![42, 7]));

        let report = evaluate(&config, &table, &labels, || Ok(FirstLabel { label: None })).unwrap();
        assert_eq!(report.iterations[0].seed, 42);
        assert_eq!(report.iterations[1].seed, 7);
    }

    #[test]
    fn test_evaluate_rejects_invalid_config() {
        let (table, labels) = constant_dataset(10);
        let config = EvaluationConfig::default().with_iterations(0);
        assert!(evaluate_naive_bayes(&config, &table, &labels).is_err());
    }
}
