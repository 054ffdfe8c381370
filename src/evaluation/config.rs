//! Evaluation configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classifier::NaiveBayesConfig;
use crate::error::{NaiveBayesError, Result};

/// How each iteration's split seed is chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeedPolicy {
    /// Seed of iteration `i` is `start + i`.
    Sequential { start: u64 },
    /// One explicit seed per iteration.
    Explicit(Vec<u64>),
}

impl Default for SeedPolicy {
    fn default() -> Self {
        SeedPolicy::Sequential { start: 0 }
    }
}

impl SeedPolicy {
    /// Seed for the zero-based `iteration`.
    pub fn seed(&self, iteration: usize) -> Option<u64> {
        match self {
            SeedPolicy::Sequential { start } => start.checked_add(iteration as u64),
            SeedPolicy::Explicit(seeds) => seeds.get(iteration).copied(),
        }
    }
}

/// Configuration for [`evaluate`](super::evaluate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Number of split/fit/predict rounds.
    pub iterations: usize,
    /// Fraction of rows held out for testing.
    pub test_ratio: f64,
    /// Split seed of each round.
    pub seed_policy: SeedPolicy,
    /// Configuration of every classifier trained during the run.
    pub classifier: NaiveBayesConfig,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            test_ratio: 0.3,
            seed_policy: SeedPolicy::default(),
            classifier: NaiveBayesConfig::default(),
        }
    }
}

impl EvaluationConfig {
    /// Load a configuration from a JSON file. Missing keys take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EvaluationConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the number of iterations.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the held-out fraction.
    #[must_use]
    pub fn with_test_ratio(mut self, test_ratio: f64) -> Self {
        self.test_ratio = test_ratio;
        self
    }

    /// Sets the seed policy.
    #[must_use]
    pub fn with_seed_policy(mut self, seed_policy: SeedPolicy) -> Self {
        self.seed_policy = seed_policy;
        self
    }

    /// Sets the classifier configuration.
    #[must_use]
    pub fn with_classifier(mut self, classifier: NaiveBayesConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(NaiveBayesError::invalid_config("iterations must be at least 1"));
        }
        if !(self.test_ratio > 0.0 && self.test_ratio < 1.0) {
            return Err(NaiveBayesError::invalid_config(format!(
                "test_ratio must be in (0, 1), got {}",
                self.test_ratio
            )));
        }
        if let SeedPolicy::Explicit(seeds) = &self.seed_policy {
            if seeds.len() < self.iterations {
                return Err(NaiveBayesError::invalid_config(format!(
                    "{} iterations need {} seeds, got {}",
                    self.iterations,
                    self.iterations,
                    seeds.len()
                )));
            }
        }
        self.classifier.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluation_config_default() {
        let config = EvaluationConfig::default();
        assert_eq!(config.iterations, 10);
        assert_eq!(config.test_ratio, 0.3);
        assert_eq!(config.seed_policy, SeedPolicy::Sequential { start: 0 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seed_policy() {
        let sequential = SeedPolicy::Sequential { start: 5 };
        assert_eq!(sequential.seed(0), Some(5));
        assert_eq!(sequential.seed(3), Some(8));

        let explicit = SeedPolicy::Explicit(vec![11, 7]);
        assert_eq!(explicit.seed(1), Some(7));
        assert_eq!(explicit.seed(2), None);
    }

    #[test]
    fn test_evaluation_config_validation() {
        assert!(EvaluationConfig::default().with_iterations(0).validate().is_err());
        assert!(EvaluationConfig::default().with_test_ratio(1.5).validate().is_err());
        assert!(
            EvaluationConfig::default()
                .with_iterations(3)
                .with_seed_policy(SeedPolicy::Explicit(vec![1, 2]))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_evaluation_config_from_json_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"iterations": 4, "seed_policy": {{"explicit": [3, 1, 4, 1]}}, "classifier": {{"min_std": 0.01}}}}"#
        )
        .unwrap();

        let config = EvaluationConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.iterations, 4);
        assert_eq!(config.test_ratio, 0.3);
        assert_eq!(config.seed_policy, SeedPolicy::Explicit(vec![3, 1, 4, 1]));
        assert_eq!(config.classifier.min_std, Some(0.01));
    }
}
