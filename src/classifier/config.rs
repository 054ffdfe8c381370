//! Classifier configuration.

use serde::{Deserialize, Serialize};

use crate::classifier::likelihood::DEFAULT_EPSILON;
use crate::error::{NaiveBayesError, Result};

/// Configuration for [`NaiveBayes`](super::NaiveBayes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NaiveBayesConfig {
    /// Constant added to the categorical likelihood denominator.
    pub epsilon: f64,
    /// Lower bound applied to continuous standard deviations at scoring time.
    ///
    /// `None` leaves zero or undefined deviations unguarded. Setting a floor
    /// changes predictions for degenerate features.
    pub min_std: Option<f64>,
    /// Score prediction rows on the rayon thread pool.
    pub parallel: bool,
}

impl Default for NaiveBayesConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            min_std: None,
            parallel: false,
        }
    }
}

impl NaiveBayesConfig {
    /// Sets the categorical denominator constant.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets the standard deviation floor.
    #[must_use]
    pub fn with_min_std(mut self, min_std: f64) -> Self {
        self.min_std = Some(min_std);
        self
    }

    /// Enables or disables parallel prediction.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(NaiveBayesError::invalid_config(format!(
                "epsilon must be a positive finite number, got {}",
                self.epsilon
            )));
        }
        if let Some(floor) = self.min_std {
            if !(floor.is_finite() && floor > 0.0) {
                return Err(NaiveBayesError::invalid_config(format!(
                    "min_std must be a positive finite number, got {floor}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = NaiveBayesConfig::default();
        assert_eq!(config.epsilon, 1e-6);
        assert_eq!(config.min_std, None);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        assert!(NaiveBayesConfig::default().with_epsilon(0.0).validate().is_err());
        assert!(NaiveBayesConfig::default().with_min_std(-1.0).validate().is_err());
        assert!(NaiveBayesConfig::default().with_min_std(1e-9).validate().is_ok());
    }

    #[test]
    fn test_config_partial_json() {
        let config: NaiveBayesConfig = serde_json::from_str(r#"{"parallel": true}"#).unwrap();
        assert!(config.parallel);
        assert_eq!(config.epsilon, 1e-6);
    }
}
