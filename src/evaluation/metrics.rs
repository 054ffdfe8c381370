//! Classification metrics.

use crate::error::{NaiveBayesError, Result};

/// Fraction of predictions equal to the true label.
pub fn accuracy<T: PartialEq>(truth: &[T], predictions: &[T]) -> Result<f64> {
    if truth.len() != predictions.len() {
        return Err(NaiveBayesError::dimension_mismatch(
            format!("{} predictions", truth.len()),
            predictions.len(),
        ));
    }
    if truth.is_empty() {
        return Err(NaiveBayesError::dataset(
            "Cannot compute accuracy of zero predictions",
        ));
    }

    let correct = truth
        .iter()
        .zip(predictions)
        .filter(|(t, p)| t == p)
        .count();
    Ok(correct as f64 / truth.len() as f64)
}
