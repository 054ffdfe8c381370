//! Seeded train/test split.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::dataset::table::Table;
use crate::error::{NaiveBayesError, Result};

/// The two partitions produced by [`train_test_split`].
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit {
    pub train_features: Table,
    pub train_labels: Vec<String>,
    pub test_features: Table,
    pub test_labels: Vec<String>,
}

/// Split a labelled table into shuffled training and test partitions.
///
/// Row indices are shuffled with a [`StdRng`] seeded from `seed`, then the
/// first `ceil(test_ratio * n)` shuffled rows form the test partition. The
/// same seed always yields the same partitions. Both partitions keep at least
/// one row.
pub fn train_test_split(
    features: &Table,
    labels: &[String],
    test_ratio: f64,
    seed: u64,
) -> Result<TrainTestSplit> {
    let n_rows = features.n_rows();
    if labels.len() != n_rows {
        return Err(NaiveBayesError::dimension_mismatch(
            format!("{n_rows} labels"),
            labels.len(),
        ));
    }
    if !(test_ratio > 0.0 && test_ratio < 1.0) {
        return Err(NaiveBayesError::invalid_config(format!(
            "test_ratio must be in (0, 1), got {test_ratio}"
        )));
    }
    if n_rows < 2 {
        return Err(NaiveBayesError::dataset(format!(
            "Cannot split {n_rows} rows into train and test partitions"
        )));
    }

    let n_test = ((test_ratio * n_rows as f64).ceil() as usize).clamp(1, n_rows - 1);

    let mut indices: Vec<usize> = (0..n_rows).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let (test_idx, train_idx) = indices.split_at(n_test);

    Ok(TrainTestSplit {
        train_features: features.take_rows(train_idx)?,
        train_labels: train_idx.iter().map(|&i| labels[i].clone()).collect(),
        test_features: features.take_rows(test_idx)?,
        test_labels: test_idx.iter().map(|&i| labels[i].clone()).collect(),
    })
}
