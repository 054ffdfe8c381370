//! Repeated hold-out evaluation.
//!
//! Each iteration splits the dataset with its own seed, fits a fresh
//! classifier on the training partition and measures accuracy on the test
//! partition. The mean of the per-iteration accuracies summarises the run.

pub mod config;
pub mod harness;
pub mod metrics;

pub use config::{EvaluationConfig, SeedPolicy};
pub use harness::{EvaluationReport, IterationResult, evaluate, evaluate_naive_bayes};
pub use metrics::accuracy;
