//! Naive Bayes classification over mixed attribute types.
//!
//! # Architecture
//!
//! - `Classifier` trait: fit/predict interface used by the evaluation harness
//! - `NaiveBayes`: the classifier
//! - `ParameterStoreBuilder` / `ParameterStore`: training statistics, built
//!   once per fit and immutable afterwards
//! - `gaussian_density` / `categorical_likelihood`: per-feature likelihoods
//! - `ParameterReport`: inspection dump of the learned tables

mod config;
mod likelihood;
mod naive_bayes;
mod params;
mod report;
mod traits;

pub use config::NaiveBayesConfig;
pub use likelihood::{DEFAULT_EPSILON, categorical_likelihood, gaussian_density};
pub use naive_bayes::NaiveBayes;
pub use params::{
    ClassPrior, FeatureDistribution, FeatureParameters, ParameterStore, ParameterStoreBuilder,
};
pub use report::{ClassEntry, FeatureEntry, ParameterReport};
pub use traits::Classifier;
