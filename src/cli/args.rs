//! Command line argument parsing for the mixnb CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classifier::NaiveBayesConfig;

/// mixnb - Naive Bayes for mixed categorical and continuous data
#[derive(Parser, Debug, Clone)]
#[command(name = "mixnb")]
#[command(about = "Naive Bayes classification of CSV datasets with mixed attribute types")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct MixnbArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl MixnbArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fit a model and print its frequency and likelihood tables
    Train(TrainArgs),

    /// Fit a model and predict the class of every row of another file
    Predict(PredictArgs),

    /// Measure accuracy over repeated random train/test splits
    Evaluate(EvaluateArgs),
}

/// Where the data comes from and which column holds the class.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Name of the class label column
    #[arg(short, long)]
    pub target: String,

    /// CSV field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,
}

/// Classifier settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ClassifierArgs {
    /// Constant added to categorical likelihood denominators
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Floor for continuous standard deviations (unguarded when absent)
    #[arg(long)]
    pub min_std: Option<f64>,

    /// Score prediction rows in parallel
    #[arg(long)]
    pub parallel: bool,
}

impl ClassifierArgs {
    /// Apply the given flags on top of `base`.
    pub fn apply(&self, mut base: NaiveBayesConfig) -> NaiveBayesConfig {
        if let Some(epsilon) = self.epsilon {
            base.epsilon = epsilon;
        }
        if let Some(min_std) = self.min_std {
            base.min_std = Some(min_std);
        }
        if self.parallel {
            base.parallel = true;
        }
        base
    }
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Training data (CSV with header)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Training data (CSV with header)
    #[arg(value_name = "TRAIN_FILE")]
    pub train_file: PathBuf,

    /// Rows to classify (CSV with the same feature columns)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    #[command(flatten)]
    pub classifier: ClassifierArgs,
}

/// Arguments for evaluation
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// Dataset (CSV with header)
    #[arg(value_name = "DATA_FILE")]
    pub data_file: PathBuf,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Evaluation configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of iterations (default 10)
    #[arg(short = 'n', long)]
    pub iterations: Option<usize>,

    /// Fraction of rows held out for testing (default 0.3)
    #[arg(long)]
    pub test_ratio: Option<f64>,

    /// Seed of the first iteration; iteration i uses seed + i
    #[arg(long, conflicts_with = "seeds")]
    pub seed: Option<u64>,

    /// Explicit per-iteration seeds (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub seeds: Vec<u64>,

    #[command(flatten)]
    pub classifier: ClassifierArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
