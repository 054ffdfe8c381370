//! Command implementations for the mixnb CLI.

use std::time::Instant;

use anyhow::{Context, Result};

use crate::classifier::{NaiveBayes, NaiveBayesConfig};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dataset::{CsvLoader, LabeledTable};
use crate::evaluation::{EvaluationConfig, SeedPolicy, evaluate_naive_bayes};

/// Execute a CLI command.
pub fn execute_command(args: MixnbArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args, &args),
        Command::Predict(predict_args) => predict(predict_args, &args),
        Command::Evaluate(evaluate_args) => run_evaluation(evaluate_args, &args),
    }
}

/// Fit on a dataset and print the learned tables.
fn train(args: &TrainArgs, cli_args: &MixnbArgs) -> Result<()> {
    let data = load_dataset(&args.data_file, &args.dataset)?;
    let mut model = build_model(&args.classifier)?;

    let start_time = Instant::now();
    model
        .fit(&data.features, &data.labels)
        .context("training failed")?;
    let duration = start_time.elapsed();

    output_result(
        "Model trained successfully",
        &TrainingResult {
            training_rows: data.labels.len(),
            features: data.features.n_columns(),
            duration_ms: duration.as_millis() as u64,
            parameters: model.report()?,
        },
        cli_args,
    )?;

    Ok(())
}

/// Fit on one file and classify the rows of another.
fn predict(args: &PredictArgs, cli_args: &MixnbArgs) -> Result<()> {
    let results = classify(args)?;
    output_result("Predictions", &results, cli_args)?;
    Ok(())
}

/// Fit on the training file, then read the input file against the learned
/// schema and predict every row.
fn classify(args: &PredictArgs) -> Result<PredictionResults> {
    let data = load_dataset(&args.train_file, &args.dataset)?;
    let mut model = build_model(&args.classifier)?;
    model
        .fit(&data.features, &data.labels)
        .context("training failed")?;

    let schema = model
        .parameters()
        .context("model is not fitted")?
        .schema();
    let input = loader(&args.dataset)?
        .load_features_path(&args.input_file, &schema)
        .with_context(|| format!("failed to load {}", args.input_file.display()))?;

    let start_time = Instant::now();
    let predictions = model.predict(&input).context("prediction failed")?;
    let duration = start_time.elapsed();

    log::info!(
        "Predicted {} rows in {}ms",
        predictions.len(),
        duration.as_millis()
    );

    Ok(PredictionResults {
        predictions,
        duration_ms: duration.as_millis() as u64,
    })
}

/// Repeated train/test evaluation.
fn run_evaluation(args: &EvaluateArgs, cli_args: &MixnbArgs) -> Result<()> {
    let config = evaluation_config(args)?;
    let data = load_dataset(&args.data_file, &args.dataset)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Evaluating on {} rows: {} iterations, test ratio {}",
            data.labels.len(),
            config.iterations,
            config.test_ratio
        );
    }

    let report = evaluate_naive_bayes(&config, &data.features, &data.labels)
        .context("evaluation failed")?;

    output_result("Evaluation complete", &report, cli_args)?;

    Ok(())
}

/// Build the evaluation configuration: file (or defaults), then CLI flags.
fn evaluation_config(args: &EvaluateArgs) -> Result<EvaluationConfig> {
    let mut config = match &args.config {
        Some(path) => EvaluationConfig::from_json_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EvaluationConfig::default(),
    };

    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    if let Some(test_ratio) = args.test_ratio {
        config.test_ratio = test_ratio;
    }
    if let Some(start) = args.seed {
        config.seed_policy = SeedPolicy::Sequential { start };
    }
    if !args.seeds.is_empty() {
        config.seed_policy = SeedPolicy::Explicit(args.seeds.clone());
    }
    config.classifier = args.classifier.apply(config.classifier);

    config.validate()?;
    Ok(config)
}

fn build_model(args: &ClassifierArgs) -> Result<NaiveBayes> {
    let config = args.apply(NaiveBayesConfig::default());
    Ok(NaiveBayes::with_config(config)?)
}

fn loader(args: &DatasetArgs) -> Result<CsvLoader> {
    Ok(CsvLoader::new(args.target.clone()).with_delimiter(args.delimiter)?)
}

fn load_dataset(path: &std::path::Path, args: &DatasetArgs) -> Result<LabeledTable> {
    loader(args)?
        .load_path(path)
        .with_context(|| format!("failed to load {}", path.display()))
}
