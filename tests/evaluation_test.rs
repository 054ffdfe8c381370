//! Integration tests for the repeated hold-out evaluation.

use std::io::Write;

use mixnb::classifier::NaiveBayesConfig;
use mixnb::dataset::{Column, CsvLoader, Table};
use mixnb::error::Result;
use mixnb::evaluation::{EvaluationConfig, SeedPolicy, evaluate_naive_bayes};

/// Two well separated classes with a categorical and a continuous feature.
fn separated_dataset() -> (Table, Vec<String>) {
    let mut shape = Vec::new();
    let mut width = Vec::new();
    let mut labels = Vec::new();

    for i in 0..30 {
        let jitter = (i % 5) as f64 * 0.1;
        if i % 2 == 0 {
            shape.push(if i % 3 == 0 { "round" } else { "oval" });
            width.push(1.0 + jitter);
            labels.push("small".to_string());
        } else {
            shape.push(if i % 3 == 0 { "square" } else { "oblong" });
            width.push(8.0 + jitter);
            labels.push("large".to_string());
        }
    }

    let table = Table::from_columns(vec![
        ("shape".to_string(), Column::categorical(shape)),
        ("width".to_string(), Column::Continuous(width)),
    ])
    .unwrap();
    (table, labels)
}

#[test]
fn test_evaluation_is_reproducible() -> Result<()> {
    let (table, labels) = separated_dataset();
    let config = EvaluationConfig::default()
        .with_iterations(5)
        .with_seed_policy(SeedPolicy::Explicit(vec![9, 3, 27, 81, 1]));

    let first = evaluate_naive_bayes(&config, &table, &labels)?;
    let second = evaluate_naive_bayes(&config, &table, &labels)?;

    assert_eq!(first.accuracies(), second.accuracies());
    assert_eq!(first.mean_accuracy, second.mean_accuracy);
    assert_eq!(first.iterations.len(), 5);
    Ok(())
}

#[test]
fn test_evaluation_mean_is_arithmetic_mean() -> Result<()> {
    let (table, labels) = separated_dataset();
    let config = EvaluationConfig::default();

    let report = evaluate_naive_bayes(&config, &table, &labels)?;
    assert_eq!(report.iterations.len(), 10);
    assert_eq!(report.classifier, "naive_bayes");

    let accuracies = report.accuracies();
    let mean = accuracies.iter().sum::<f64>() / accuracies.len() as f64;
    assert_eq!(report.mean_accuracy, mean);
    assert!(accuracies.iter().all(|&a| (0.0..=1.0).contains(&a)));
    for (i, it) in report.iterations.iter().enumerate() {
        assert_eq!(it.iteration, i + 1);
        assert_eq!(it.seed, i as u64);
        assert_eq!(it.test_rows, 9);
        assert_eq!(it.train_rows, 21);
    }
    Ok(())
}

#[test]
fn test_evaluation_separates_clear_classes() -> Result<()> {
    let (table, labels) = separated_dataset();
    let config = EvaluationConfig::default().with_iterations(3);

    let report = evaluate_naive_bayes(&config, &table, &labels)?;
    // Shapes never overlap between classes, so only a shape missing from the
    // training partition can cause a miss
    assert!(report.mean_accuracy > 0.5);
    Ok(())
}

#[test]
fn test_evaluation_from_csv_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "petal_length,petal_width,color,iris")?;
    for i in 0..12 {
        let d = (i % 4) as f64 * 0.1;
        writeln!(file, "{},{},purple,setosa", 1.4 + d, 0.2 + d / 2.0)?;
        writeln!(file, "{},{},blue,versicolor", 4.5 + d, 1.4 + d / 2.0)?;
        writeln!(file, "{},{},purple,virginica", 6.0 + d, 2.2 + d / 2.0)?;
    }
    file.flush()?;

    let data = CsvLoader::new("iris").load_path(file.path())?;
    assert_eq!(data.features.n_rows(), 36);

    let config = EvaluationConfig::default()
        .with_iterations(4)
        .with_classifier(NaiveBayesConfig::default().with_min_std(1e-3));
    let first = evaluate_naive_bayes(&config, &data.features, &data.labels)?;
    let second = evaluate_naive_bayes(&config, &data.features, &data.labels)?;

    assert_eq!(first, second);
    assert_eq!(first.mean_accuracy, 1.0);
    Ok(())
}
