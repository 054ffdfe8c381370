//! Output formatting for CLI commands.

use std::fmt;

use serde::Serialize;

use crate::classifier::ParameterReport;
use crate::cli::args::{MixnbArgs, OutputFormat};
use crate::error::Result;
use crate::evaluation::EvaluationReport;

/// Result structure for training.
#[derive(Debug, Serialize)]
pub struct TrainingResult {
    pub training_rows: usize,
    pub features: usize,
    pub duration_ms: u64,
    pub parameters: ParameterReport,
}

/// Result structure for prediction.
#[derive(Debug, Serialize)]
pub struct PredictionResults {
    pub predictions: Vec<String>,
    pub duration_ms: u64,
}

impl fmt::Display for TrainingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Training rows: {}", self.training_rows)?;
        writeln!(f, "Features: {}", self.features)?;
        writeln!(f, "Training time: {}ms", self.duration_ms)?;
        writeln!(f)?;
        write!(f, "{}", self.parameters)
    }
}

impl fmt::Display for PredictionResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for label in &self.predictions {
            writeln!(f, "{label}")?;
        }
        Ok(())
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation Results ({}):", self.classifier)?;
        writeln!(f, "═══════════════════")?;
        for it in &self.iterations {
            writeln!(
                f,
                "Accuracy in iteration {}: {:.4} (seed {}, {} train / {} test rows)",
                it.iteration, it.accuracy, it.seed, it.train_rows, it.test_rows
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Mean accuracy: {:.4}", self.mean_accuracy)
    }
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &MixnbArgs) -> Result<()>
where
    T: Serialize + fmt::Display,
{
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: fmt::Display>(message: &str, result: &T, args: &MixnbArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &MixnbArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
