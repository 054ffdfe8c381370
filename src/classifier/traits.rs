//! Classifier trait definition.

use crate::dataset::Table;
use crate::error::Result;

/// A trainable classifier over labelled feature tables.
///
/// The evaluation harness drives models only through this trait.
pub trait Classifier: Send + Sync {
    /// Learn from `features` and the parallel `labels`, replacing any
    /// previously learned state.
    fn fit(&mut self, features: &Table, labels: &[String]) -> Result<()>;

    /// Predict one label per row of `features`, in row order.
    fn predict(&self, features: &Table) -> Result<Vec<String>>;

    /// Get the name of this classifier for debugging and logging.
    fn name(&self) -> &str;
}
