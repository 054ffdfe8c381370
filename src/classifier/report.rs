//! Human-readable dump of learned parameters.
//!
//! The report lists the frequency table of every categorical feature and the
//! (mean, standard deviation) pair of every continuous feature, per class. It
//! is for inspection only.

use std::fmt;

use serde::Serialize;

use crate::classifier::params::{ClassPrior, FeatureDistribution, ParameterStore};
use crate::dataset::FeatureKind;

/// Per-class view of one feature.
#[derive(Debug, Clone, Serialize)]
pub struct ClassEntry {
    pub class: String,
    #[serde(flatten)]
    pub distribution: FeatureDistribution,
}

/// One feature of the report.
#[derive(Debug, Clone, Serialize)]
pub struct FeatureEntry {
    pub name: String,
    pub kind: FeatureKind,
    pub classes: Vec<ClassEntry>,
}

/// Summary of a trained model.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterReport {
    pub priors: Vec<ClassPrior>,
    pub features: Vec<FeatureEntry>,
}

impl From<&ParameterStore> for ParameterReport {
    fn from(store: &ParameterStore) -> Self {
        let features = store
            .features()
            .iter()
            .map(|feature| FeatureEntry {
                name: feature.name.clone(),
                kind: feature.kind,
                classes: store
                    .classes()
                    .iter()
                    .zip(&feature.per_class)
                    .map(|(class, dist)| ClassEntry {
                        class: class.label.clone(),
                        distribution: dist.clone(),
                    })
                    .collect(),
            })
            .collect();

        ParameterReport {
            priors: store.classes().to_vec(),
            features,
        }
    }
}

impl fmt::Display for ParameterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Class priors:")?;
        writeln!(f, "═════════════")?;
        for class in &self.priors {
            writeln!(f, "{}: {:.4} ({} rows)", class.label, class.prior, class.count)?;
        }

        writeln!(f)?;
        writeln!(f, "Frequency table:")?;
        writeln!(f, "════════════════")?;
        for feature in self.features_of(FeatureKind::Categorical) {
            writeln!(f)?;
            writeln!(f, "Feature: {}", feature.name)?;
            for entry in &feature.classes {
                writeln!(f, "  Class: {}", entry.class)?;
                if let FeatureDistribution::Categorical { frequencies } = &entry.distribution {
                    for (value, count) in frequencies {
                        writeln!(f, "    {value:<16} {count}")?;
                    }
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Likelihood table:")?;
        writeln!(f, "═════════════════")?;
        for feature in self.features_of(FeatureKind::Continuous) {
            writeln!(f)?;
            writeln!(f, "Feature: {}", feature.name)?;
            for entry in &feature.classes {
                if let FeatureDistribution::Continuous { mean, std } = &entry.distribution {
                    writeln!(f, "  Class: {}  mean = {mean:.4}  std = {std:.4}", entry.class)?;
                }
            }
        }
        Ok(())
    }
}

impl ParameterReport {
    fn features_of(&self, kind: FeatureKind) -> impl Iterator<Item = &FeatureEntry> {
        self.features.iter().filter(move |f| f.kind == kind)
    }
}
