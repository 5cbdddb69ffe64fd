use crate::classifier::{Classifier, ModelSummary};
use crate::domain::record::{InferenceRecord, FEATURE_NAMES};
use anyhow::{bail, Result};

#[derive(Debug, Clone)]
pub enum MockBehavior {
    Always(i64),
    NoOutput,
    Unavailable,
}

pub struct MockClassifier {
    pub behavior: MockBehavior,
}

impl MockClassifier {
    pub fn always(prediction: i64) -> Self {
        Self {
            behavior: MockBehavior::Always(prediction),
        }
    }
}

impl Classifier for MockClassifier {
    fn summary(&self) -> ModelSummary {
        ModelSummary {
            kind: "mock".to_string(),
            name: format!("{:?}", self.behavior),
            version: String::new(),
            trees: 0,
            features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn predict(&self, rows: &[InferenceRecord]) -> Result<Vec<i64>> {
        match self.behavior {
            MockBehavior::Always(p) => Ok(vec![p; rows.len()]),
            MockBehavior::NoOutput => Ok(Vec::new()),
            MockBehavior::Unavailable => bail!("mock classifier unavailable"),
        }
    }
}
