use crate::domain::record::InferenceRecord;
use anyhow::Result;
use serde::Serialize;

pub mod forest;
pub mod mock;

#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub kind: String,
    pub name: String,
    pub version: String,
    pub trees: usize,
    pub features: Vec<String>,
}

/// A pre-trained binary classifier. Loaded once at startup and only read afterwards.
pub trait Classifier: Send + Sync {
    fn summary(&self) -> ModelSummary;

    /// Returns one prediction per input row, in row order.
    fn predict(&self, rows: &[InferenceRecord]) -> Result<Vec<i64>>;
}
