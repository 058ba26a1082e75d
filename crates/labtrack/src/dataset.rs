//! JSON bundle of every entity collection.
//!
//! A dataset file is one object keyed by collection name. Collections that
//! are missing default to empty; navigation references are embedded
//! objects, so each record arrives with its relations already loaded.
//!
//! ```json
//! {
//!   "products": [{ "id": 1, "name": "Resin A", "code": "RA-1" }],
//!   "qcLabels": [{ "id": 7, "labelCode": "L-7", "printed": true }]
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::{
    Batch, Evaluation, KpiRollup, Machine, Measurement, Operator, Product, QcLabel, TestMethod,
    TestResult,
};

/// Errors from loading a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid dataset: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dataset {
    pub products: Vec<Product>,
    pub machines: Vec<Machine>,
    pub operators: Vec<Operator>,
    pub batches: Vec<Batch>,
    pub test_methods: Vec<TestMethod>,
    pub test_results: Vec<TestResult>,
    pub measurements: Vec<Measurement>,
    pub evaluations: Vec<Evaluation>,
    pub qc_labels: Vec<QcLabel>,
    pub kpis: Vec<KpiRollup>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        debug!(records = dataset.len(), "parsed dataset");
        Ok(dataset)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading dataset");
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Total number of records across all collections.
    pub fn len(&self) -> usize {
        self.products.len()
            + self.machines.len()
            + self.operators.len()
            + self.batches.len()
            + self.test_methods.len()
            + self.test_results.len()
            + self.measurements.len()
            + self.evaluations.len()
            + self.qc_labels.len()
            + self.kpis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
