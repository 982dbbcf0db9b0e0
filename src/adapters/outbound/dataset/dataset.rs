use crate::measures::domain::{
    Analysis, Branch, Component, Metric, StoredMeasure, StoredPastMeasure,
};
use crate::shared::security::read_checked;
use crate::shared::{MeasuresError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serialized content of a measures database
///
/// Every section is optional so that small fixtures stay readable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub branches: Vec<Branch>,
    #[serde(default)]
    pub analyses: Vec<Analysis>,
    /// Live measures, at most one per (component, metric)
    #[serde(default)]
    pub measures: Vec<StoredMeasure>,
    /// Measures attached to past analyses
    #[serde(default)]
    pub history: Vec<StoredPastMeasure>,
}

impl Dataset {
    /// Parses a dataset document
    ///
    /// # Errors
    /// DatasetParseError naming `path` when the JSON is malformed or the
    /// identities it declares collide
    pub fn from_json(content: &str, path: &Path) -> Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(content).map_err(|e| MeasuresError::DatasetParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;
        dataset.check_identities().map_err(|details| MeasuresError::DatasetParseError {
            path: path.to_path_buf(),
            details,
        })?;
        Ok(dataset)
    }

    fn check_identities(&self) -> std::result::Result<(), String> {
        let mut metric_keys = HashSet::new();
        let mut metric_ids = HashSet::new();
        for metric in &self.metrics {
            if !metric_keys.insert(metric.key.as_str()) {
                return Err(format!("Duplicate metric key '{}'", metric.key));
            }
            if !metric_ids.insert(metric.id) {
                return Err(format!("Duplicate metric id {}", metric.id));
            }
        }

        let mut component_uuids = HashSet::new();
        for component in &self.components {
            if !component_uuids.insert(component.uuid) {
                return Err(format!("Duplicate component uuid '{}'", component.uuid));
            }
        }
        Ok(())
    }
}

/// DatasetLoader - Reads a dataset file from the file system
///
/// The file goes through the same checks as any other input of the tool:
/// no symbolic links, regular files only, bounded size.
pub struct DatasetLoader {
    path: PathBuf,
}

impl DatasetLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Dataset> {
        let content = read_checked(&self.path, "dataset").map_err(|e| {
            MeasuresError::DatasetReadError {
                path: self.path.clone(),
                details: e.to_string(),
            }
        })?;
        let dataset = Dataset::from_json(&content, &self.path)?;
        info!(
            path = %self.path.display(),
            metrics = dataset.metrics.len(),
            components = dataset.components.len(),
            measures = dataset.measures.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }
}
