use crate::shared::{MeasuresError, Result};
use serde::{Deserialize, Serialize};

/// Fixed caps applied while validating requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestLimits {
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub max_metric_keys: usize,
    pub max_project_keys: usize,
    pub history_default_page_size: usize,
    pub history_max_page_size: usize,
}

impl Default for RequestLimits {
    fn default() -> Self {
        Self {
            default_page_size: 100,
            max_page_size: 500,
            max_metric_keys: 15,
            max_project_keys: 100,
            history_default_page_size: 100,
            history_max_page_size: 1000,
        }
    }
}

impl RequestLimits {
    /// Rejects zero caps and defaults above their maximum
    pub fn validate(&self) -> Result<()> {
        let caps = [
            ("default_page_size", self.default_page_size),
            ("max_page_size", self.max_page_size),
            ("max_metric_keys", self.max_metric_keys),
            ("max_project_keys", self.max_project_keys),
            ("history_default_page_size", self.history_default_page_size),
            ("history_max_page_size", self.history_max_page_size),
        ];
        if let Some((name, _)) = caps.iter().find(|(_, value)| *value == 0) {
            return Err(MeasuresError::Validation {
                message: format!("limits.{} must be greater than 0", name),
            }
            .into());
        }
        if self.default_page_size > self.max_page_size {
            return Err(MeasuresError::Validation {
                message: format!(
                    "limits.default_page_size ({}) must not exceed limits.max_page_size ({})",
                    self.default_page_size, self.max_page_size
                ),
            }
            .into());
        }
        if self.history_default_page_size > self.history_max_page_size {
            return Err(MeasuresError::Validation {
                message: format!(
                    "limits.history_default_page_size ({}) must not exceed limits.history_max_page_size ({})",
                    self.history_default_page_size, self.history_max_page_size
                ),
            }
            .into());
        }
        Ok(())
    }
}
