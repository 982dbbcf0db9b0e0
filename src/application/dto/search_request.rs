use super::component_request::METRIC_KEYS_PARAM;
use super::{RequestLimits, RequestParams};
use crate::shared::{check_request, Result};

pub const PROJECT_KEYS_PARAM: &str = "projectKeys";

/// Validated request of the `search` action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub project_keys: Vec<String>,
    pub metric_keys: Vec<String>,
}

impl SearchRequest {
    /// Builds the request from raw parameters, or fails with a bad request
    pub fn from_params(params: &RequestParams, limits: &RequestLimits) -> Result<Self> {
        let project_keys = params.param_as_strings(PROJECT_KEYS_PARAM).unwrap_or_default();
        let metric_keys = params.param_as_strings(METRIC_KEYS_PARAM).unwrap_or_default();

        check_request(!project_keys.is_empty(), || {
            "Project keys must be provided".to_string()
        })?;
        check_request(project_keys.len() <= limits.max_project_keys, || {
            format!(
                "{} projects provided, more than maximum authorized ({})",
                project_keys.len(),
                limits.max_project_keys
            )
        })?;
        check_request(!metric_keys.is_empty(), || {
            "Metric keys must be provided".to_string()
        })?;

        Ok(Self {
            project_keys,
            metric_keys,
        })
    }
}
