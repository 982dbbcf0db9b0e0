use super::component_param::component_ref;
use super::{AdditionalField, RequestParams, ADDITIONAL_FIELDS_PARAM};
use crate::measures::services::ComponentRef;
use crate::shared::{check_request, Result};

pub const COMPONENT_PARAM: &str = "component";
pub const COMPONENT_ID_PARAM: &str = "componentId";
pub const METRIC_KEYS_PARAM: &str = "metricKeys";

/// Validated request of the `component` action
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentRequest {
    pub component: ComponentRef,
    pub metric_keys: Vec<String>,
    pub additional_fields: Vec<AdditionalField>,
}

impl ComponentRequest {
    /// Builds the request from raw parameters, or fails with a bad request
    pub fn from_params(params: &RequestParams) -> Result<Self> {
        let component = component_ref(params, COMPONENT_PARAM, Some(COMPONENT_ID_PARAM))?;
        let metric_keys = params.mandatory_param_as_strings(METRIC_KEYS_PARAM)?;
        check_request(!metric_keys.is_empty(), || {
            format!(
                "The '{}' parameter must contain at least one metric key",
                METRIC_KEYS_PARAM
            )
        })?;
        let additional_fields =
            AdditionalField::parse_list(params.param_as_strings(ADDITIONAL_FIELDS_PARAM))?;

        Ok(Self {
            component,
            metric_keys,
            additional_fields,
        })
    }

    pub fn wants(&self, field: AdditionalField) -> bool {
        self.additional_fields.contains(&field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::domain::BranchSelector;

    #[test]
    fn test_valid_request() {
        let params = RequestParams::new()
            .with("component", "my_app")
            .with("pullRequest", "42")
            .with("metricKeys", "ncloc,new_violations")
            .with("additionalFields", "metrics,periods");

        let request = ComponentRequest::from_params(&params).unwrap();

        assert_eq!(
            request.component,
            ComponentRef::key("my_app", BranchSelector::PullRequest("42".to_string()))
        );
        assert_eq!(request.metric_keys, vec!["ncloc", "new_violations"]);
        assert!(request.wants(AdditionalField::Metrics));
        assert!(request.wants(AdditionalField::Periods));
    }

    #[test]
    fn test_metric_keys_required() {
        let params = RequestParams::new().with("component", "my_app");
        let err = ComponentRequest::from_params(&params).unwrap_err();
        assert_eq!(err.to_string(), "The 'metricKeys' parameter is missing");

        let params = params.with("metricKeys", ",");
        let err = ComponentRequest::from_params(&params).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The 'metricKeys' parameter must contain at least one metric key"
        );
    }
}
