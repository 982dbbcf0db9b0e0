use super::RequestParams;
use crate::measures::domain::BranchSelector;
use crate::measures::services::ComponentRef;
use crate::shared::{check_request, MeasuresError, Result};

pub const BRANCH_PARAM: &str = "branch";
pub const PULL_REQUEST_PARAM: &str = "pullRequest";

/// Reads the component designation of a request
///
/// # Arguments
/// * `key_param` - Name of the component key parameter
/// * `legacy_param` - Name of the legacy uuid parameter, if the action has one
///
/// # Errors
/// Bad request when the legacy uuid is combined with a branch or pull
/// request, when both or neither of key and uuid are given, or when both a
/// branch and a pull request are given
pub fn component_ref(
    params: &RequestParams,
    key_param: &str,
    legacy_param: Option<&str>,
) -> Result<ComponentRef> {
    let branch = params.param(BRANCH_PARAM);
    let pull_request = params.param(PULL_REQUEST_PARAM);
    let legacy_id = legacy_param.and_then(|name| params.param(name));

    if let (Some(legacy), Some(_)) = (legacy_param, legacy_id) {
        check_request(branch.is_none() && pull_request.is_none(), || {
            format!(
                "Parameter '{}' cannot be used at the same time as '{}' or '{}'",
                legacy, BRANCH_PARAM, PULL_REQUEST_PARAM
            )
        })?;
    }
    check_request(branch.is_none() || pull_request.is_none(), || {
        "Either branch or pull request can be provided, not both".to_string()
    })?;

    let key = params.param(key_param);
    match (key, legacy_id) {
        (Some(key), None) => Ok(ComponentRef::key(
            key,
            BranchSelector::from_params(branch, pull_request),
        )),
        (None, Some(id)) => Ok(ComponentRef::LegacyId(id.to_string())),
        _ => {
            let message = match legacy_param {
                Some(legacy) => format!("Either '{}' or '{}' must be provided", legacy, key_param),
                None => format!("The '{}' parameter is missing", key_param),
            };
            Err(MeasuresError::bad_request(message).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::status_code_of;

    #[test]
    fn test_key_with_branch() {
        let params = RequestParams::new()
            .with("component", "my_app")
            .with("branch", "feature");
        let reference = component_ref(&params, "component", Some("componentId")).unwrap();
        assert_eq!(
            reference,
            ComponentRef::key("my_app", BranchSelector::Branch("feature".to_string()))
        );
    }

    #[test]
    fn test_legacy_id_conflicts_with_branch() {
        let params = RequestParams::new()
            .with("componentId", "00000000-0000-0000-0000-000000000001")
            .with("branch", "feature");
        let err = component_ref(&params, "component", Some("componentId")).unwrap_err();
        assert_eq!(status_code_of(&err), 400);
        assert_eq!(
            err.to_string(),
            "Parameter 'componentId' cannot be used at the same time as 'branch' or 'pullRequest'"
        );
    }

    #[test]
    fn test_missing_component() {
        let err = component_ref(&RequestParams::new(), "component", Some("componentId")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Either 'componentId' or 'component' must be provided"
        );

        let err = component_ref(&RequestParams::new(), "component", None).unwrap_err();
        assert_eq!(err.to_string(), "The 'component' parameter is missing");
    }

    #[test]
    fn test_branch_and_pull_request_are_exclusive() {
        let params = RequestParams::new()
            .with("component", "my_app")
            .with("branch", "feature")
            .with("pullRequest", "42");
        assert!(component_ref(&params, "component", None).is_err());
    }
}
