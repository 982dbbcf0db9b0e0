use super::component::ComponentUuid;
use serde::{Deserialize, Serialize};

/// Kind of branch an analysis was made on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BranchType {
    Long,
    Short,
    PullRequest,
}

/// A branch or pull request of a project
///
/// `uuid` is also the uuid of the branch's root component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub uuid: ComponentUuid,
    pub project_uuid: ComponentUuid,
    pub key: String,
    pub branch_type: BranchType,
    #[serde(default)]
    pub is_main: bool,
}

impl Branch {
    /// Short-lived branches and pull requests only compute absolute measures
    pub fn is_short_lived_or_pull_request(&self) -> bool {
        matches!(self.branch_type, BranchType::Short | BranchType::PullRequest)
    }

    pub fn is_pull_request(&self) -> bool {
        self.branch_type == BranchType::PullRequest
    }
}

/// How the caller addressed the branch of a component
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BranchSelector {
    /// No discriminator: the main branch (or a component outside any branch)
    #[default]
    Main,
    Branch(String),
    PullRequest(String),
}

impl BranchSelector {
    /// Builds the selector from the two optional request parameters
    pub fn from_params(branch: Option<&str>, pull_request: Option<&str>) -> Self {
        match (branch, pull_request) {
            (_, Some(pr)) => BranchSelector::PullRequest(pr.to_string()),
            (Some(branch), None) => BranchSelector::Branch(branch.to_string()),
            (None, None) => BranchSelector::Main,
        }
    }

    /// True when `branch` is the one designated by this selector
    pub fn matches(&self, branch: &Branch) -> bool {
        match self {
            BranchSelector::Main => branch.is_main,
            BranchSelector::Branch(key) => !branch.is_pull_request() && branch.key == *key,
            BranchSelector::PullRequest(key) => branch.is_pull_request() && branch.key == *key,
        }
    }

    pub fn branch(&self) -> Option<&str> {
        match self {
            BranchSelector::Branch(key) => Some(key),
            _ => None,
        }
    }

    pub fn pull_request(&self) -> Option<&str> {
        match self {
            BranchSelector::PullRequest(key) => Some(key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn branch(key: &str, branch_type: BranchType, is_main: bool) -> Branch {
        Branch {
            uuid: ComponentUuid(Uuid::from_u128(10)),
            project_uuid: ComponentUuid(Uuid::from_u128(1)),
            key: key.to_string(),
            branch_type,
            is_main,
        }
    }

    #[test]
    fn test_short_lived_detection() {
        assert!(branch("feature", BranchType::Short, false).is_short_lived_or_pull_request());
        assert!(branch("42", BranchType::PullRequest, false).is_short_lived_or_pull_request());
        assert!(!branch("main", BranchType::Long, true).is_short_lived_or_pull_request());
    }

    #[test]
    fn test_selector_from_params_prefers_pull_request() {
        assert_eq!(BranchSelector::from_params(None, None), BranchSelector::Main);
        assert_eq!(
            BranchSelector::from_params(Some("feature"), None),
            BranchSelector::Branch("feature".to_string())
        );
        assert_eq!(
            BranchSelector::from_params(None, Some("42")),
            BranchSelector::PullRequest("42".to_string())
        );
    }

    #[test]
    fn test_selector_matching() {
        let main = branch("main", BranchType::Long, true);
        let feature = branch("feature", BranchType::Short, false);
        let pr = branch("42", BranchType::PullRequest, false);

        assert!(BranchSelector::Main.matches(&main));
        assert!(!BranchSelector::Main.matches(&feature));
        assert!(BranchSelector::Branch("feature".to_string()).matches(&feature));
        assert!(!BranchSelector::Branch("42".to_string()).matches(&pr));
        assert!(BranchSelector::PullRequest("42".to_string()).matches(&pr));
    }
}
