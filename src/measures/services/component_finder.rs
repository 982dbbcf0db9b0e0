use crate::measures::domain::{BranchSelector, Component, ComponentUuid};
use crate::ports::outbound::ComponentRepository;
use crate::shared::{check_found, Result};

/// How the caller designated the component of a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentRef {
    /// Component key, optionally on a branch or pull request
    Key { key: String, selector: BranchSelector },
    /// Legacy component uuid, never combined with a branch
    LegacyId(String),
}

impl ComponentRef {
    pub fn key(key: impl Into<String>, selector: BranchSelector) -> Self {
        ComponentRef::Key {
            key: key.into(),
            selector,
        }
    }

    pub fn selector(&self) -> BranchSelector {
        match self {
            ComponentRef::Key { selector, .. } => selector.clone(),
            ComponentRef::LegacyId(_) => BranchSelector::Main,
        }
    }
}

/// ComponentFinder - Resolves the component designated by a request
pub struct ComponentFinder<R: ComponentRepository> {
    repository: R,
}

impl<R: ComponentRepository> ComponentFinder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Resolves a component reference
    ///
    /// # Errors
    /// Not found when no enabled component matches the reference
    pub fn find(&self, reference: &ComponentRef) -> Result<Component> {
        match reference {
            ComponentRef::Key { key, selector } => self.by_key_and_selector(key, selector),
            ComponentRef::LegacyId(id) => self.by_legacy_id(id),
        }
    }

    fn by_key_and_selector(&self, key: &str, selector: &BranchSelector) -> Result<Component> {
        let component = self.repository.component_by_key(key, selector)?;
        check_found(component, || match selector {
            BranchSelector::Main => format!("Component key '{}' not found", key),
            BranchSelector::Branch(branch) => {
                format!("Component '{}' on branch '{}' not found", key, branch)
            }
            BranchSelector::PullRequest(pr) => {
                format!("Component '{}' on pull request '{}' not found", key, pr)
            }
        })
    }

    fn by_legacy_id(&self, id: &str) -> Result<Component> {
        let component = match id.parse::<ComponentUuid>() {
            Ok(uuid) => self.repository.component_by_uuid(uuid)?,
            Err(_) => None,
        };
        check_found(component, || format!("Component id '{}' not found", id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::domain::{Branch, ComponentTreeQuery, Qualifier};
    use crate::shared::status_code_of;
    use uuid::Uuid;

    struct SingleComponentRepository {
        component: Component,
    }

    impl ComponentRepository for SingleComponentRepository {
        fn component_by_key(&self, key: &str, selector: &BranchSelector) -> Result<Option<Component>> {
            Ok((key == self.component.key && *selector == BranchSelector::Main)
                .then(|| self.component.clone()))
        }

        fn component_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Component>> {
            Ok((uuid == self.component.uuid).then(|| self.component.clone()))
        }

        fn components_by_uuids(&self, _uuids: &[ComponentUuid]) -> Result<Vec<Component>> {
            Ok(vec![])
        }

        fn components_by_keys(&self, _keys: &[String]) -> Result<Vec<Component>> {
            Ok(vec![])
        }

        fn descendants(&self, _query: &ComponentTreeQuery) -> Result<Vec<Component>> {
            Ok(vec![])
        }

        fn branch_by_uuid(&self, _uuid: ComponentUuid) -> Result<Option<Branch>> {
            Ok(None)
        }
    }

    fn finder() -> ComponentFinder<SingleComponentRepository> {
        ComponentFinder::new(SingleComponentRepository {
            component: Component::root(Uuid::from_u128(1), "my_app", Qualifier::Project),
        })
    }

    #[test]
    fn test_find_by_key() {
        let component = finder()
            .find(&ComponentRef::key("my_app", BranchSelector::Main))
            .unwrap();
        assert_eq!(component.key, "my_app");
    }

    #[test]
    fn test_not_found_messages_name_the_branch() {
        let finder = finder();

        let err = finder
            .find(&ComponentRef::key("other", BranchSelector::Main))
            .unwrap_err();
        assert_eq!(err.to_string(), "Component key 'other' not found");
        assert_eq!(status_code_of(&err), 404);

        let err = finder
            .find(&ComponentRef::key("my_app", BranchSelector::Branch("feature".to_string())))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Component 'my_app' on branch 'feature' not found"
        );

        let err = finder
            .find(&ComponentRef::key("my_app", BranchSelector::PullRequest("42".to_string())))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Component 'my_app' on pull request '42' not found"
        );
    }

    #[test]
    fn test_find_by_legacy_id() {
        let finder = finder();
        let component = finder
            .find(&ComponentRef::LegacyId(Uuid::from_u128(1).to_string()))
            .unwrap();
        assert_eq!(component.key, "my_app");

        let err = finder
            .find(&ComponentRef::LegacyId("not-a-uuid".to_string()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Component id 'not-a-uuid' not found");
    }
}
