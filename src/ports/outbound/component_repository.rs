use crate::measures::domain::{Branch, BranchSelector, Component, ComponentTreeQuery, ComponentUuid};
use crate::shared::Result;

/// ComponentRepository port for reading the analysed component trees
///
/// Components and branches are created by the analysis pipeline and are
/// read-only here.
pub trait ComponentRepository {
    /// Finds an enabled component by key on the branch designated by `selector`
    ///
    /// With [`BranchSelector::Main`], components of the main branch and
    /// components outside any branch (views, sub-views) match.
    fn component_by_key(&self, key: &str, selector: &BranchSelector) -> Result<Option<Component>>;

    /// Finds an enabled component by uuid
    fn component_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Component>>;

    /// Bulk lookup of enabled components by uuid; unknown uuids are skipped
    fn components_by_uuids(&self, uuids: &[ComponentUuid]) -> Result<Vec<Component>>;

    /// Bulk lookup of enabled main-branch components by key; unknown keys are skipped
    fn components_by_keys(&self, keys: &[String]) -> Result<Vec<Component>>;

    /// Descendants of the query's base component
    ///
    /// # Arguments
    /// * `query` - Base component, traversal strategy and filters
    ///
    /// # Returns
    /// Matching enabled descendants, the base component excluded
    ///
    /// # Errors
    /// Returns an error if the underlying store cannot be queried
    fn descendants(&self, query: &ComponentTreeQuery) -> Result<Vec<Component>>;

    /// Branch whose root component has the given uuid, if any
    fn branch_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Branch>>;
}

impl<T: ComponentRepository + ?Sized> ComponentRepository for &T {
    fn component_by_key(&self, key: &str, selector: &BranchSelector) -> Result<Option<Component>> {
        (**self).component_by_key(key, selector)
    }

    fn component_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Component>> {
        (**self).component_by_uuid(uuid)
    }

    fn components_by_uuids(&self, uuids: &[ComponentUuid]) -> Result<Vec<Component>> {
        (**self).components_by_uuids(uuids)
    }

    fn components_by_keys(&self, keys: &[String]) -> Result<Vec<Component>> {
        (**self).components_by_keys(keys)
    }

    fn descendants(&self, query: &ComponentTreeQuery) -> Result<Vec<Component>> {
        (**self).descendants(query)
    }

    fn branch_by_uuid(&self, uuid: ComponentUuid) -> Result<Option<Branch>> {
        (**self).branch_by_uuid(uuid)
    }
}
